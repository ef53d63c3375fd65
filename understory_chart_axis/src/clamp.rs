// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

/// Clamps `value` into `range`.
///
/// Unlike [`Ord::clamp`] and [`f64::clamp`], this never panics: if the range
/// is inverted (`start > end`) the upper bound is checked first, so values
/// above `end` yield `end` and values below `start` yield `start`.
///
/// Incomparable values (such as `NaN`) are returned unchanged.
///
/// ```
/// use understory_chart_axis::clamped;
///
/// assert_eq!(clamped(30_usize, 2..=25), 25);
/// assert_eq!(clamped(0.5_f64, 1.0..=f64::MAX), 1.0);
/// ```
pub fn clamped<T: PartialOrd>(value: T, range: RangeInclusive<T>) -> T {
    let (start, end) = range.into_inner();
    if value > end {
        end
    } else if value < start {
        start
    } else {
        value
    }
}
