// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" number helpers shared by tick computation and label formatting.

/// Rounds `value` to the nearest multiple of its own order of magnitude.
///
/// Halfway cases round away from zero. Zero, infinities and `NaN` are
/// returned unchanged, as are subnormal values too small to rescale.
///
/// ```
/// use understory_chart_axis::round_to_next_significant;
///
/// assert_eq!(round_to_next_significant(16.666), 20.0);
/// assert_eq!(round_to_next_significant(0.25), 0.3);
/// assert_eq!(round_to_next_significant(-450.0), -500.0);
/// ```
#[must_use]
pub fn round_to_next_significant(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let d = libm::ceil(libm::log10(libm::fabs(value)));
    let magnitude = libm::pow(10.0, 1.0 - d);
    let rounded = if magnitude.is_finite() {
        libm::round(value * magnitude) / magnitude
    } else {
        // `10^(1 - d)` overflows for tiny values; divide by `10^(d - 1)` instead.
        let step = libm::pow(10.0, d - 1.0);
        libm::round(value / step) * step
    };
    if rounded.is_finite() { rounded } else { value }
}

/// Number of fraction digits needed to display `value` with two digits of
/// slack beyond its leading significant digit.
///
/// Returns `0` for zero, infinities, `NaN` and values large enough not to
/// need any fraction digits.
#[must_use]
pub fn decimal_places(value: f64) -> usize {
    if !value.is_finite() || value == 0.0 {
        return 0;
    }
    let nice = round_to_next_significant(value);
    if !nice.is_finite() {
        return 0;
    }
    let digits = libm::ceil(-libm::log10(libm::fabs(nice))) + 2.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "digit counts of finite doubles are far below usize::MAX"
    )]
    let digits = digits.max(0.0) as usize;
    digits
}
