// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::clamp::clamped;
use crate::nice::round_to_next_significant;

/// Label-count policy and spacing options for tick computation.
///
/// The label count is only a target: unless [`TickConfig::force_labels`] is
/// set, the computed interval is rounded to a "nice" value and the actual
/// number of ticks follows from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickConfig {
    label_count: usize,
    min_labels: usize,
    max_labels: usize,
    granularity: f64,
    granularity_enabled: bool,
    force_labels: bool,
    center_labels: bool,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            label_count: 6,
            min_labels: 2,
            max_labels: 25,
            granularity: 1.0,
            granularity_enabled: false,
            force_labels: false,
            center_labels: false,
        }
    }
}

impl TickConfig {
    /// Target number of labels.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    /// Sets the target number of labels and turns forced counts off.
    ///
    /// The count is clamped into `[min_labels, max_labels]`.
    pub fn set_label_count(&mut self, count: usize) {
        self.label_count = clamped(count, self.min_labels..=self.max_labels);
        self.force_labels = false;
    }

    /// Sets the target number of labels and whether it must be met exactly.
    pub fn set_label_count_forced(&mut self, count: usize, force: bool) {
        self.set_label_count(count);
        self.force_labels = force;
    }

    /// Lower bound for the label count (default 2).
    #[must_use]
    pub fn min_labels(&self) -> usize {
        self.min_labels
    }

    /// Sets the lower bound for the label count. Zero is ignored.
    pub fn set_min_labels(&mut self, min: usize) {
        if min > 0 {
            self.min_labels = min;
        }
    }

    /// Upper bound for the label count (default 25).
    #[must_use]
    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// Sets the upper bound for the label count. Zero is ignored.
    pub fn set_max_labels(&mut self, max: usize) {
        if max > 0 {
            self.max_labels = max;
        }
    }

    /// Minimum interval between ticks, used when granularity is enabled.
    #[must_use]
    pub fn granularity(&self) -> f64 {
        self.granularity
    }

    /// Sets the minimum interval between ticks and enables granularity.
    pub fn set_granularity(&mut self, granularity: f64) {
        self.granularity = granularity;
        self.granularity_enabled = true;
    }

    /// Whether the interval is floored at [`Self::granularity`].
    #[must_use]
    pub fn granularity_enabled(&self) -> bool {
        self.granularity_enabled
    }

    /// Enables or disables the granularity floor.
    pub fn set_granularity_enabled(&mut self, enabled: bool) {
        self.granularity_enabled = enabled;
    }

    /// Whether exactly [`Self::label_count`] ticks are generated.
    #[must_use]
    pub fn force_labels(&self) -> bool {
        self.force_labels
    }

    /// Whether labels are centered between ticks.
    #[must_use]
    pub fn center_labels(&self) -> bool {
        self.center_labels
    }

    /// Enables or disables centered labels (useful for grouped bars).
    pub fn set_center_labels(&mut self, enabled: bool) {
        self.center_labels = enabled;
    }
}

/// Computed tick values for one axis.
///
/// This is the single source of truth for where gridlines and labels go;
/// renderers should not derive intervals on their own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    entries: Vec<f64>,
    centered: Vec<f64>,
    interval: f64,
    decimals: usize,
}

impl Ticks {
    /// Computes ticks between `min` and `max` for the given configuration.
    #[must_use]
    pub fn compute(min: f64, max: f64, config: &TickConfig) -> Self {
        let mut ticks = Self::default();
        ticks.recompute(min, max, config);
        ticks
    }

    /// Tick values in data space, ascending.
    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Tick values shifted by half an interval.
    ///
    /// Empty unless [`TickConfig::center_labels`] was set; otherwise parallel
    /// to [`Self::entries`].
    #[must_use]
    pub fn centered_entries(&self) -> &[f64] {
        &self.centered
    }

    /// Spacing between adjacent ticks, `0.0` for an empty tick set.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of fraction digits needed to tell ticks apart.
    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats tick `index` with [`Self::decimals`] fraction digits.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        let value = *self.entries.get(index)?;
        Some(alloc::format!("{:.*}", self.decimals, value))
    }

    /// Returns the label with the most characters, or an empty string.
    #[must_use]
    pub fn longest_label(&self) -> String {
        (0..self.len())
            .filter_map(|i| self.label(i))
            .fold(String::new(), |longest, label| {
                if label.chars().count() > longest.chars().count() {
                    label
                } else {
                    longest
                }
            })
    }

    /// Recomputes the ticks in place, reusing the existing allocations.
    ///
    /// An empty tick set results when the label count is zero or the range
    /// `|max - min|` is zero, negative or not finite.
    pub fn recompute(&mut self, min: f64, max: f64, config: &TickConfig) {
        self.entries.clear();
        self.centered.clear();
        self.interval = 0.0;
        self.decimals = 0;

        let label_count = config.label_count;
        let range = (max - min).abs();
        if label_count == 0 || range <= 0.0 || !range.is_finite() {
            return;
        }

        let interval = if config.force_labels {
            let interval = range / (label_count - 1) as f64;
            let mut v = min;
            for _ in 0..label_count {
                self.entries.push(v);
                v += interval;
            }
            interval
        } else {
            let interval = nice_interval(range / label_count as f64, config);
            self.push_stepped(min, max, interval, config.center_labels);
            interval
        };

        self.interval = interval;
        if interval > 0.0 && interval < 1.0 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "digit counts of positive finite doubles are small"
            )]
            let decimals = libm::ceil(-libm::log10(interval)) as usize;
            self.decimals = decimals;
        }

        if config.center_labels {
            let offset = interval / 2.0;
            self.centered
                .extend(self.entries.iter().map(|entry| entry + offset));
        }

        tracing::trace!(
            min,
            max,
            interval,
            count = self.entries.len(),
            decimals = self.decimals,
            "computed axis ticks"
        );
    }

    fn push_stepped(&mut self, min: f64, max: f64, interval: f64, center: bool) {
        let mut first = if interval == 0.0 {
            0.0
        } else {
            libm::ceil(min / interval) * interval
        };
        if center {
            first -= interval;
        }
        let last = if interval == 0.0 {
            0.0
        } else {
            (libm::floor(max / interval) * interval).next_up()
        };

        let mut count = usize::from(center);
        if interval != 0.0 && last != first {
            count += stride_len(first, last, interval);
        } else if last == first && count == 0 {
            count = 1;
        }

        let mut f = first;
        for _ in 0..count {
            if f == 0.0 {
                // Normalize -0.0.
                f = 0.0;
            }
            self.entries.push(f);
            f += interval;
        }
    }
}

/// Computes ticks between `min` and `max`; shorthand for [`Ticks::compute`].
#[must_use]
pub fn compute_ticks(min: f64, max: f64, config: &TickConfig) -> Ticks {
    Ticks::compute(min, max, config)
}

/// Rounds a raw interval to a human-friendly one.
fn nice_interval(raw: f64, config: &TickConfig) -> f64 {
    let mut interval = round_to_next_significant(raw);

    if config.granularity_enabled && interval < config.granularity {
        interval = config.granularity;
    }

    // Avoid intervals like 0.9 or 90 by moving up one order of magnitude,
    // unless that floors to zero.
    let magnitude =
        round_to_next_significant(libm::pow(10.0, libm::floor(libm::log10(interval))));
    if libm::trunc(interval / magnitude) > 5.0 {
        let bumped = libm::floor(10.0 * magnitude);
        if bumped != 0.0 {
            interval = bumped;
        }
    }
    interval
}

/// Number of values `first + i * step` (for `i = 0, 1, ...`) not above `last`.
fn stride_len(first: f64, last: f64, step: f64) -> usize {
    if step <= 0.0 || first > last {
        return 0;
    }
    let mut len = 0_usize;
    while first + len as f64 * step <= last {
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TickConfig, Ticks, compute_ticks, nice_interval};

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn nice_interval_for_default_label_count() {
        let ticks = compute_ticks(0.0, 100.0, &TickConfig::default());
        assert_eq!(ticks.interval(), 20.0);
        assert_close(ticks.entries(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(ticks.decimals(), 0);
        assert!(ticks.centered_entries().is_empty());
    }

    #[test]
    fn ticks_are_ascending_unique_and_contained() {
        let config = TickConfig::default();
        for (min, max) in [(0.0, 100.0), (-13.7, 42.1), (0.001, 0.0093), (1e6, 3.5e6)] {
            let ticks = compute_ticks(min, max, &config);
            let interval = ticks.interval();
            assert!(interval > 0.0);
            assert!(!ticks.is_empty());
            for pair in ticks.entries().windows(2) {
                assert!(pair[0] < pair[1], "{:?}", ticks.entries());
            }
            for &t in ticks.entries() {
                assert!(t >= min - interval && t <= max + interval);
            }
        }
    }

    #[test]
    fn forced_count_is_exact() {
        let mut config = TickConfig::default();
        config.set_label_count_forced(5, true);
        let ticks = compute_ticks(0.0, 100.0, &config);
        assert_eq!(ticks.entries(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(ticks.interval(), 25.0);
    }

    #[test]
    fn forced_count_ignores_granularity() {
        let mut config = TickConfig::default();
        config.set_label_count_forced(3, true);
        config.set_granularity(40.0);
        let ticks = compute_ticks(0.0, 10.0, &config);
        assert_close(ticks.entries(), &[0.0, 5.0, 10.0]);
    }

    #[test]
    fn degenerate_inputs_yield_no_ticks() {
        let config = TickConfig::default();
        assert!(compute_ticks(5.0, 5.0, &config).is_empty());
        assert!(compute_ticks(0.0, f64::INFINITY, &config).is_empty());
        assert!(compute_ticks(f64::NAN, 1.0, &config).is_empty());
        assert_eq!(compute_ticks(5.0, 5.0, &config).interval(), 0.0);
    }

    #[test]
    fn subnormal_range_has_finite_interval() {
        let max = 1e-310;
        let ticks = compute_ticks(0.0, max, &TickConfig::default());
        let interval = ticks.interval();
        assert!(interval.is_finite() && interval > 0.0, "{interval:e}");
        assert!(!ticks.is_empty());
        for pair in ticks.entries().windows(2) {
            assert!(pair[0] < pair[1], "{:?}", ticks.entries());
        }
        for &t in ticks.entries() {
            assert!((0.0..=max + interval).contains(&t), "{t:e}");
        }
    }

    #[test]
    fn zero_interval_yields_single_zero_tick() {
        // The raw interval underflows to exactly zero.
        let ticks = compute_ticks(0.0, 5e-324, &TickConfig::default());
        assert_eq!(ticks.entries(), &[0.0]);
        assert_eq!(ticks.interval(), 0.0);
        assert_eq!(ticks.decimals(), 0);
    }

    #[test]
    fn zero_label_count_yields_no_ticks() {
        let config = TickConfig {
            label_count: 0,
            ..TickConfig::default()
        };
        let ticks = compute_ticks(0.0, 100.0, &config);
        assert!(ticks.is_empty());
        assert_eq!(ticks.interval(), 0.0);
        assert!(ticks.centered_entries().is_empty());
    }

    #[test]
    fn granularity_floors_interval() {
        let mut config = TickConfig::default();
        config.set_granularity(1.0);
        assert!(config.granularity_enabled());
        let ticks = compute_ticks(0.0, 2.0, &config);
        assert_eq!(ticks.interval(), 1.0);
        assert_close(ticks.entries(), &[0.0, 1.0, 2.0]);

        config.set_granularity_enabled(false);
        let ticks = compute_ticks(0.0, 2.0, &config);
        assert!(ticks.interval() < 1.0);
    }

    #[test]
    fn leading_digit_above_five_moves_up_a_magnitude() {
        // 0.7 would be the raw nice interval; it becomes 1.
        assert_eq!(nice_interval(0.7, &TickConfig::default()), 1.0);
        assert_eq!(nice_interval(80.0, &TickConfig::default()), 100.0);
        assert_eq!(nice_interval(50.0, &TickConfig::default()), 50.0);
        // Bumping 0.07 would floor to zero, so it stays.
        assert!((nice_interval(0.07, &TickConfig::default()) - 0.07).abs() < 1e-15);
    }

    #[test]
    fn fractional_intervals_set_decimals() {
        let ticks = compute_ticks(0.0, 1.0, &TickConfig::default());
        assert!((ticks.interval() - 0.2).abs() < 1e-15);
        assert_eq!(ticks.decimals(), 1);
        assert_eq!(ticks.label(1).as_deref(), Some("0.2"));
        assert_eq!(ticks.label(99), None);

        let ticks = compute_ticks(0.0, 0.1, &TickConfig::default());
        assert_eq!(ticks.decimals(), 2);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let ticks = compute_ticks(-40.0, 40.0, &TickConfig::default());
        let zero = ticks
            .entries()
            .iter()
            .copied()
            .find(|v| *v == 0.0)
            .expect("zero tick");
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn centered_labels_add_half_interval() {
        let mut config = TickConfig::default();
        config.set_center_labels(true);
        let ticks = compute_ticks(0.0, 100.0, &config);
        assert_eq!(ticks.entries().first().copied(), Some(-20.0));
        assert_eq!(ticks.len(), ticks.centered_entries().len());
        let expected: Vec<f64> = ticks.entries().iter().map(|v| v + 10.0).collect();
        assert_close(ticks.centered_entries(), &expected);
    }

    #[test]
    fn single_tick_when_range_holds_one_boundary() {
        // Only 10 lies on an interval boundary inside [9.5, 10.4].
        let mut config = TickConfig::default();
        config.set_label_count(2);
        config.set_granularity(1.0);
        let ticks = compute_ticks(9.5, 10.4, &config);
        assert_close(ticks.entries(), &[10.0]);
    }

    #[test]
    fn label_count_is_clamped_and_resets_force() {
        let mut config = TickConfig::default();
        config.set_label_count_forced(4, true);
        assert!(config.force_labels());
        config.set_label_count(100);
        assert_eq!(config.label_count(), 25);
        assert!(!config.force_labels());
        config.set_label_count(0);
        assert_eq!(config.label_count(), 2);

        config.set_min_labels(0);
        assert_eq!(config.min_labels(), 2);
    }

    #[test]
    fn recompute_reuses_and_replaces() {
        let config = TickConfig::default();
        let mut ticks = Ticks::compute(0.0, 100.0, &config);
        ticks.recompute(0.0, 10.0, &config);
        assert_close(ticks.entries(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks.longest_label(), "10");
    }
}
