// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How extra space is added around the data extent of an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPadding {
    /// Padding in data units, subtracted from the minimum and added to the
    /// maximum before any widening.
    ///
    /// This is the convention used for horizontal (X) axes.
    Absolute {
        /// Space below the data minimum.
        space_min: f64,
        /// Space above the data maximum.
        space_max: f64,
    },
    /// Padding as a fraction of the data range, applied after a zero range
    /// has been widened and only to bounds that are not custom.
    ///
    /// This is the convention used for vertical (Y) axes.
    Fractional {
        /// Space above the maximum, as a fraction of the range.
        space_top: f64,
        /// Space below the minimum, as a fraction of the range.
        space_bottom: f64,
    },
}

impl AxisPadding {
    /// No padding at all.
    pub const NONE: Self = Self::Absolute {
        space_min: 0.0,
        space_max: 0.0,
    };

    /// Ten percent of the range above and below the data, the default for
    /// value axes.
    pub const FRACTIONAL_DEFAULT: Self = Self::Fractional {
        space_top: 0.1,
        space_bottom: 0.1,
    };
}

impl Default for AxisPadding {
    fn default() -> Self {
        Self::NONE
    }
}

/// Effective minimum, maximum and range of one chart axis.
///
/// The range is recomputed from the data extent with [`AxisRange::calculate`]
/// every time the chart data or a custom bound changes. After a calculation
/// [`AxisRange::range`] is never exactly zero: degenerate extents are widened
/// by one unit in each direction.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRange {
    padding: AxisPadding,
    custom_min: Option<f64>,
    custom_max: Option<f64>,
    minimum: f64,
    maximum: f64,
    range: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(AxisPadding::default())
    }
}

impl AxisRange {
    /// Creates an axis range with the given padding and no custom bounds.
    #[must_use]
    pub fn new(padding: AxisPadding) -> Self {
        Self {
            padding,
            custom_min: None,
            custom_max: None,
            minimum: 0.0,
            maximum: 0.0,
            range: 0.0,
        }
    }

    /// Returns the padding convention.
    #[must_use]
    pub fn padding(&self) -> AxisPadding {
        self.padding
    }

    /// Sets the padding convention. Takes effect on the next calculation.
    pub fn set_padding(&mut self, padding: AxisPadding) {
        self.padding = padding;
    }

    /// Effective axis minimum.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Effective axis maximum.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Absolute distance between [`Self::minimum`] and [`Self::maximum`].
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Fixes the axis minimum, overriding the data minimum.
    pub fn set_custom_min(&mut self, min: f64) {
        self.custom_min = Some(min);
        self.minimum = min;
        self.range = (self.maximum - min).abs();
    }

    /// Fixes the axis maximum, overriding the data maximum.
    pub fn set_custom_max(&mut self, max: f64) {
        self.custom_max = Some(max);
        self.maximum = max;
        self.range = (max - self.minimum).abs();
    }

    /// Drops the custom minimum; the next calculation uses the data again.
    pub fn reset_custom_min(&mut self) {
        self.custom_min = None;
    }

    /// Drops the custom maximum; the next calculation uses the data again.
    pub fn reset_custom_max(&mut self) {
        self.custom_max = None;
    }

    /// Returns `true` if the minimum is a user override.
    #[must_use]
    pub fn is_min_custom(&self) -> bool {
        self.custom_min.is_some()
    }

    /// Returns `true` if the maximum is a user override.
    #[must_use]
    pub fn is_max_custom(&self) -> bool {
        self.custom_max.is_some()
    }

    /// Returns the custom minimum, if any.
    #[must_use]
    pub fn custom_min(&self) -> Option<f64> {
        self.custom_min
    }

    /// Returns the custom maximum, if any.
    #[must_use]
    pub fn custom_max(&self) -> Option<f64> {
        self.custom_max
    }

    /// Recomputes the effective bounds from the raw data extent.
    ///
    /// 1. Custom bounds are used as-is; other bounds come from the data, with
    ///    [`AxisPadding::Absolute`] space applied.
    /// 2. If the minimum ends up above the maximum, the conflict is resolved
    ///    depending on which bounds are custom: both custom swaps them, a
    ///    single custom bound derives the other one from it (×1.5 / ×0.5
    ///    depending on sign), and no custom bound leaves the values alone.
    /// 3. A zero range is widened by one unit on each side.
    /// 4. [`AxisPadding::Fractional`] space, a fraction of the range measured
    ///    before widening, is added to the non-custom bounds.
    pub fn calculate(&mut self, data_min: f64, data_max: f64) {
        let (space_min, space_max) = match self.padding {
            AxisPadding::Absolute {
                space_min,
                space_max,
            } => (space_min, space_max),
            AxisPadding::Fractional { .. } => (0.0, 0.0),
        };
        let mut min = self.custom_min.unwrap_or(data_min - space_min);
        let mut max = self.custom_max.unwrap_or(data_max + space_max);

        if min > max {
            match (self.custom_max.is_some(), self.custom_min.is_some()) {
                (true, true) => core::mem::swap(&mut min, &mut max),
                (true, false) => min = if max < 0.0 { max * 1.5 } else { max * 0.5 },
                (false, true) => max = if min < 0.0 { min * 0.5 } else { min * 1.5 },
                (false, false) => {}
            }
            tracing::debug!(min, max, "resolved inverted axis bounds");
        }

        let range = (max - min).abs();
        if range == 0.0 {
            max += 1.0;
            min -= 1.0;
            tracing::debug!(min, max, "widened zero axis range");
        }

        match self.padding {
            AxisPadding::Absolute { .. } => {
                self.minimum = min;
                self.maximum = max;
            }
            AxisPadding::Fractional {
                space_top,
                space_bottom,
            } => {
                self.minimum = if self.custom_min.is_some() {
                    min
                } else {
                    min - range * space_bottom
                };
                self.maximum = if self.custom_max.is_some() {
                    max
                } else {
                    max + range * space_top
                };
            }
        }

        self.range = (self.maximum - self.minimum).abs();
    }
}
