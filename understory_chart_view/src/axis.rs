// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_chart_axis::{TickConfig, Ticks};

use crate::{ChartViewport, Transformer};

/// Content narrower than this (in pixels) always uses the full axis range.
const MIN_CONTENT_WIDTH: f64 = 10.0;

/// Which chart axis a computation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisDirection {
    /// The horizontal (X) axis.
    Horizontal,
    /// The vertical (Y) axis.
    Vertical,
}

impl Transformer {
    /// Data range currently visible along `direction`, as `(min, max)`.
    ///
    /// Returns `None` when the chart is fully zoomed out on that axis, the
    /// content is too narrow, or the transform cannot be inverted; callers
    /// then fall back to the full axis range.
    #[must_use]
    pub fn visible_range(
        &self,
        viewport: &ChartViewport,
        direction: AxisDirection,
        inverted: bool,
    ) -> Option<(f64, f64)> {
        if viewport.content_width() <= MIN_CONTENT_WIDTH {
            return None;
        }
        let left_top = Point::new(viewport.content_left(), viewport.content_top());
        match direction {
            AxisDirection::Horizontal => {
                if viewport.is_fully_zoomed_out_x() {
                    return None;
                }
                let right_top = Point::new(viewport.content_right(), viewport.content_top());
                let start = self.value_for_touch_point(viewport, left_top).ok()?;
                let end = self.value_for_touch_point(viewport, right_top).ok()?;
                Some(if inverted {
                    (end.x, start.x)
                } else {
                    (start.x, end.x)
                })
            }
            AxisDirection::Vertical => {
                if viewport.is_fully_zoomed_out_y() {
                    return None;
                }
                let left_bottom = Point::new(viewport.content_left(), viewport.content_bottom());
                let top = self.value_for_touch_point(viewport, left_top).ok()?;
                let bottom = self.value_for_touch_point(viewport, left_bottom).ok()?;
                Some(if inverted {
                    (top.y, bottom.y)
                } else {
                    (bottom.y, top.y)
                })
            }
        }
    }
}

/// Computes the ticks for an axis spanning `min..max`.
///
/// When the chart is zoomed in on `direction`, the ticks cover only the
/// visible part of the axis so labels stay dense while zooming.
#[must_use]
pub fn compute_axis(
    transformer: &Transformer,
    viewport: &ChartViewport,
    direction: AxisDirection,
    config: &TickConfig,
    min: f64,
    max: f64,
    inverted: bool,
) -> Ticks {
    let (min, max) = transformer
        .visible_range(viewport, direction, inverted)
        .unwrap_or((min, max));
    Ticks::compute(min, max, config)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_chart_axis::TickConfig;

    use super::{AxisDirection, compute_axis};
    use crate::{ChartViewport, Transformer};

    fn setup(inverted: bool) -> (ChartViewport, Transformer) {
        let mut vp = ChartViewport::new(300.0, 300.0);
        vp.set_margins(50.0, 50.0, 50.0, 50.0);
        let mut t = Transformer::new();
        t.prepare_value_to_pixel_matrix(&vp, 0.0, 100.0, 100.0, 0.0);
        t.prepare_offset_matrix(&vp, inverted);
        (vp, t)
    }

    #[test]
    fn fully_zoomed_out_uses_full_range() {
        let (vp, t) = setup(false);
        assert_eq!(t.visible_range(&vp, AxisDirection::Vertical, false), None);
        let ticks = compute_axis(
            &t,
            &vp,
            AxisDirection::Vertical,
            &TickConfig::default(),
            0.0,
            100.0,
            false,
        );
        assert_eq!(ticks.interval(), 20.0);
        assert_eq!(ticks.len(), 6);
    }

    #[test]
    fn zoomed_in_uses_visible_range() {
        let (mut vp, t) = setup(false);
        // Zoom 2x about the content center; the touch matrix works in flipped
        // Y, so the pivot's Y is negated.
        vp.refresh(vp.zoom(2.0, 2.0, Point::new(100.0, -100.0)));

        let (min, max) = t
            .visible_range(&vp, AxisDirection::Vertical, false)
            .expect("zoomed in");
        assert!((min - 25.0).abs() < 1e-9);
        assert!((max - 75.0).abs() < 1e-9);

        let (min, max) = t
            .visible_range(&vp, AxisDirection::Horizontal, false)
            .expect("zoomed in");
        assert!((min - 25.0).abs() < 1e-9);
        assert!((max - 75.0).abs() < 1e-9);

        let ticks = compute_axis(
            &t,
            &vp,
            AxisDirection::Vertical,
            &TickConfig::default(),
            0.0,
            100.0,
            false,
        );
        assert_eq!(ticks.interval(), 10.0);
        assert!(ticks.entries().iter().all(|v| (25.0..=75.0).contains(v)));
    }

    #[test]
    fn inverted_visible_range_is_ordered() {
        let (mut vp, t) = setup(true);
        vp.refresh(vp.zoom(2.0, 2.0, Point::new(100.0, -100.0)));
        let (min, max) = t
            .visible_range(&vp, AxisDirection::Vertical, true)
            .expect("zoomed in");
        assert!(min < max);
        assert!((min - 25.0).abs() < 1e-9);
        assert!((max - 75.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_content_uses_full_range() {
        let mut vp = ChartViewport::new(60.0, 300.0);
        vp.set_margins(25.0, 0.0, 25.0, 0.0);
        let mut t = Transformer::new();
        t.prepare_value_to_pixel_matrix(&vp, 0.0, 10.0, 10.0, 0.0);
        t.prepare_offset_matrix(&vp, false);
        vp.refresh(vp.zoom_by(1.0, 3.0));
        assert_eq!(t.visible_range(&vp, AxisDirection::Vertical, false), None);
    }
}
