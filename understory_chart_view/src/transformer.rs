// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::affine::{apply_to_rect, compose, try_invert};
use crate::{ChartViewport, TransformError};

/// Maps chart values to pixels and back.
///
/// The full value-to-pixel transform is composed, in this order, from:
/// 1. the value matrix, scaling the visible data range onto the content size
///    (Y flipped, since pixel Y grows downward);
/// 2. the viewport's touch matrix (zoom and pan);
/// 3. the offset matrix, moving the result into the content rectangle.
///
/// Changing that order changes the result. The transformer keeps only the
/// value and offset matrices; the touch matrix is read from the
/// [`ChartViewport`] passed to each call, so one viewport can serve several
/// transformers (for example one per Y axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformer {
    value_to_px: Affine,
    offset: Affine,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer {
    /// Creates a transformer with identity value and offset matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value_to_px: Affine::IDENTITY,
            offset: Affine::IDENTITY,
        }
    }

    /// Prepares the value matrix for a visible range starting at
    /// (`x_min`, `y_min`) and spanning `delta_x` × `delta_y` data units.
    ///
    /// A zero delta yields a zero scale on that axis rather than an infinite
    /// one; such a transform cannot be inverted.
    pub fn prepare_value_to_pixel_matrix(
        &mut self,
        viewport: &ChartViewport,
        x_min: f64,
        delta_x: f64,
        delta_y: f64,
        y_min: f64,
    ) {
        let scale_x = axis_scale(viewport.content_width(), delta_x);
        let scale_y = axis_scale(viewport.content_height(), delta_y);
        self.value_to_px =
            Affine::scale_non_uniform(scale_x, -scale_y) * Affine::translate((-x_min, -y_min));
    }

    /// Prepares the offset matrix from the viewport margins.
    ///
    /// With `inverted` set the Y axis grows downward from the content top.
    pub fn prepare_offset_matrix(&mut self, viewport: &ChartViewport, inverted: bool) {
        self.offset = if inverted {
            Affine::scale_non_uniform(1.0, -1.0)
                * Affine::translate((viewport.offset_left(), -viewport.offset_top()))
        } else {
            Affine::translate((
                viewport.offset_left(),
                viewport.chart_height() - viewport.offset_bottom(),
            ))
        };
    }

    /// The value matrix prepared by [`Self::prepare_value_to_pixel_matrix`].
    #[must_use]
    pub fn value_matrix(&self) -> Affine {
        self.value_to_px
    }

    /// The offset matrix prepared by [`Self::prepare_offset_matrix`].
    #[must_use]
    pub fn offset_matrix(&self) -> Affine {
        self.offset
    }

    /// Full value-to-pixel transform: value, then touch, then offset.
    #[must_use]
    pub fn value_to_pixel_matrix(&self, viewport: &ChartViewport) -> Affine {
        compose(
            compose(self.value_to_px, viewport.touch_matrix()),
            self.offset,
        )
    }

    /// Inverse of [`Self::value_to_pixel_matrix`].
    pub fn pixel_to_value_matrix(&self, viewport: &ChartViewport) -> Result<Affine, TransformError> {
        try_invert(self.value_to_pixel_matrix(viewport))
    }

    /// Pixel position of the value (`x`, `y`).
    #[must_use]
    pub fn pixel_for_values(&self, viewport: &ChartViewport, x: f64, y: f64) -> Point {
        self.value_to_pixel_matrix(viewport) * Point::new(x, y)
    }

    /// Converts values to pixels in place.
    pub fn point_values_to_pixel(&self, viewport: &ChartViewport, points: &mut [Point]) {
        let m = self.value_to_pixel_matrix(viewport);
        for p in points {
            *p = m * *p;
        }
    }

    /// Converts a value-space rectangle to pixels.
    #[must_use]
    pub fn rect_value_to_pixel(&self, viewport: &ChartViewport, rect: Rect) -> Rect {
        apply_to_rect(self.value_to_pixel_matrix(viewport), rect)
    }

    /// Converts a value-space rectangle to pixels after multiplying its
    /// vertical edges by the animation phase `phase_y` (usually in `[0, 1]`).
    #[must_use]
    pub fn rect_value_to_pixel_phase_y(
        &self,
        viewport: &ChartViewport,
        rect: Rect,
        phase_y: f64,
    ) -> Rect {
        let grown = Rect::new(rect.x0, rect.y0 * phase_y, rect.x1, rect.y1 * phase_y);
        self.rect_value_to_pixel(viewport, grown)
    }

    /// Converts a value-space rectangle to pixels after multiplying its
    /// horizontal edges by the animation phase `phase_x`, for horizontal bars.
    #[must_use]
    pub fn rect_value_to_pixel_horizontal_phase(
        &self,
        viewport: &ChartViewport,
        rect: Rect,
        phase_x: f64,
    ) -> Rect {
        let grown = Rect::new(rect.x0 * phase_x, rect.y0, rect.x1 * phase_x, rect.y1);
        self.rect_value_to_pixel(viewport, grown)
    }

    /// Converts value-space rectangles to pixels in place.
    pub fn rect_values_to_pixel(&self, viewport: &ChartViewport, rects: &mut [Rect]) {
        let m = self.value_to_pixel_matrix(viewport);
        for r in rects {
            *r = apply_to_rect(m, *r);
        }
    }

    /// Converts pixels to values in place.
    ///
    /// On error the points are left untouched.
    pub fn pixels_to_values(
        &self,
        viewport: &ChartViewport,
        pixels: &mut [Point],
    ) -> Result<(), TransformError> {
        let m = self.pixel_to_value_matrix(viewport)?;
        for p in pixels {
            *p = m * *p;
        }
        Ok(())
    }

    /// Value under the given touch position (in chart pixels).
    pub fn value_for_touch_point(
        &self,
        viewport: &ChartViewport,
        point: Point,
    ) -> Result<Point, TransformError> {
        Ok(self.pixel_to_value_matrix(viewport)? * point)
    }
}

fn axis_scale(extent: f64, delta: f64) -> f64 {
    let scale = extent / delta;
    if delta == 0.0 || !scale.is_finite() {
        0.0
    } else {
        scale
    }
}
