// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::affine;

/// Zoom factor used by [`ChartViewport::zoom_in`].
const ZOOM_IN_FACTOR: f64 = 1.4;
/// Zoom factor used by [`ChartViewport::zoom_out`].
const ZOOM_OUT_FACTOR: f64 = 0.7;

/// Scale bounds and drag allowances of a [`ChartViewport`].
///
/// Minimum scales are at least `1.0`; a maximum of `f64::MAX` means the axis
/// can be zoomed in without bound.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportLimits {
    /// Minimum horizontal scale.
    pub min_scale_x: f64,
    /// Maximum horizontal scale.
    pub max_scale_x: f64,
    /// Minimum vertical scale.
    pub min_scale_y: f64,
    /// Maximum vertical scale.
    pub max_scale_y: f64,
    /// Pixels the content may be dragged past its horizontal bounds.
    pub drag_offset_x: f64,
    /// Pixels the content may be dragged past its vertical bounds.
    pub drag_offset_y: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_scale_x: 1.0,
            max_scale_x: f64::MAX,
            min_scale_y: 1.0,
            max_scale_y: f64::MAX,
            drag_offset_x: 0.0,
            drag_offset_y: 0.0,
        }
    }
}

/// Result of committing a touch matrix with [`ChartViewport::refresh`].
///
/// A view should redraw whenever it receives one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refresh {
    /// The touch matrix that was committed, after clamping.
    pub matrix: Affine,
    /// `true` if clamping changed the proposed matrix.
    pub clamped: bool,
    /// Viewport revision after the commit.
    pub revision: u64,
}

/// Zoom/pan state and content geometry of a single chart.
///
/// `ChartViewport` owns the chart's pixel size, the content rectangle (the
/// chart minus its margins) and the *touch matrix*: the cumulative zoom and
/// pan applied on top of the value-to-pixel scale of a
/// [`Transformer`](crate::Transformer).
///
/// Zoom and pan helpers such as [`ChartViewport::zoom`] and
/// [`ChartViewport::pan`] only *propose* a matrix; nothing changes until it
/// is committed with [`ChartViewport::refresh`], which clamps scale and
/// translation to the configured bounds.
///
/// The viewport is meant to be owned by one chart. Callers driving it from
/// several input sources must serialize calls to `refresh` themselves.
#[derive(Clone, Debug)]
pub struct ChartViewport {
    chart_width: f64,
    chart_height: f64,
    content: Rect,
    touch: Affine,
    limits: ViewportLimits,
    scale: Vec2,
    translation: Vec2,
    revision: u64,
}

impl Default for ChartViewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ChartViewport {
    /// Creates a viewport for a chart of the given pixel size, with no margins.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            chart_width: width,
            chart_height: height,
            content: Rect::new(0.0, 0.0, width, height),
            touch: Affine::IDENTITY,
            limits: ViewportLimits::default(),
            scale: Vec2::new(1.0, 1.0),
            translation: Vec2::ZERO,
            revision: 0,
        }
    }

    // Geometry.

    /// Updates the chart's pixel size, keeping the current margins.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        let left = self.offset_left();
        let top = self.offset_top();
        let right = self.offset_right();
        let bottom = self.offset_bottom();
        self.chart_width = width;
        self.chart_height = height;
        self.set_margins(left, top, right, bottom);
    }

    /// Recomputes the content rectangle from the chart size and margins.
    ///
    /// The result may have a negative width or height if the margins exceed
    /// the chart size; it is not clamped.
    pub fn set_margins(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.content = Rect::new(
            left,
            top,
            self.chart_width - right,
            self.chart_height - bottom,
        );
    }

    /// Returns `true` if both chart dimensions are positive.
    #[must_use]
    pub fn has_chart_dimensions(&self) -> bool {
        self.chart_width > 0.0 && self.chart_height > 0.0
    }

    /// Chart width in pixels.
    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    /// Chart height in pixels.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    /// The area inside the margins where values are drawn.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content
    }

    /// Left margin.
    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.content.x0
    }

    /// Top margin.
    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.content.y0
    }

    /// Right margin.
    #[must_use]
    pub fn offset_right(&self) -> f64 {
        self.chart_width - self.content.x1
    }

    /// Bottom margin.
    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        self.chart_height - self.content.y1
    }

    /// Left edge of the content rectangle.
    #[must_use]
    pub fn content_left(&self) -> f64 {
        self.content.x0
    }

    /// Top edge of the content rectangle.
    #[must_use]
    pub fn content_top(&self) -> f64 {
        self.content.y0
    }

    /// Right edge of the content rectangle.
    #[must_use]
    pub fn content_right(&self) -> f64 {
        self.content.x1
    }

    /// Bottom edge of the content rectangle.
    #[must_use]
    pub fn content_bottom(&self) -> f64 {
        self.content.y1
    }

    /// Width of the content rectangle (may be negative).
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content.width()
    }

    /// Height of the content rectangle (may be negative).
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content.height()
    }

    /// Center of the content rectangle.
    #[must_use]
    pub fn content_center(&self) -> Point {
        Point::new(
            self.content.x0 + self.content.width() / 2.0,
            self.content.y0 + self.content.height() / 2.0,
        )
    }

    // Zoom / pan proposals.

    /// Current committed touch matrix.
    #[must_use]
    pub fn touch_matrix(&self) -> Affine {
        self.touch
    }

    /// Proposes the touch matrix scaled by the given factors about the origin.
    #[must_use]
    pub fn zoom_by(&self, scale_x: f64, scale_y: f64) -> Affine {
        self.touch.pre_scale_non_uniform(scale_x, scale_y)
    }

    /// Proposes the touch matrix scaled by the given factors about `pivot`.
    #[must_use]
    pub fn zoom(&self, scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
        Self::scale_about(self.touch, scale_x, scale_y, pivot)
    }

    /// Proposes a 1.4× zoom about `pivot`.
    #[must_use]
    pub fn zoom_in(&self, pivot: Point) -> Affine {
        self.zoom(ZOOM_IN_FACTOR, ZOOM_IN_FACTOR, pivot)
    }

    /// Proposes a 0.7× zoom about `pivot`.
    #[must_use]
    pub fn zoom_out(&self, pivot: Point) -> Affine {
        self.zoom(ZOOM_OUT_FACTOR, ZOOM_OUT_FACTOR, pivot)
    }

    /// Proposes the touch matrix with its scale reset to `1.0` on both axes.
    ///
    /// The translation is kept; committing the result clamps it back into the
    /// unzoomed bounds.
    #[must_use]
    pub fn reset_zoom(&self) -> Affine {
        self.set_zoom(1.0, 1.0, Point::ORIGIN)
    }

    /// Proposes the touch matrix with its scale *replaced* by the given
    /// factors about `pivot`, instead of multiplied.
    #[must_use]
    pub fn set_zoom(&self, scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
        Self::scale_about(affine::with_scale(self.touch, 1.0, 1.0), scale_x, scale_y, pivot)
    }

    /// Proposes the touch matrix with `a`/`d` overwritten directly.
    #[must_use]
    pub fn set_zoom_unpivoted(&self, scale_x: f64, scale_y: f64) -> Affine {
        affine::with_scale(self.touch, scale_x, scale_y)
    }

    /// Resets the minimum scales to `1.0` and proposes the identity matrix.
    ///
    /// Committing the result removes all zoom and pan.
    pub fn fit_screen(&mut self) -> Affine {
        self.limits.min_scale_x = 1.0;
        self.limits.min_scale_y = 1.0;
        Affine::IDENTITY
    }

    /// Proposes the touch matrix translated so that `to` (in chart pixels)
    /// becomes the content origin.
    #[must_use]
    pub fn pan(&self, to: Point) -> Affine {
        let translate = Vec2::new(to.x - self.offset_left(), to.y - self.offset_top());
        self.touch.then_translate(-translate)
    }

    /// Pans so that `to` becomes the content origin and commits the result.
    pub fn center_viewport(&mut self, to: Point) -> Refresh {
        let matrix = self.pan(to);
        self.refresh(matrix)
    }

    fn scale_about(m: Affine, scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
        let pivot = pivot.to_vec2();
        m.pre_translate(pivot)
            .pre_scale_non_uniform(scale_x, scale_y)
            .pre_translate(-pivot)
    }

    // Committing.

    /// Commits `matrix` as the touch matrix after clamping it to the scale and
    /// translation bounds.
    ///
    /// Every commit bumps [`ChartViewport::revision`]; the returned
    /// [`Refresh`] tells the owning view to redraw and whether the proposal
    /// had to be clamped.
    pub fn refresh(&mut self, matrix: Affine) -> Refresh {
        let committed = self.limit_trans_and_scale(matrix);
        let clamped = committed != matrix;
        if clamped {
            tracing::trace!(
                proposed = ?matrix.as_coeffs(),
                committed = ?committed.as_coeffs(),
                "clamped touch matrix"
            );
        }
        self.touch = committed;
        self.revision += 1;
        Refresh {
            matrix: committed,
            clamped,
            revision: self.revision,
        }
    }

    /// Monotonic counter bumped whenever the touch matrix is committed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clamps scale to `[min, max]` per axis and translation to
    /// `[-max_trans - drag, drag]` horizontally and `[-drag, max_trans + drag]`
    /// vertically. Pixel Y grows downward, hence the mirrored vertical bounds.
    fn limit_trans_and_scale(&mut self, matrix: Affine) -> Affine {
        let limits = &self.limits;
        let scale_x = affine::scale_x(matrix)
            .max(limits.min_scale_x)
            .min(limits.max_scale_x);
        let scale_y = affine::scale_y(matrix)
            .max(limits.min_scale_y)
            .min(limits.max_scale_y);

        let translation = matrix.translation();
        let max_trans_x = -self.content.width() * (scale_x - 1.0);
        let trans_x = translation
            .x
            .max(max_trans_x - limits.drag_offset_x)
            .min(limits.drag_offset_x);
        let max_trans_y = self.content.height() * (scale_y - 1.0);
        let trans_y = translation
            .y
            .min(max_trans_y + limits.drag_offset_y)
            .max(-limits.drag_offset_y);

        self.scale = Vec2::new(scale_x, scale_y);
        self.translation = Vec2::new(trans_x, trans_y);
        affine::with_scale_and_translation(matrix, self.scale, self.translation)
    }

    fn reclamp(&mut self) {
        let committed = self.limit_trans_and_scale(self.touch);
        if committed != self.touch {
            tracing::trace!(
                committed = ?committed.as_coeffs(),
                "scale bounds clamped touch matrix"
            );
            self.touch = committed;
            self.revision += 1;
        }
    }

    // Scale bounds and drag offsets.

    /// Current scale bounds and drag offsets.
    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    /// Replaces all scale bounds and drag offsets, normalizing them like the
    /// individual setters, and re-clamps the touch matrix.
    pub fn set_limits(&mut self, limits: ViewportLimits) {
        self.limits = ViewportLimits {
            min_scale_x: limits.min_scale_x.max(1.0),
            max_scale_x: unbounded_if_zero(limits.max_scale_x),
            min_scale_y: limits.min_scale_y.max(1.0),
            max_scale_y: unbounded_if_zero(limits.max_scale_y),
            ..limits
        };
        self.reclamp();
    }

    /// Sets the minimum horizontal scale (at least `1.0`).
    pub fn set_min_scale_x(&mut self, scale: f64) {
        self.limits.min_scale_x = scale.max(1.0);
        self.reclamp();
    }

    /// Sets the maximum horizontal scale; `0.0` means unbounded.
    pub fn set_max_scale_x(&mut self, scale: f64) {
        self.limits.max_scale_x = unbounded_if_zero(scale);
        self.reclamp();
    }

    /// Sets both horizontal scale bounds.
    pub fn set_min_max_scale_x(&mut self, min: f64, max: f64) {
        self.limits.min_scale_x = min.max(1.0);
        self.limits.max_scale_x = unbounded_if_zero(max);
        self.reclamp();
    }

    /// Sets the minimum vertical scale (at least `1.0`).
    pub fn set_min_scale_y(&mut self, scale: f64) {
        self.limits.min_scale_y = scale.max(1.0);
        self.reclamp();
    }

    /// Sets the maximum vertical scale; `0.0` means unbounded.
    pub fn set_max_scale_y(&mut self, scale: f64) {
        self.limits.max_scale_y = unbounded_if_zero(scale);
        self.reclamp();
    }

    /// Sets both vertical scale bounds.
    pub fn set_min_max_scale_y(&mut self, min: f64, max: f64) {
        self.limits.min_scale_y = min.max(1.0);
        self.limits.max_scale_y = unbounded_if_zero(max);
        self.reclamp();
    }

    /// Lets the content be dragged `offset` pixels past its horizontal bounds.
    ///
    /// Takes effect on the next [`ChartViewport::refresh`].
    pub fn set_drag_offset_x(&mut self, offset: f64) {
        self.limits.drag_offset_x = offset;
    }

    /// Lets the content be dragged `offset` pixels past its vertical bounds.
    ///
    /// Takes effect on the next [`ChartViewport::refresh`].
    pub fn set_drag_offset_y(&mut self, offset: f64) {
        self.limits.drag_offset_y = offset;
    }

    /// Returns `true` if neither axis allows dragging past the bounds.
    #[must_use]
    pub fn has_no_drag_offset(&self) -> bool {
        self.limits.drag_offset_x <= 0.0 && self.limits.drag_offset_y <= 0.0
    }

    // Scale / translation state.

    /// Committed horizontal scale.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale.x
    }

    /// Committed vertical scale.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale.y
    }

    /// Committed horizontal translation in pixels.
    #[must_use]
    pub fn trans_x(&self) -> f64 {
        self.translation.x
    }

    /// Committed vertical translation in pixels.
    #[must_use]
    pub fn trans_y(&self) -> f64 {
        self.translation.y
    }

    /// Returns `true` if the chart is fully zoomed out on both axes.
    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.is_fully_zoomed_out_x() && self.is_fully_zoomed_out_y()
    }

    /// Returns `true` if the chart is fully zoomed out horizontally.
    #[must_use]
    pub fn is_fully_zoomed_out_x(&self) -> bool {
        self.scale.x <= self.limits.min_scale_x && self.limits.min_scale_x <= 1.0
    }

    /// Returns `true` if the chart is fully zoomed out vertically.
    #[must_use]
    pub fn is_fully_zoomed_out_y(&self) -> bool {
        self.scale.y <= self.limits.min_scale_y && self.limits.min_scale_y <= 1.0
    }

    /// Returns `true` if the horizontal scale can still grow.
    #[must_use]
    pub fn can_zoom_in_more_x(&self) -> bool {
        self.scale.x < self.limits.max_scale_x
    }

    /// Returns `true` if the horizontal scale can still shrink.
    #[must_use]
    pub fn can_zoom_out_more_x(&self) -> bool {
        self.scale.x > self.limits.min_scale_x
    }

    /// Returns `true` if the vertical scale can still grow.
    #[must_use]
    pub fn can_zoom_in_more_y(&self) -> bool {
        self.scale.y < self.limits.max_scale_y
    }

    /// Returns `true` if the vertical scale can still shrink.
    #[must_use]
    pub fn can_zoom_out_more_y(&self) -> bool {
        self.scale.y > self.limits.min_scale_y
    }

    // Bounds checks.

    /// Returns `true` if `x` lies within the content's horizontal extent.
    #[must_use]
    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }

    /// Returns `true` if `y` lies within the content's vertical extent.
    #[must_use]
    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    /// Returns `true` if `point` lies within the content rectangle.
    #[must_use]
    pub fn is_in_bounds(&self, point: Point) -> bool {
        self.is_in_bounds_x(point.x) && self.is_in_bounds_y(point.y)
    }

    /// Left edge check, with one pixel of tolerance.
    #[must_use]
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content.x0 <= x + 1.0
    }

    /// Right edge check, with one pixel of tolerance after flooring `x` to
    /// two decimal places.
    #[must_use]
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = floor_hundredths(x);
        self.content.x1 >= x - 1.0
    }

    /// Top edge check.
    #[must_use]
    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content.y0 <= y
    }

    /// Bottom edge check, after flooring `y` to two decimal places.
    #[must_use]
    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        let y = floor_hundredths(y);
        self.content.y1 >= y
    }

    /// Returns `true` if the line through `start` and `end` crosses the
    /// content rectangle.
    ///
    /// The line is treated as `y = a·x + b` and tested against the left,
    /// bottom and top edges. A line that meets the rectangle crosses its
    /// border twice, and two right-edge crossings would make it vertical, so
    /// the right edge never needs a separate check.
    #[must_use]
    pub fn is_intersecting_line(&self, start: Point, end: Point) -> bool {
        if self.is_in_bounds(start) || self.is_in_bounds(end) {
            return true;
        }
        if start.x == end.x {
            return self.is_in_bounds_x(start.x);
        }

        let a = (end.y - start.y) / (end.x - start.x);
        let b = start.y - a * start.x;

        // Horizontal lines are fully decided here, since `b` is their y.
        if self.is_in_bounds_y(a * self.content.min_x() + b) {
            return true;
        }
        if a == 0.0 {
            return false;
        }
        if self.is_in_bounds_x((self.content.max_y() - b) / a) {
            return true;
        }
        self.is_in_bounds_x((self.content.min_y() - b) / a)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ChartViewportDebugInfo {
        ChartViewportDebugInfo {
            chart_width: self.chart_width,
            chart_height: self.chart_height,
            content_rect: self.content,
            touch_matrix: self.touch,
            scale: self.scale,
            translation: self.translation,
            limits: self.limits,
            revision: self.revision,
        }
    }
}

fn unbounded_if_zero(scale: f64) -> f64 {
    if scale == 0.0 { f64::MAX } else { scale }
}

fn floor_hundredths(v: f64) -> f64 {
    (v * 100.0).floor() / 100.0
}

/// Debug snapshot of a [`ChartViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ChartViewportDebugInfo {
    /// Chart width in pixels.
    pub chart_width: f64,
    /// Chart height in pixels.
    pub chart_height: f64,
    /// Content rectangle inside the margins.
    pub content_rect: Rect,
    /// Committed touch matrix.
    pub touch_matrix: Affine,
    /// Committed scale per axis.
    pub scale: Vec2,
    /// Committed translation per axis.
    pub translation: Vec2,
    /// Scale bounds and drag offsets.
    pub limits: ViewportLimits,
    /// Commit counter.
    pub revision: u64,
}
