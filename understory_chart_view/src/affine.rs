// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers over [`kurbo::Affine`] for the chart transform pipeline.
//!
//! `Affine` coefficients `[a, b, c, d, e, f]` map a point as
//! `x' = a·x + c·y + e` and `y' = b·x + d·y + f`. The "touch" matrix of a
//! chart only ever uses `a`/`d` for zoom and `e`/`f` for pan.
//!
//! Kurbo already covers the remaining primitives: [`Affine::IDENTITY`],
//! [`Affine::pre_scale_non_uniform`], [`Affine::pre_translate`] and
//! [`Affine::pre_rotate`] apply a transform *before* the receiver, which is
//! the "scaled by / translated by / rotated by" form used for pivoted zoom.

use kurbo::{Affine, Rect, Vec2};

use crate::TransformError;

/// Returns the transform that applies `first` and then `then`.
///
/// Composition is associative but not commutative. The chart pipeline always
/// composes value scale, then touch, then offset.
#[must_use]
pub fn compose(first: Affine, then: Affine) -> Affine {
    then * first
}

/// Inverts `m`, rejecting matrices whose determinant is zero, subnormal or
/// not finite.
pub fn try_invert(m: Affine) -> Result<Affine, TransformError> {
    let determinant = m.determinant();
    if !determinant.is_finite() || determinant.abs() < f64::MIN_POSITIVE {
        tracing::debug!(determinant, "refusing to invert singular transform");
        return Err(TransformError::NonInvertible { determinant });
    }
    Ok(m.inverse())
}

/// Transforms the four corners of `rect` and returns their bounding box.
#[must_use]
pub fn apply_to_rect(m: Affine, rect: Rect) -> Rect {
    m.transform_rect_bbox(rect)
}

/// Horizontal scale factor (`a`).
#[must_use]
pub fn scale_x(m: Affine) -> f64 {
    m.as_coeffs()[0]
}

/// Vertical scale factor (`d`).
#[must_use]
pub fn scale_y(m: Affine) -> f64 {
    m.as_coeffs()[3]
}

/// Returns `m` with `a`/`d` replaced, keeping shear and translation.
#[must_use]
pub fn with_scale(m: Affine, sx: f64, sy: f64) -> Affine {
    let [_, b, c, _, e, f] = m.as_coeffs();
    Affine::new([sx, b, c, sy, e, f])
}

/// Returns `m` with `a`/`d` and `e`/`f` replaced, keeping shear.
#[must_use]
pub(crate) fn with_scale_and_translation(m: Affine, scale: Vec2, translation: Vec2) -> Affine {
    let [_, b, c, _, _, _] = m.as_coeffs();
    Affine::new([scale.x, b, c, scale.y, translation.x, translation.y])
}
