// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Chart View: viewport and value-to-pixel transforms for 2D charts.
//!
//! This crate models the geometry of a single chart without drawing it. It
//! provides:
//! - [`ChartViewport`]: chart size, margins and the zoom/pan *touch matrix*,
//!   with scale and translation clamping, zoom helpers and bounds checks.
//! - [`Transformer`]: the mapping from chart values to pixels and back,
//!   composed from a value matrix, the viewport's touch matrix and an offset
//!   matrix.
//! - [`compute_axis`]: tick computation for the part of an axis that is
//!   currently visible, via [`understory_chart_axis`].
//!
//! Zoom and pan helpers return a proposed matrix; a chart commits it with
//! [`ChartViewport::refresh`], which clamps it and reports whether a redraw is
//! needed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_chart_view::{ChartViewport, Transformer};
//!
//! // 300x300 chart with 50px margins, showing 0..100 on both axes.
//! let mut viewport = ChartViewport::new(300.0, 300.0);
//! viewport.set_margins(50.0, 50.0, 50.0, 50.0);
//!
//! let mut transformer = Transformer::new();
//! transformer.prepare_value_to_pixel_matrix(&viewport, 0.0, 100.0, 100.0, 0.0);
//! transformer.prepare_offset_matrix(&viewport, false);
//!
//! let px = transformer.pixel_for_values(&viewport, 50.0, 50.0);
//! assert_eq!(px, Point::new(150.0, 150.0));
//!
//! let value = transformer.value_for_touch_point(&viewport, px).unwrap();
//! assert_eq!(value, Point::new(50.0, 50.0));
//! ```
//!
//! ## Zoom and visible ticks
//!
//! ```rust
//! use understory_chart_axis::TickConfig;
//! use understory_chart_view::{AxisDirection, ChartViewport, Transformer, compute_axis};
//!
//! let mut viewport = ChartViewport::new(300.0, 300.0);
//! viewport.set_margins(50.0, 50.0, 50.0, 50.0);
//! let mut transformer = Transformer::new();
//! transformer.prepare_value_to_pixel_matrix(&viewport, 0.0, 100.0, 100.0, 0.0);
//! transformer.prepare_offset_matrix(&viewport, false);
//!
//! // Double the horizontal scale: only the left half of the data is visible.
//! let refresh = viewport.refresh(viewport.zoom_by(2.0, 1.0));
//! assert!(!refresh.clamped);
//! assert_eq!(
//!     transformer.visible_range(&viewport, AxisDirection::Horizontal, false),
//!     Some((0.0, 50.0)),
//! );
//!
//! let ticks = compute_axis(
//!     &transformer,
//!     &viewport,
//!     AxisDirection::Horizontal,
//!     &TickConfig::default(),
//!     0.0,
//!     100.0,
//!     false,
//! );
//! assert_eq!(ticks.entries(), &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
//! ```
//!
//! Transforms that cannot be inverted (for example a zero data range) are
//! reported as [`TransformError`] instead of producing NaN values.
//!
//! This crate is `no_std`.

#![no_std]

pub mod affine;
mod axis;
mod error;
mod transformer;
mod viewport;

pub use axis::{AxisDirection, compute_axis};
pub use error::TransformError;
pub use transformer::Transformer;
pub use viewport::{ChartViewport, ChartViewportDebugInfo, Refresh, ViewportLimits};
