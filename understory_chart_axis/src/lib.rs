// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Chart Axis: axis ranges and tick intervals for 2D charts.
//!
//! This crate computes the numbers behind a chart axis. It does **not** draw
//! anything or measure text. Given the raw data extent of an axis it provides:
//! - [`AxisRange`]: the effective minimum, maximum and range after custom
//!   overrides, padding and degenerate-range widening.
//! - [`Ticks`]: a "nice" interval and the tick values between two bounds,
//!   plus optional centered variants and the decimal precision for labels.
//!
//! Renderers should treat a [`Ticks`] value as the single source of truth
//! for gridlines and labels rather than deriving intervals on their own.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_chart_axis::{AxisPadding, AxisRange, TickConfig, Ticks};
//!
//! let mut axis = AxisRange::new(AxisPadding::NONE);
//! axis.calculate(0.0, 100.0);
//!
//! let ticks = Ticks::compute(axis.minimum(), axis.maximum(), &TickConfig::default());
//! assert_eq!(ticks.interval(), 20.0);
//! assert_eq!(ticks.len(), 6);
//! assert_eq!(ticks.label(2).as_deref(), Some("40"));
//! ```
//!
//! ## Forced label counts
//!
//! ```rust
//! use understory_chart_axis::{TickConfig, Ticks};
//!
//! let mut config = TickConfig::default();
//! config.set_label_count_forced(5, true);
//! let ticks = Ticks::compute(0.0, 100.0, &config);
//! assert_eq!(ticks.entries(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
//! ```
//!
//! Degenerate input never fails: a zero, negative or non-finite range gives
//! an empty tick set, and a zero data extent is widened by one unit.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clamp;
mod nice;
mod range;
mod ticks;

pub use clamp::clamped;
pub use nice::{decimal_places, round_to_next_significant};
pub use range::{AxisPadding, AxisRange};
pub use ticks::{TickConfig, Ticks, compute_ticks};
