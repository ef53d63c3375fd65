// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors from pixel-to-value conversions.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The value-to-pixel matrix cannot be inverted.
    ///
    /// This happens when the content rectangle has no area or the value range
    /// of an axis is degenerate, so the matrix collapses an axis.
    #[error("transform is not invertible (determinant {determinant})")]
    NonInvertible {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },
}
