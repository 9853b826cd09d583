// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a size cannot produce a meaningful zoom scale.
///
/// A dimension that is zero, negative, or not finite would otherwise divide
/// into a scale of `0`, infinity, or NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// The image has a non-positive or non-finite dimension, which is treated
    /// as "no image loaded".
    DegenerateImage,
    /// The viewport has a non-positive or non-finite dimension, typically
    /// because layout has not happened yet.
    DegenerateViewport,
    /// Both sizes are valid, but their ratio is too extreme to represent as
    /// a finite, invertible scale.
    ScaleOutOfRange,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateImage => f.write_str("image size has a non-positive dimension"),
            Self::DegenerateViewport => f.write_str("viewport size has a non-positive dimension"),
            Self::ScaleOutOfRange => f.write_str("image and viewport sizes give an unrepresentable scale"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Returns `true` when both dimensions are finite and strictly positive.
pub(crate) fn is_valid_size(size: kurbo::Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
