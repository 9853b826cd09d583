// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content offset placement: centering, clamping, and resize recentering.
//!
//! ## Resize protocol
//!
//! The visual center has to be captured in content space *before* the view
//! is resized and reprojected *after*, once the new zoom scale is known:
//!
//! 1) Call [`ResizePivot::capture`] with the old visible rect.
//! 2) Apply the new size and zoom scale.
//! 3) Call [`ResizePivot::recenter`] with the new content transform.
//!
//! ```
//! use kurbo::{Affine, Point, Rect, Size};
//! use understory_image_view::ResizePivot;
//!
//! // 200x200 visible rect at offset (100, 50), content at scale 2.
//! let old = Rect::from_origin_size(Point::new(100.0, 50.0), Size::new(200.0, 200.0));
//! let pivot = ResizePivot::capture(old, Affine::scale(0.5));
//! assert_eq!(pivot.point(), Point::new(100.0, 75.0));
//!
//! // Same size and scale again: the offset is restored.
//! let offset = pivot.recenter(Affine::scale(2.0), old.size(), Size::new(800.0, 800.0));
//! assert_eq!(offset, Point::new(100.0, 50.0));
//! ```

use kurbo::{Affine, Point, Rect, Size};

/// Content-space point that should stay visually centered across a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePivot {
    point: Point,
}

impl ResizePivot {
    /// Captures the center of `old_bounds` in content space.
    ///
    /// `old_bounds` is the visible rect in the container's own coordinate
    /// space, so its origin is the content offset. `view_to_content` maps that
    /// space into the unscaled content.
    #[must_use]
    pub fn capture(old_bounds: Rect, view_to_content: Affine) -> Self {
        Self {
            point: view_to_content * old_bounds.center(),
        }
    }

    /// Wraps an already known content-space point.
    #[must_use]
    pub fn from_content_point(point: Point) -> Self {
        Self { point }
    }

    /// Returns the captured content-space point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Computes the content offset that puts the pivot back at the center of
    /// `new_bounds`, clamped to the valid scroll range of `new_content_size`.
    #[must_use]
    pub fn recenter(self, content_to_view: Affine, new_bounds: Size, new_content_size: Size) -> Point {
        let projected = content_to_view * self.point;
        let offset = projected - new_bounds.to_vec2() / 2.0;
        clamp_offset(offset, new_content_size, new_bounds)
    }
}

/// Offset that centers `content_size` inside `viewport_size`.
///
/// This is not clamped: content smaller than the viewport yields a negative
/// offset on that axis.
#[must_use]
pub fn center_offset(content_size: Size, viewport_size: Size) -> Point {
    Point::new(
        (content_size.width - viewport_size.width) / 2.0,
        (content_size.height - viewport_size.height) / 2.0,
    )
}

/// Clamps a single axis offset into `[0, content_extent - viewport_extent]`.
///
/// When the content is smaller than the viewport the upper bound is negative
/// and the result is `0`.
#[must_use]
pub fn clamp_offset_x(offset: f64, content_extent: f64, viewport_extent: f64) -> f64 {
    let max_offset = content_extent - viewport_extent;
    0.0_f64.max(max_offset.min(offset))
}

/// Clamps both axes of `offset` into the scroll range of `content_size`
/// shown through `bounds`.
#[must_use]
pub fn clamp_offset(offset: Point, content_size: Size, bounds: Size) -> Point {
    Point::new(
        clamp_offset_x(offset.x, content_size.width, bounds.width),
        clamp_offset_x(offset.y, content_size.height, bounds.height),
    )
}
