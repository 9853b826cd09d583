// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::modes::DisplayMode;
use crate::recenter::{ResizePivot, center_offset};
use crate::zoom::ZoomState;

/// Scroll geometry of an image view: what the platform scroll container needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Visible size of the container.
    pub bounds: Size,
    /// Size of the zoomed content.
    pub content_size: Size,
    /// Top-left of the visible region within the content.
    pub content_offset: Point,
}

/// Headless model of a zoomable image inside a scroll container.
///
/// `ImageScrollView` tracks the image size, the container bounds, and the
/// zoom/offset state derived from them. It can be used to:
/// - Recompute zoom scale bounds when the image or display mode changes.
/// - Keep the visible center stable across resizes.
/// - Center the content offset on demand.
///
/// The content (the image) sits at the content origin and is scaled
/// uniformly by [`ZoomState::current`].
#[derive(Clone, Debug)]
pub struct ImageScrollView {
    image: Option<Size>,
    display_mode: DisplayMode,
    bounds: Size,
    zoom: ZoomState,
    content_size: Size,
    content_offset: Point,
    pending_pivot: Option<ResizePivot>,
}

impl ImageScrollView {
    /// Creates an empty view with the given bounds.
    ///
    /// - No image is loaded and the zoom state is [`ZoomState::IDENTITY`].
    /// - The display mode is [`DisplayMode::Automatic`].
    /// - The content offset is centered, which is negative until an image
    ///   larger than the bounds is set.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        let mut view = Self {
            image: None,
            display_mode: DisplayMode::default(),
            bounds,
            zoom: ZoomState::IDENTITY,
            content_size: Size::ZERO,
            content_offset: Point::ZERO,
            pending_pivot: None,
        };
        view.update_image();
        view
    }

    /// Returns the native size of the current image, if any.
    #[must_use]
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Sets the image size and rebuilds the whole view state.
    ///
    /// Zoom snaps back to the baseline scale and the content offset is
    /// centered.
    pub fn set_image(&mut self, image: Option<Size>) {
        self.image = image;
        self.update_image();
    }

    /// Returns the current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Sets the display mode, recomputing zoom scales if it changed.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.display_mode != mode {
            self.display_mode = mode;
            self.configure_zoom_scales();
        }
    }

    /// Returns the container bounds size.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Returns the visible rect in the container's own coordinate space.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.bounds)
    }

    /// Resizes the container, keeping the visible center in place.
    ///
    /// This is [`ImageScrollView::begin_resize`] followed by
    /// [`ImageScrollView::end_resize`], skipped entirely when the size does
    /// not change.
    pub fn set_bounds_size(&mut self, bounds: Size) {
        if self.bounds == bounds {
            return;
        }
        self.begin_resize();
        self.end_resize(bounds);
    }

    /// Captures the visible center before the container is resized.
    pub fn begin_resize(&mut self) {
        self.pending_pivot = Some(ResizePivot::capture(self.visible_rect(), self.view_to_content()));
    }

    /// Applies the new bounds, recomputes zoom scales and restores the
    /// captured center.
    ///
    /// Without a preceding [`ImageScrollView::begin_resize`] the content
    /// offset is left as is.
    pub fn end_resize(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.configure_zoom_scales();
        if let Some(pivot) = self.pending_pivot.take() {
            self.content_offset = pivot.recenter(self.content_to_view(), self.bounds, self.content_size);
        }
    }

    /// Returns `true` between [`ImageScrollView::begin_resize`] and
    /// [`ImageScrollView::end_resize`].
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.pending_pivot.is_some()
    }

    /// Returns the zoom state.
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// Sets the current zoom scale, clamped into the zoom range.
    ///
    /// The content size follows the new scale; the content offset does not.
    pub fn set_zoom_scale(&mut self, scale: f64) {
        self.zoom = self.zoom.with_current(scale);
        self.update_content_size();
    }

    /// Returns the size of the zoomed content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the content offset.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Sets the content offset as computed by the caller.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    /// Centers the content inside the bounds on both axes.
    pub fn center_content_offset(&mut self) {
        self.content_offset = center_offset(self.content_size, self.bounds);
    }

    /// Returns the scroll geometry to apply to the platform container.
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            bounds: self.bounds,
            content_size: self.content_size,
            content_offset: self.content_offset,
        }
    }

    /// Maps unscaled image coordinates into the container's content space.
    #[must_use]
    pub fn content_to_view(&self) -> Affine {
        Affine::scale(self.zoom.current)
    }

    /// Maps the container's content space into unscaled image coordinates.
    #[must_use]
    pub fn view_to_content(&self) -> Affine {
        Affine::scale(1.0 / self.zoom.current)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageScrollViewDebugInfo {
        ImageScrollViewDebugInfo {
            image: self.image,
            display_mode: self.display_mode,
            bounds: self.bounds,
            zoom: self.zoom,
            content_size: self.content_size,
            content_offset: self.content_offset,
            visible_rect: self.visible_rect(),
            pending_pivot: self.pending_pivot.map(|p| p.point()),
        }
    }

    fn update_image(&mut self) {
        // Reset first so a missing image leaves identity zoom and no content.
        self.zoom = ZoomState::IDENTITY;
        self.update_content_size();
        self.configure_zoom_scales();
        self.center_content_offset();
    }

    fn configure_zoom_scales(&mut self) {
        let Some(image) = self.image else {
            return;
        };
        self.zoom = ZoomState::compute_or_identity(image, self.bounds, self.display_mode);
        self.update_content_size();
    }

    fn update_content_size(&mut self) {
        self.content_size = match self.image {
            Some(image) => image * self.zoom.current,
            None => Size::ZERO,
        };
    }
}

/// Debug snapshot of an [`ImageScrollView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageScrollViewDebugInfo {
    /// Native image size, if an image is loaded.
    pub image: Option<Size>,
    /// Display mode used for the baseline zoom scale.
    pub display_mode: DisplayMode,
    /// Container bounds size.
    pub bounds: Size,
    /// Zoom scale bounds and current scale.
    pub zoom: ZoomState,
    /// Zoomed content size.
    pub content_size: Size,
    /// Current content offset.
    pub content_offset: Point,
    /// Visible rect in the container's coordinate space.
    pub visible_rect: Rect,
    /// Content-space pivot captured by an unfinished resize.
    pub pending_pivot: Option<Point>,
}
