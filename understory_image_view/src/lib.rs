// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Image View: headless zoom/pan model for a single image.
//!
//! This crate models an image shown inside a scroll container, the way
//! mobile photo viewers do. It focuses on:
//! - Zoom scale bounds from the image/viewport aspect ratio and a
//!   [`DisplayMode`].
//! - Keeping the visible center in place when the container is resized.
//! - Centering the content offset.
//! - Nudging the horizontal offset from gyroscope rotation-rate samples.
//!
//! It does **not** render, recognize gestures, or talk to sensors. Callers
//! are expected to:
//! - Feed layout sizes and image sizes into [`ImageScrollView`] (or the thin
//!   [`ImageViewController`] around it).
//! - Apply the resulting [`ZoomState`] and [`ViewportState`] to their
//!   platform scroll container.
//! - Own the gyro stream, using [`MotionSwitch`] to decide when to run it.
//!
//! ## Zoom scales
//!
//! ```rust
//! use kurbo::Size;
//! use understory_image_view::{DisplayMode, zoom_scales};
//!
//! let image = Size::new(4000.0, 3000.0);
//! let viewport = Size::new(400.0, 600.0);
//!
//! let fit = zoom_scales(image, viewport, DisplayMode::Fit).unwrap();
//! assert_eq!(fit.minimum, 0.1);
//! assert_eq!(fit.current, fit.minimum);
//! assert_eq!(fit.maximum, fit.minimum * 3.0);
//!
//! // Degenerate images are rejected instead of producing NaN or infinity.
//! assert!(zoom_scales(Size::ZERO, viewport, DisplayMode::Fit).is_err());
//! ```
//!
//! ## Resizing
//!
//! Resizes are an explicit two-call protocol: capture before, restore after.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_image_view::{DisplayMode, ImageScrollView};
//!
//! let mut view = ImageScrollView::new(Size::new(400.0, 400.0));
//! view.set_display_mode(DisplayMode::Fill);
//! view.set_image(Some(Size::new(1000.0, 800.0)));
//! view.set_content_offset(Point::new(60.0, 0.0));
//!
//! view.begin_resize();
//! view.end_resize(Size::new(200.0, 400.0));
//! assert_eq!(view.content_offset(), Point::new(160.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Every zoom recomputation resets the current scale to the baseline.
//! - Resize recentering clamps the offset to the scroll range; plain
//!   centering does not.
//! - All computations are pure functions over `Copy` values, so they can be
//!   called from a sensor callback without synchronization.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod error;
mod modes;
mod motion;
mod recenter;
mod scroll_view;
mod zoom;

pub use controller::{ImageViewController, MotionDelegate};
pub use error::GeometryError;
pub use modes::{DisplayMode, InfiniteScroll, InterfaceOrientation};
pub use motion::{
    MotionOffsetAdjuster, MotionSettings, MotionSwitch, MotionTransition, RotationRate,
    loop_factor,
};
pub use recenter::{ResizePivot, center_offset, clamp_offset, clamp_offset_x};
pub use scroll_view::{ImageScrollView, ImageScrollViewDebugInfo, ViewportState};
pub use zoom::{AUTOMATIC_FILL_THRESHOLD, MAXIMUM_ZOOM_MULTIPLIER, ZoomState, zoom_scales};
