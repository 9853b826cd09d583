// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thin controller around [`ImageScrollView`] with gyro motion panning.
//!
//! ## Usage
//!
//! 1) Create the controller with the initial bounds and set an image.
//! 2) Call [`ImageViewController::did_layout`] after every layout pass; the
//!    first call centers the content.
//! 3) Forward gyro samples to [`ImageViewController::handle_gyro`], usually
//!    through [`crate::MotionSwitch::deliver`].
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_image_view::{
//!     DisplayMode, ImageViewController, MotionSettings, MotionSwitch, RotationRate,
//! };
//!
//! let mut controller = ImageViewController::new(Size::new(100.0, 100.0));
//! controller.scroll_view_mut().set_display_mode(DisplayMode::Fill);
//! controller.set_image(Some(Size::new(400.0, 200.0)));
//! controller.did_layout(Size::new(100.0, 100.0));
//! assert_eq!(controller.scroll_view().content_offset(), Point::new(50.0, 0.0));
//!
//! controller.set_motion_settings(MotionSettings { enabled: true, ..MotionSettings::default() });
//! let mut motion = MotionSwitch::new();
//! motion.set_enabled(true);
//! let sample = RotationRate::new(0.0, 1.0, 0.0);
//! assert_eq!(motion.deliver(sample, |s| controller.handle_gyro(s)), Some(true));
//! assert_eq!(controller.scroll_view().content_offset(), Point::new(48.0, 0.0));
//! ```

use kurbo::{Point, Size};

use crate::modes::{InfiniteScroll, InterfaceOrientation};
use crate::motion::{MotionOffsetAdjuster, MotionSettings, RotationRate, loop_factor};
use crate::scroll_view::ImageScrollView;

/// Source of motion settings and motion-driven content offsets.
pub trait MotionDelegate {
    /// Settings to use for the next sample.
    fn motion_settings(&self) -> MotionSettings;

    /// Content offset to apply for `sample`, or `None` for no change.
    fn calculated_content_offset(&self, sample: RotationRate) -> Option<Point>;
}

/// Owns an [`ImageScrollView`] and drives it from layout and gyro events.
#[derive(Clone, Debug)]
pub struct ImageViewController {
    scroll_view: ImageScrollView,
    initial_layout: bool,
    motion_settings: MotionSettings,
    orientation: InterfaceOrientation,
    infinite_scroll: InfiniteScroll,
}

impl ImageViewController {
    /// Creates a controller whose scroll view starts at `bounds`.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            scroll_view: ImageScrollView::new(bounds),
            initial_layout: true,
            motion_settings: MotionSettings::default(),
            orientation: InterfaceOrientation::default(),
            infinite_scroll: InfiniteScroll::default(),
        }
    }

    /// Returns the image size shown by the scroll view.
    #[must_use]
    pub fn image(&self) -> Option<Size> {
        self.scroll_view.image()
    }

    /// Forwards the image size to the scroll view.
    pub fn set_image(&mut self, image: Option<Size>) {
        self.scroll_view.set_image(image);
    }

    /// Returns the scroll view.
    #[must_use]
    pub fn scroll_view(&self) -> &ImageScrollView {
        &self.scroll_view
    }

    /// Returns the scroll view for direct configuration.
    pub fn scroll_view_mut(&mut self) -> &mut ImageScrollView {
        &mut self.scroll_view
    }

    /// Applies a layout pass with the new bounds.
    ///
    /// The content offset is centered on the first call only.
    pub fn did_layout(&mut self, bounds: Size) {
        self.scroll_view.set_bounds_size(bounds);
        if self.initial_layout {
            self.initial_layout = false;
            self.scroll_view.center_content_offset();
        }
    }

    /// Sets the motion settings reported through [`MotionDelegate`].
    pub fn set_motion_settings(&mut self, settings: MotionSettings) {
        self.motion_settings = settings;
    }

    /// Returns the current interface orientation.
    #[must_use]
    pub fn orientation(&self) -> InterfaceOrientation {
        self.orientation
    }

    /// Sets the interface orientation used to read gyro samples.
    pub fn set_orientation(&mut self, orientation: InterfaceOrientation) {
        self.orientation = orientation;
    }

    /// Sets whether the content is tripled for wraparound scrolling.
    pub fn set_infinite_scroll(&mut self, infinite_scroll: InfiniteScroll) {
        self.infinite_scroll = infinite_scroll;
    }

    /// Applies one gyro sample if motion is enabled.
    ///
    /// Returns `true` if the content offset was updated.
    pub fn handle_gyro(&mut self, sample: RotationRate) -> bool {
        if !self.motion_settings().enabled {
            return false;
        }
        match self.calculated_content_offset(sample) {
            Some(offset) => {
                self.scroll_view.set_content_offset(offset);
                true
            }
            None => false,
        }
    }
}

impl MotionDelegate for ImageViewController {
    fn motion_settings(&self) -> MotionSettings {
        self.motion_settings
    }

    fn calculated_content_offset(&self, sample: RotationRate) -> Option<Point> {
        let state = self.scroll_view.viewport_state();
        let factor = loop_factor(
            state.content_size.width,
            state.bounds.width,
            self.infinite_scroll,
        )?;
        let offset_x = MotionOffsetAdjuster::new(self.motion_settings()).adjust(
            sample.signed_rate(self.orientation),
            state.content_offset.x,
            state.content_size.width,
            state.bounds.width,
            factor,
        )?;
        Some(Point::new(offset_x, state.content_offset.y))
    }
}
