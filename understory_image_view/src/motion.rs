// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gyro motion panning: rotation-rate samples to horizontal offset nudges.
//!
//! The sensor itself lives outside this crate. Its owner asks a
//! [`MotionSwitch`] whether to start or stop updates, then pushes each sample
//! through [`MotionSwitch::deliver`] into a closure that typically calls
//! [`crate::ImageViewController::handle_gyro`].
//!
//! ```
//! use understory_image_view::{MotionOffsetAdjuster, MotionSettings};
//!
//! let adjuster = MotionOffsetAdjuster::new(MotionSettings::default());
//!
//! // Below the default threshold of 0.1: no change.
//! assert_eq!(adjuster.adjust(0.05, 100.0, 1000.0, 250.0, 4.0), None);
//!
//! // Tilting moves the offset against the rotation, scaled by the loop factor.
//! assert_eq!(adjuster.adjust(2.0, 100.0, 1000.0, 250.0, 4.0), Some(92.0));
//! ```

use crate::modes::{InfiniteScroll, InterfaceOrientation};
use crate::recenter::clamp_offset_x;

/// Gyro motion configuration supplied by the motion delegate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSettings {
    /// Whether motion panning is active at all.
    pub enabled: bool,
    /// Rotation rates with a smaller magnitude than this are ignored.
    pub threshold: f64,
    /// Multiplier applied on top of the loop factor.
    pub sensitivity: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 0.1,
            sensitivity: 1.0,
        }
    }
}

/// One gyroscope sample, in radians per second around each device axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationRate {
    /// Rotation around the device X axis.
    pub x: f64,
    /// Rotation around the device Y axis.
    pub y: f64,
    /// Rotation around the device Z axis.
    pub z: f64,
}

impl RotationRate {
    /// Creates a sample from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Picks the component that tilts the image horizontally for
    /// `orientation`, with the sign flipped for [`InterfaceOrientation::LandscapeLeft`].
    #[must_use]
    pub fn signed_rate(&self, orientation: InterfaceOrientation) -> f64 {
        match orientation {
            InterfaceOrientation::LandscapeLeft => -self.x,
            InterfaceOrientation::LandscapeRight => self.x,
            InterfaceOrientation::Portrait | InterfaceOrientation::PortraitUpsideDown => self.y,
        }
    }
}

/// Ratio of one content loop to the viewport width.
///
/// With infinite scroll the content is tripled, so only a third of it counts.
/// Returns `None` when `viewport_width` is not positive.
#[must_use]
pub fn loop_factor(content_width: f64, viewport_width: f64, infinite_scroll: InfiniteScroll) -> Option<f64> {
    if viewport_width.is_nan() || viewport_width <= 0.0 {
        return None;
    }
    let loop_width = match infinite_scroll {
        InfiniteScroll::Disabled => content_width,
        InfiniteScroll::Enabled => content_width / 3.0,
    };
    Some(loop_width / viewport_width)
}

/// Maps signed rotation rates to horizontal content offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionOffsetAdjuster {
    settings: MotionSettings,
}

impl MotionOffsetAdjuster {
    /// Creates an adjuster for the given settings.
    #[must_use]
    pub fn new(settings: MotionSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn settings(&self) -> MotionSettings {
        self.settings
    }

    /// Computes the new horizontal content offset for one sample.
    ///
    /// Returns `None` iff `|rotation_rate| < threshold`. Otherwise the offset
    /// moves by `rotation_rate * loop_factor * sensitivity` against the
    /// rotation and is clamped to `[0, content_width - viewport_width]`.
    ///
    /// `settings.enabled` is not consulted here; gating is up to the caller.
    #[must_use]
    pub fn adjust(
        &self,
        rotation_rate: f64,
        current_offset_x: f64,
        content_width: f64,
        viewport_width: f64,
        loop_factor: f64,
    ) -> Option<f64> {
        if rotation_rate.abs() < self.settings.threshold {
            return None;
        }
        let motion_rate = loop_factor * self.settings.sensitivity;
        let offset_x = current_offset_x - rotation_rate * motion_rate;
        Some(clamp_offset_x(offset_x, content_width, viewport_width))
    }
}

/// What the sensor owner should do after a [`MotionSwitch`] state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionTransition {
    /// Start gyro updates.
    Start,
    /// Stop gyro updates.
    Stop,
}

/// On/off state for the gyro stream feeding motion panning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionSwitch {
    enabled: bool,
}

impl MotionSwitch {
    /// Creates a disabled switch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while samples are being forwarded.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled state, returning the transition if it changed.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<MotionTransition> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        Some(if enabled {
            MotionTransition::Start
        } else {
            MotionTransition::Stop
        })
    }

    /// Flips the enabled state.
    pub fn toggle(&mut self) -> MotionTransition {
        self.enabled = !self.enabled;
        if self.enabled {
            MotionTransition::Start
        } else {
            MotionTransition::Stop
        }
    }

    /// Forwards `sample` to `on_sample` while enabled.
    ///
    /// Returns whatever the callback returned, or `None` when disabled.
    pub fn deliver<R>(&self, sample: RotationRate, on_sample: impl FnOnce(RotationRate) -> R) -> Option<R> {
        self.enabled.then(|| on_sample(sample))
    }
}
