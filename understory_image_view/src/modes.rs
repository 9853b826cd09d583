// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Policy for choosing the baseline (minimum) zoom scale of an image.
///
/// This enum is consulted by [`crate::zoom_scales`] and
/// [`crate::ImageScrollView::set_display_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Switch between [`DisplayMode::Fit`] and [`DisplayMode::Fill`] depending
    /// on how closely the image aspect ratio matches the viewport.
    ///
    /// Near-square matches fill edge-to-edge; elongated images fit fully.
    #[default]
    Automatic,
    /// Fit the entire image inside the viewport.
    Fit,
    /// Fill the entire viewport, cropping whichever axis overflows.
    Fill,
    /// Fill the viewport width.
    FillWidth,
    /// Fill the viewport height.
    FillHeight,
}

/// Whether the content is tripled horizontally for wraparound scrolling.
///
/// Only the motion loop factor depends on this; see [`crate::loop_factor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InfiniteScroll {
    /// Content is laid out once.
    #[default]
    Disabled,
    /// Content is laid out three times side by side.
    Enabled,
}

/// Interface orientation used to map a gyro sample onto the horizontal pan axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InterfaceOrientation {
    /// Device upright.
    #[default]
    Portrait,
    /// Device upside down.
    PortraitUpsideDown,
    /// Device rotated with the home side on the left.
    LandscapeLeft,
    /// Device rotated with the home side on the right.
    LandscapeRight,
}

impl InterfaceOrientation {
    /// Returns `true` for either landscape orientation.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}
