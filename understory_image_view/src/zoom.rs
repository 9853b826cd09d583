// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom scale bounds from an image/viewport aspect ratio.

use kurbo::Size;

use crate::error::{GeometryError, is_valid_size};
use crate::modes::DisplayMode;

/// In [`DisplayMode::Automatic`], axis scales closer than this fill instead of fit.
pub const AUTOMATIC_FILL_THRESHOLD: f64 = 0.15;

/// Ratio of the maximum zoom scale to the computed minimum.
pub const MAXIMUM_ZOOM_MULTIPLIER: f64 = 3.0;

/// Minimum, maximum, and current zoom scale of an image view.
///
/// Values produced by [`zoom_scales`] satisfy
/// `0 < minimum == current <= maximum == minimum * 3.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Baseline scale chosen by the display mode.
    pub minimum: f64,
    /// Largest scale a pinch may reach.
    pub maximum: f64,
    /// Scale currently applied to the content.
    pub current: f64,
}

impl ZoomState {
    /// Scale `1.0` everywhere; used when there is no image to measure.
    pub const IDENTITY: Self = Self {
        minimum: 1.0,
        maximum: 1.0,
        current: 1.0,
    };

    /// Computes the zoom state, falling back to [`ZoomState::IDENTITY`] for
    /// degenerate sizes.
    #[must_use]
    pub fn compute_or_identity(image: Size, viewport: Size, mode: DisplayMode) -> Self {
        zoom_scales(image, viewport, mode).unwrap_or(Self::IDENTITY)
    }

    /// Clamps a requested scale into `[minimum, maximum]`.
    ///
    /// Non-finite requests leave the current scale in place.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if !scale.is_finite() {
            return self.current;
        }
        scale.max(self.minimum).min(self.maximum)
    }

    /// Returns a copy with `current` set to the clamped `scale`.
    #[must_use]
    pub fn with_current(self, scale: f64) -> Self {
        Self {
            current: self.clamp_scale(scale),
            ..self
        }
    }

    /// Returns `true` if the current scale is at its baseline.
    #[must_use]
    pub fn is_at_minimum(&self) -> bool {
        self.current <= self.minimum
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the zoom state for showing `image` inside `viewport` under `mode`.
///
/// Every call resets `current` to the baseline, so switching display modes or
/// loading a new image always snaps back to minimum zoom.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateImage`] or
/// [`GeometryError::DegenerateViewport`] when a dimension is zero, negative or
/// not finite. The check happens before any division.
///
/// Returns [`GeometryError::ScaleOutOfRange`] when valid sizes are so far
/// apart that the scale (or its inverse) would overflow or underflow.
pub fn zoom_scales(image: Size, viewport: Size, mode: DisplayMode) -> Result<ZoomState, GeometryError> {
    if !is_valid_size(image) {
        return Err(GeometryError::DegenerateImage);
    }
    if !is_valid_size(viewport) {
        return Err(GeometryError::DegenerateViewport);
    }

    let x_scale = viewport.width / image.width;
    let y_scale = viewport.height / image.height;

    let minimum = match mode {
        DisplayMode::Automatic => {
            if (x_scale - y_scale).abs() < AUTOMATIC_FILL_THRESHOLD {
                x_scale.max(y_scale)
            } else {
                x_scale.min(y_scale)
            }
        }
        DisplayMode::Fit => x_scale.min(y_scale),
        DisplayMode::Fill => x_scale.max(y_scale),
        DisplayMode::FillWidth => x_scale,
        DisplayMode::FillHeight => y_scale,
    };
    let maximum = minimum * MAXIMUM_ZOOM_MULTIPLIER;

    // Subnormal minimums are rejected too: their inverse is infinite.
    if !minimum.is_normal() || !maximum.is_finite() {
        return Err(GeometryError::ScaleOutOfRange);
    }

    Ok(ZoomState {
        minimum,
        maximum,
        current: minimum,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{DisplayMode, GeometryError, ZoomState, zoom_scales};

    const MODES: [DisplayMode; 5] = [
        DisplayMode::Automatic,
        DisplayMode::Fit,
        DisplayMode::Fill,
        DisplayMode::FillWidth,
        DisplayMode::FillHeight,
    ];

    fn scales(image: (f64, f64), viewport: (f64, f64), mode: DisplayMode) -> ZoomState {
        zoom_scales(Size::new(image.0, image.1), Size::new(viewport.0, viewport.1), mode)
            .expect("sizes are positive")
    }

    #[test]
    fn invariants_hold_for_every_mode() {
        let cases = [
            ((100.0, 100.0), (320.0, 480.0)),
            ((4000.0, 3000.0), (375.0, 667.0)),
            ((12.0, 900.0), (1024.0, 768.0)),
            ((1.0, 1.0), (1.0, 1.0)),
        ];
        for (image, viewport) in cases {
            for mode in MODES {
                let z = scales(image, viewport, mode);
                assert!(z.minimum > 0.0, "{mode:?}: minimum must be positive");
                assert_eq!(z.current, z.minimum, "{mode:?}: current resets to minimum");
                assert_eq!(z.maximum, z.minimum * 3.0, "{mode:?}: maximum is 3x minimum");
            }
        }
    }

    #[test]
    fn fit_and_fill_bracket_axis_scales() {
        let image = Size::new(640.0, 480.0);
        let viewport = Size::new(300.0, 500.0);
        let x_scale = viewport.width / image.width;
        let y_scale = viewport.height / image.height;

        let fit = zoom_scales(image, viewport, DisplayMode::Fit).unwrap();
        let fill = zoom_scales(image, viewport, DisplayMode::Fill).unwrap();
        assert!(fit.minimum <= x_scale && fit.minimum <= y_scale);
        assert!(fill.minimum >= x_scale && fill.minimum >= y_scale);

        let width = zoom_scales(image, viewport, DisplayMode::FillWidth).unwrap();
        let height = zoom_scales(image, viewport, DisplayMode::FillHeight).unwrap();
        assert_eq!(width.minimum, x_scale);
        assert_eq!(height.minimum, y_scale);
    }

    #[test]
    fn automatic_fits_elongated_images() {
        // x = 1.0, y ~= 0.769: difference is above the threshold.
        let auto = scales((100.0, 130.0), (100.0, 100.0), DisplayMode::Automatic);
        let fit = scales((100.0, 130.0), (100.0, 100.0), DisplayMode::Fit);
        assert_eq!(auto, fit);
        assert!((auto.minimum - 100.0 / 130.0).abs() < 1e-12);
    }

    #[test]
    fn automatic_fills_near_square_images() {
        // x = 1.0, y ~= 0.909: difference is below the threshold.
        let auto = scales((100.0, 110.0), (100.0, 100.0), DisplayMode::Automatic);
        let fill = scales((100.0, 110.0), (100.0, 100.0), DisplayMode::Fill);
        assert_eq!(auto, fill);
        assert_eq!(auto.minimum, 1.0);
    }

    #[test]
    fn degenerate_sizes_are_rejected_before_dividing() {
        let viewport = Size::new(320.0, 480.0);
        assert_eq!(
            zoom_scales(Size::new(0.0, 100.0), viewport, DisplayMode::Fit),
            Err(GeometryError::DegenerateImage)
        );
        assert_eq!(
            zoom_scales(Size::new(100.0, -1.0), viewport, DisplayMode::Fill),
            Err(GeometryError::DegenerateImage)
        );
        assert_eq!(
            zoom_scales(Size::new(100.0, 100.0), Size::ZERO, DisplayMode::Automatic),
            Err(GeometryError::DegenerateViewport)
        );
        assert_eq!(
            zoom_scales(Size::new(f64::NAN, 100.0), viewport, DisplayMode::Fit),
            Err(GeometryError::DegenerateImage)
        );

        let z = ZoomState::compute_or_identity(Size::new(0.0, 0.0), viewport, DisplayMode::Fit);
        assert_eq!(z, ZoomState::IDENTITY);
        assert!(z.minimum.is_finite() && z.minimum > 0.0);
    }

    #[test]
    fn extreme_size_ratios_are_out_of_range() {
        let cases = [
            // Overflows to infinity.
            ((1e-300, 1e-300), (1e10, 1e10)),
            // Finite minimum, infinite maximum.
            ((1.0, 1.0), (1e308, 1e308)),
            // Underflows to zero.
            ((1e300, 1e300), (1e-300, 1e-300)),
            // Subnormal minimum with an infinite inverse.
            ((1e300, 1e300), (1e-10, 1e-10)),
        ];
        for (image, viewport) in cases {
            let result = zoom_scales(
                Size::new(image.0, image.1),
                Size::new(viewport.0, viewport.1),
                DisplayMode::Fit,
            );
            assert_eq!(result, Err(GeometryError::ScaleOutOfRange), "{image:?} in {viewport:?}");
        }

        let z = ZoomState::compute_or_identity(
            Size::new(1e-300, 1e-300),
            Size::new(1e10, 1e10),
            DisplayMode::Fill,
        );
        assert_eq!(z, ZoomState::IDENTITY);
    }

    #[test]
    fn clamp_scale_stays_in_range() {
        let z = scales((200.0, 100.0), (100.0, 100.0), DisplayMode::Fit);
        assert_eq!(z.clamp_scale(0.01), z.minimum);
        assert_eq!(z.clamp_scale(100.0), z.maximum);
        assert_eq!(z.clamp_scale(f64::NAN), z.current);

        let zoomed = z.with_current(1.0);
        assert_eq!(zoomed.current, 1.0);
        assert!(!zoomed.is_at_minimum());
        assert!(z.is_at_minimum());
    }
}
