// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Size of the rendering surface in CSS/logical pixels plus its device pixel ratio.
///
/// The camera only reasons in logical pixels; [`Viewport::backing_size`] is for
/// hosts that allocate a physical backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Logical size in pixels.
    pub size: Size,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Creates a viewport of `width` x `height` logical pixels.
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            size: Size::new(width, height),
            device_pixel_ratio,
        }
    }

    /// Logical width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Logical height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Size of the physical backing store, rounded up to whole device pixels.
    #[must_use]
    pub fn backing_size(&self) -> Size {
        Size::new(
            (self.size.width * self.device_pixel_ratio).ceil(),
            (self.size.height * self.device_pixel_ratio).ceil(),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            device_pixel_ratio: 1.0,
        }
    }
}
