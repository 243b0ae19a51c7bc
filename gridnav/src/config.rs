// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridnav_gesture::Capabilities;
use kurbo::Rect;

/// Default lower scale limit, in pixels per cell.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Default upper scale limit, in pixels per cell.
pub const DEFAULT_MAX_SCALE: f64 = 10.0;

/// Read-only configuration snapshot used to build a [`Navigator`](crate::Navigator).
///
/// Loading and validating configuration is up to the host. Out-of-range values
/// are normalized rather than rejected: swapped scale limits are reordered and
/// the initial scale is clamped into them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Initial scale in pixels per cell.
    pub scale: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Which interactions are enabled.
    pub handlers: Capabilities,
    /// World rectangle the view is kept inside, if any.
    pub bounds: Option<Rect>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            handlers: Capabilities::all(),
            bounds: None,
        }
    }
}

impl NavConfig {
    /// Returns a copy with the given initial scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with the given enabled interactions.
    #[must_use]
    pub fn with_handlers(mut self, handlers: Capabilities) -> Self {
        self.handlers = handlers;
        self
    }

    /// Returns a copy with the given world bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Option<Rect>) -> Self {
        self.bounds = bounds;
        self
    }
}
