// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridnav_camera --heading-base-level=0

//! Gridnav Camera: pan/zoom camera and coordinate conversion for grid maps.
//!
//! This crate provides the headless navigation state of a 2D grid-map
//! renderer:
//! - [`Camera`]: world top-left + uniform scale, with scale limits, optional
//!   world bounds and resize handling.
//! - [`CoordinateTransformer`]: world ↔ screen conversion over a camera.
//! - [`Viewport`]: logical surface size and device pixel ratio.
//!
//! It does **not** draw anything or listen to input. Callers are expected to:
//! - Feed pointer input through `gridnav_gesture` (or call [`Camera::pan`] /
//!   [`Camera::zoom`] directly).
//! - Query a spatial index with [`Camera::visible_bounds`] each frame and draw
//!   the result using [`CoordinateTransformer::world_to_screen`].
//!
//! ## Cell-center convention
//!
//! Integer world coordinates index grid cells. The camera stores its top-left
//! shifted by [`CELL_CENTER_OFFSET`], so that
//! [`CoordinateTransformer::world_to_screen`] lands on the visual center of a
//! cell while [`CoordinateTransformer::screen_to_world`] returns the
//! continuous coordinate under a pixel:
//!
//! ```rust
//! use kurbo::Point;
//! use gridnav_camera::{Camera, CoordinateTransformer};
//!
//! let camera = Camera::new(Point::ZERO, 2.0, 0.5, 8.0, None);
//! assert_eq!(camera.x(), 0.5);
//!
//! let t = CoordinateTransformer::new(&camera);
//! let screen = t.world_to_screen(Point::new(3.0, 4.0));
//! let back = t.screen_to_world(screen);
//! assert_eq!(back, Point::new(3.5, 4.5));
//! ```
//!
//! ## Bounds
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use gridnav_camera::{Camera, Viewport};
//!
//! let mut camera = Camera::new(Point::ZERO, 1.0, 0.5, 4.0, Some(Viewport::new(100.0, 100.0, 1.0)));
//! camera.set_bounds(Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
//!
//! // Dragging far to the right cannot reveal anything left of the bounds.
//! camera.pan(Vec2::new(10_000.0, 0.0));
//! let visible = camera.visible_bounds(Size::new(100.0, 100.0));
//! assert_eq!(visible.x0, 0.0);
//! ```

mod camera;
mod transform;
mod viewport;

pub use camera::{
    CELL_CENTER_OFFSET, Camera, CameraDebugInfo, WHEEL_DELTA_LIMIT, WHEEL_ZOOM_SENSITIVITY,
};
pub use transform::{CoordinateTransformer, PointPair, PointerCoords};
pub use viewport::Viewport;
