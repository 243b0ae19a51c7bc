// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridnav --heading-base-level=0

//! Gridnav: the navigation core of a 2D grid-map renderer.
//!
//! This crate wires the focused Gridnav crates into one engine:
//!
//! - [`camera`]: world top-left plus scale, pan/zoom, bounds clamping and
//!   world/screen conversion.
//! - [`gesture`]: click-vs-drag disambiguation, wheel zoom and two-finger pinch.
//! - [`animation`]: eased camera moves and viewport resizes over host-provided
//!   frame ticks.
//! - [`index`]: bulk-loaded R-tree for viewport culling.
//!
//! [`Navigator`] owns one camera, one gesture processor and one animation
//! controller, built from a [`NavConfig`] snapshot. Control flows in one
//! direction: input event, camera mutation, `on_camera_change`, then the host
//! re-renders using [`Navigator::transformer`] and [`Navigator::cull`].
//!
//! ```rust
//! use gridnav::{NavConfig, Navigator};
//! use gridnav::animation::ManualScheduler;
//! use gridnav::camera::Viewport;
//! use gridnav::gesture::{InputEvent, Pointer};
//! use gridnav::index::{SpatialIndex, SpatialItem};
//! use kurbo::Point;
//!
//! let config = NavConfig::default().with_scale(16.0);
//! let mut nav = Navigator::new(
//!     &config,
//!     Viewport::new(320.0, 160.0, 2.0),
//!     Point::ZERO,
//!     ManualScheduler::new(),
//! );
//!
//! // Drag the map 32 px to the left: the view moves two cells right.
//! nav.handle_input(&InputEvent::PointerDown(Pointer::at(100.0, 50.0)));
//! nav.handle_input(&InputEvent::PointerMove(Pointer::at(68.0, 50.0)));
//! nav.handle_input(&InputEvent::PointerUp(Pointer::at(68.0, 50.0)));
//!
//! let markers = SpatialIndex::from_vec(vec![
//!     SpatialItem::new(1.0, 1.0, None, "left behind"),
//!     SpatialItem::new(12.0, 4.0, None, "on screen"),
//! ]);
//! let visible: Vec<_> = nav.cull(&markers).iter().map(|m| m.data).collect();
//! assert_eq!(visible, ["on screen"]);
//! ```

mod config;
mod navigator;

pub use config::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, NavConfig};
pub use navigator::{Navigator, rect_to_aabb};

pub use gridnav_animation as animation;
pub use gridnav_camera as camera;
pub use gridnav_gesture as gesture;
pub use gridnav_index as index;
