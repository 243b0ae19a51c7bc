// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridnav_animation --heading-base-level=0

//! Gridnav Animation: time-based camera moves and viewport resizes.
//!
//! [`AnimationController`] runs two independent timelines:
//! - **move**: eases the camera center toward a target with
//!   [`ease_in_out_quad`];
//! - **resize**: interpolates the viewport size linearly and hands each value
//!   to an injected apply callback.
//!
//! The controller never reads a clock or registers a frame callback on its
//! own. Both come from a [`FrameScheduler`] supplied by the host, so tests and
//! headless hosts can drive it with [`ManualScheduler`]:
//!
//! ```rust
//! use kurbo::Point;
//! use gridnav_animation::{AnimationController, ManualScheduler};
//! use gridnav_camera::{Camera, Viewport};
//!
//! let mut camera = Camera::new(Point::ZERO, 1.0, 0.5, 4.0, Some(Viewport::new(100.0, 100.0, 1.0)));
//! let mut animations = AnimationController::new(ManualScheduler::new());
//!
//! animations.animate_move_to(&mut camera, Point::new(80.0, 20.0), 250.0, None);
//! assert!(animations.is_animating());
//!
//! animations.advance(&mut camera, 250.0);
//! assert!(!animations.is_animating());
//! let center = camera.center(camera.viewport_size());
//! assert!((center.x - 80.0).abs() < 1e-9);
//! ```

mod controller;
mod easing;
mod scheduler;

pub use controller::{
    AnimationController, CompletionCallback, FrameCallback, SizeApplyCallback, Timeline,
};
pub use easing::{ease_in_out_quad, linear};
pub use scheduler::{FrameScheduler, ManualScheduler, TickToken};
