// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridnav_gesture --heading-base-level=0

//! Gridnav Gesture: pointer and touch disambiguation for grid-map navigation.
//!
//! This crate turns normalized input events into camera motion and
//! application callbacks:
//!
//! - [`state`]: the drag/pinch state machine, usable on its own and testable
//!   without any camera or platform binding.
//! - [`GestureProcessor`]: drives the state machine, mutates a
//!   [`gridnav_camera::Camera`] and notifies subscribers.
//! - [`Capabilities`]: per-instance switches for click, hover, drag and zoom.
//!
//! The crate does not listen to any platform. An external binding layer is
//! expected to produce [`Pointer`]s (surface- and page-relative positions) and
//! feed them in as [`InputEvent`]s.
//!
//! ## Click vs. drag
//!
//! A press that moves the camera swallows the click that follows it; a press
//! that does not move still clicks:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use gridnav_camera::{Camera, PointerCoords};
//! use gridnav_gesture::{GestureProcessor, InputEvent, Pointer};
//!
//! let mut camera = Camera::new(Point::ZERO, 1.0, 0.5, 4.0, None);
//! let mut gestures = GestureProcessor::default();
//! let clicks = Rc::new(Cell::new(0));
//! let c = clicks.clone();
//! gestures.callbacks_mut().on_click =
//!     Some(Box::new(move |_: &PointerCoords| c.set(c.get() + 1)));
//!
//! let at = |x, y| Pointer::at(x, y);
//! for event in [
//!     InputEvent::PointerDown(at(10.0, 10.0)),
//!     InputEvent::PointerMove(at(40.0, 10.0)),
//!     InputEvent::PointerUp(at(40.0, 10.0)),
//!     InputEvent::Click(at(40.0, 10.0)),
//! ] {
//!     gestures.handle(&mut camera, &event);
//! }
//! assert_eq!(clicks.get(), 0);
//! assert_eq!(camera.x(), 0.5 - 30.0);
//! ```
//!
//! ## Callback contract
//!
//! Every pointer callback receives a [`gridnav_camera::PointerCoords`] with
//! three parallel raw/snapped pairs: world (`coords`), surface pixels (`mouse`)
//! and page pixels (`client`).

mod capabilities;
mod pointer;
mod processor;
pub mod state;

pub use capabilities::Capabilities;
pub use gridnav_camera::{PointPair, PointerCoords};
pub use pointer::{InputEvent, Pointer};
pub use processor::{
    CameraCallback, CoordsCallback, GestureCallbacks, GestureProcessor, ZoomCallback,
};
pub use state::{GesturePhase, GestureState};
