// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: drag and pinch tracking independent of any camera or platform.
//!
//! ## Transitions
//!
//! | from      | input                         | to        |
//! |-----------|-------------------------------|-----------|
//! | Idle      | [`GestureState::begin_drag`]  | Dragging  |
//! | any       | [`GestureState::begin_pinch`] | Pinching  |
//! | Pinching  | [`GestureState::resume_drag`] | Dragging  |
//! | any       | [`GestureState::release`]     | Idle      |
//!
//! Movement inside a phase is reported by [`GestureState::drag_to`] and
//! [`GestureState::pinch_to`], which also arm click suppression.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use gridnav_gesture::state::{GesturePhase, GestureState};
//!
//! let mut state = GestureState::default();
//! state.begin_drag(Point::new(10.0, 20.0));
//! assert!(state.is_dragging());
//!
//! let delta = state.drag_to(Point::new(15.0, 25.0));
//! assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
//!
//! state.release();
//! assert_eq!(state.phase(), GesturePhase::Idle);
//! // The drag moved, so the click that follows must be swallowed.
//! assert!(state.take_prevent_click());
//! ```

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

/// Current phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    /// No button or finger is driving the camera. Single-pointer moves hover.
    #[default]
    Idle,
    /// One pointer is panning the camera.
    Dragging {
        /// Last recorded pointer position.
        last_pos: Point,
    },
    /// Two pointers are zooming and panning the camera.
    Pinching {
        /// Last recorded distance between the two pointers.
        distance: f64,
        /// Last recorded midpoint of the two pointers.
        center: Point,
    },
}

/// Distance and midpoint of a two-finger contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGeometry {
    /// Euclidean distance between the contacts.
    pub distance: f64,
    /// Midpoint of the contacts.
    pub center: Point,
}

impl PinchGeometry {
    /// Measures two contact positions.
    #[must_use]
    pub fn between(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
            center: a.midpoint(b),
        }
    }
}

/// One pinch movement step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Ratio of new to previous distance; `None` when the previous distance was zero.
    pub factor: Option<f64>,
    /// Midpoint translation since the previous step.
    pub pan: Vec2,
    /// New midpoint.
    pub center: Point,
}

/// Gesture state: the current phase plus the click-suppression flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureState {
    phase: GesturePhase,
    prevent_click: bool,
}

impl GestureState {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a single pointer drags.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Returns `true` while two pointers pinch.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, GesturePhase::Pinching { .. })
    }

    /// Returns `true` if the next click will be suppressed.
    #[must_use]
    pub fn prevents_click(&self) -> bool {
        self.prevent_click
    }

    /// Starts a fresh drag at `pos` and clears click suppression.
    pub fn begin_drag(&mut self, pos: Point) {
        debug!(?pos, from = ?self.phase, "gesture: begin drag");
        self.phase = GesturePhase::Dragging { last_pos: pos };
        self.prevent_click = false;
    }

    /// Continues as a drag from `pos` without touching click suppression.
    ///
    /// Used when a pinch drops to a single finger, so the remaining finger
    /// does not jump the camera.
    pub fn resume_drag(&mut self, pos: Point) {
        debug!(?pos, from = ?self.phase, "gesture: resume drag");
        self.phase = GesturePhase::Dragging { last_pos: pos };
    }

    /// Records a drag move, returning the non-zero delta since the last position.
    ///
    /// Returns `None` outside of a drag or when the pointer did not move. A
    /// non-zero delta arms click suppression.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        let GesturePhase::Dragging { last_pos } = &mut self.phase else {
            return None;
        };
        let delta = pos - *last_pos;
        *last_pos = pos;
        if delta == Vec2::ZERO {
            return None;
        }
        trace!(dx = delta.x, dy = delta.y, "gesture: drag");
        self.prevent_click = true;
        Some(delta)
    }

    /// Starts (or reseeds) a pinch from two contact positions.
    ///
    /// This supersedes any drag in progress.
    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        let geometry = PinchGeometry::between(a, b);
        debug!(distance = geometry.distance, from = ?self.phase, "gesture: begin pinch");
        self.phase = GesturePhase::Pinching {
            distance: geometry.distance,
            center: geometry.center,
        };
    }

    /// Records a pinch move and returns the zoom factor and midpoint translation.
    ///
    /// Returns `None` outside of a pinch. Any change in distance or midpoint
    /// arms click suppression.
    pub fn pinch_to(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let GesturePhase::Pinching { distance, center } = &mut self.phase else {
            return None;
        };
        let geometry = PinchGeometry::between(a, b);
        let factor = (*distance > 0.0).then(|| geometry.distance / *distance);
        let step = PinchStep {
            factor,
            pan: geometry.center - *center,
            center: geometry.center,
        };
        *distance = geometry.distance;
        *center = geometry.center;
        if step.pan != Vec2::ZERO || factor.is_some_and(|f| f != 1.0) {
            self.prevent_click = true;
        }
        trace!(?factor, dx = step.pan.x, dy = step.pan.y, "gesture: pinch");
        Some(step)
    }

    /// Returns to idle. Click suppression is kept for the click that follows.
    pub fn release(&mut self) {
        if self.phase != GesturePhase::Idle {
            debug!(from = ?self.phase, "gesture: release");
        }
        self.phase = GesturePhase::Idle;
    }

    /// Consumes the click-suppression flag, returning whether it was set.
    pub fn take_prevent_click(&mut self) -> bool {
        core::mem::take(&mut self.prevent_click)
    }

    /// Clears everything, including click suppression.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
