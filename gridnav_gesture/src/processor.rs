// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use gridnav_camera::{Camera, CoordinateTransformer, PointerCoords};
use tracing::debug;

use crate::capabilities::Capabilities;
use crate::pointer::{InputEvent, Pointer};
use crate::state::{GesturePhase, GestureState};

/// Callback receiving the coordinate triple of a pointer event.
pub type CoordsCallback = Box<dyn FnMut(&PointerCoords)>;
/// Callback receiving the post-clamp camera scale.
pub type ZoomCallback = Box<dyn FnMut(f64)>;
/// Callback invoked after the camera has been mutated.
pub type CameraCallback = Box<dyn FnMut(&Camera)>;

/// Optional subscribers notified by a [`GestureProcessor`].
///
/// Unset slots are skipped.
#[derive(Default)]
pub struct GestureCallbacks {
    /// Primary click that was not part of a drag or pinch.
    pub on_click: Option<CoordsCallback>,
    /// Secondary click.
    pub on_right_click: Option<CoordsCallback>,
    /// Pointer moved while idle.
    pub on_hover: Option<CoordsCallback>,
    /// Primary button or first finger went down.
    pub on_mouse_down: Option<CoordsCallback>,
    /// Primary button or last finger went up.
    pub on_mouse_up: Option<CoordsCallback>,
    /// Pointer left the surface.
    pub on_mouse_leave: Option<CoordsCallback>,
    /// Scale after a wheel or pinch zoom.
    pub on_zoom: Option<ZoomCallback>,
    /// Camera changed; re-render.
    pub on_camera_change: Option<CameraCallback>,
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCallbacks")
            .field("on_click", &self.on_click.is_some())
            .field("on_right_click", &self.on_right_click.is_some())
            .field("on_hover", &self.on_hover.is_some())
            .field("on_mouse_down", &self.on_mouse_down.is_some())
            .field("on_mouse_up", &self.on_mouse_up.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .field("on_zoom", &self.on_zoom.is_some())
            .field("on_camera_change", &self.on_camera_change.is_some())
            .finish()
    }
}

/// Turns normalized pointer, wheel and touch events into camera motion and callbacks.
///
/// The processor owns the [`GestureState`]; the camera is passed into every
/// handler. Within one handler the camera is always mutated before
/// `on_camera_change` fires.
#[derive(Debug)]
pub struct GestureProcessor {
    capabilities: Capabilities,
    state: GestureState,
    callbacks: GestureCallbacks,
}

impl GestureProcessor {
    /// Creates an idle processor with the given capabilities and no callbacks.
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            state: GestureState::default(),
            callbacks: GestureCallbacks::default(),
        }
    }

    /// Enabled capabilities.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Replaces the enabled capabilities.
    ///
    /// Disabling drag or zoom mid-gesture ends that gesture.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
        let ended = match self.state.phase() {
            GesturePhase::Dragging { .. } => !capabilities.contains(Capabilities::DRAG),
            GesturePhase::Pinching { .. } => !capabilities.contains(Capabilities::ZOOM),
            GesturePhase::Idle => false,
        };
        if ended {
            self.state.release();
        }
    }

    /// Callback slots.
    #[must_use]
    pub fn callbacks(&self) -> &GestureCallbacks {
        &self.callbacks
    }

    /// Mutable callback slots.
    pub fn callbacks_mut(&mut self) -> &mut GestureCallbacks {
        &mut self.callbacks
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.state.phase()
    }

    /// Returns `true` while a single pointer drags the camera.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Returns `true` while two pointers pinch the camera.
    #[must_use]
    pub fn pinching(&self) -> bool {
        self.state.is_pinching()
    }

    /// Drops any gesture in progress, including pending click suppression.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Dispatches a normalized input event to the matching handler.
    pub fn handle(&mut self, camera: &mut Camera, event: &InputEvent<'_>) {
        match *event {
            InputEvent::PointerDown(p) => self.pointer_down(camera, p),
            InputEvent::PointerMove(p) => self.pointer_move(camera, p),
            InputEvent::PointerUp(p) => self.pointer_up(camera, p),
            InputEvent::PointerLeave(p) => self.pointer_leave(camera, p),
            InputEvent::Click(p) => self.click(camera, p),
            InputEvent::RightClick(p) => self.right_click(camera, p),
            InputEvent::Wheel { pointer, delta_y } => self.wheel(camera, pointer, delta_y),
            InputEvent::TouchStart(touches) => self.touch_start(camera, touches),
            InputEvent::TouchMove(touches) => self.touch_move(camera, touches),
            InputEvent::TouchEnd { remaining, lifted } => {
                self.touch_end(camera, remaining, lifted);
            }
        }
    }

    /// Primary button pressed: starts a drag when dragging is enabled.
    pub fn pointer_down(&mut self, camera: &mut Camera, pointer: Pointer) {
        if self.capabilities.contains(Capabilities::DRAG) {
            self.state.begin_drag(pointer.pos);
        } else {
            self.state.reset();
        }
        emit(&mut self.callbacks.on_mouse_down, camera, pointer);
    }

    /// Pointer moved: pans while dragging, hovers while idle.
    pub fn pointer_move(&mut self, camera: &mut Camera, pointer: Pointer) {
        match self.state.phase() {
            GesturePhase::Dragging { .. } => self.drag_to(camera, pointer),
            GesturePhase::Idle => {
                if self.capabilities.contains(Capabilities::HOVER) {
                    emit(&mut self.callbacks.on_hover, camera, pointer);
                }
            }
            GesturePhase::Pinching { .. } => {}
        }
    }

    /// Primary button released.
    pub fn pointer_up(&mut self, camera: &mut Camera, pointer: Pointer) {
        self.state.release();
        emit(&mut self.callbacks.on_mouse_up, camera, pointer);
    }

    /// Pointer left the surface. No click follows, so suppression is cleared too.
    pub fn pointer_leave(&mut self, camera: &mut Camera, pointer: Pointer) {
        self.state.reset();
        emit(&mut self.callbacks.on_mouse_leave, camera, pointer);
    }

    /// Primary click: swallowed if it ends a drag that moved.
    pub fn click(&mut self, camera: &mut Camera, pointer: Pointer) {
        if self.state.take_prevent_click() {
            debug!("gesture: click suppressed after drag");
            return;
        }
        if self.capabilities.contains(Capabilities::CLICK) {
            emit(&mut self.callbacks.on_click, camera, pointer);
        }
    }

    /// Secondary click.
    pub fn right_click(&mut self, camera: &mut Camera, pointer: Pointer) {
        if self.capabilities.contains(Capabilities::RIGHT_CLICK) {
            emit(&mut self.callbacks.on_right_click, camera, pointer);
        }
    }

    /// Wheel scroll: zooms around the pointer.
    pub fn wheel(&mut self, camera: &mut Camera, pointer: Pointer, delta_y: f64) {
        if !self.capabilities.contains(Capabilities::ZOOM) {
            return;
        }
        camera.zoom(pointer.client, delta_y, pointer.surface_origin());
        if let Some(on_zoom) = self.callbacks.on_zoom.as_mut() {
            on_zoom(camera.scale());
        }
        self.notify_camera_change(camera);
    }

    /// Fingers went down. `touches` lists every contact now on the surface.
    ///
    /// One contact behaves like a primary press; two or more start a pinch
    /// when zooming is enabled.
    pub fn touch_start(&mut self, camera: &mut Camera, touches: &[Pointer]) {
        match touches {
            [] => {}
            [only] => self.pointer_down(camera, *only),
            [a, b, ..] => {
                if self.capabilities.contains(Capabilities::ZOOM) {
                    self.state.begin_pinch(a.pos, b.pos);
                }
            }
        }
    }

    /// Fingers moved. `touches` lists every contact now on the surface.
    pub fn touch_move(&mut self, camera: &mut Camera, touches: &[Pointer]) {
        match (self.state.phase(), touches) {
            (GesturePhase::Pinching { .. }, [a, b, ..]) => {
                let Some(step) = self.state.pinch_to(a.pos, b.pos) else {
                    return;
                };
                // Pan first so the world point under the old midpoint follows
                // the fingers, then zoom around where they are now.
                camera.pan(step.pan);
                if let Some(factor) = step.factor {
                    camera.zoom_by_factor(factor, step.center);
                }
                if let Some(on_zoom) = self.callbacks.on_zoom.as_mut() {
                    on_zoom(camera.scale());
                }
                self.notify_camera_change(camera);
            }
            (GesturePhase::Dragging { .. }, [first, ..]) => self.drag_to(camera, *first),
            _ => {}
        }
    }

    /// A finger was lifted. `remaining` lists the contacts still down.
    pub fn touch_end(&mut self, camera: &mut Camera, remaining: &[Pointer], lifted: Pointer) {
        match remaining {
            [a, b, ..] => {
                if self.state.is_pinching() {
                    self.state.begin_pinch(a.pos, b.pos);
                } else if self.state.is_dragging() {
                    // Moves track the first contact, which may have changed.
                    self.state.resume_drag(a.pos);
                }
            }
            [only] => {
                if self.state.is_pinching() || self.state.is_dragging() {
                    if self.capabilities.contains(Capabilities::DRAG) {
                        self.state.resume_drag(only.pos);
                    } else {
                        self.state.release();
                    }
                }
            }
            [] => {
                self.state.release();
                emit(&mut self.callbacks.on_mouse_up, camera, lifted);
                // Touch has no separate click event.
                self.click(camera, lifted);
            }
        }
    }

    /// Invokes `on_camera_change`, if set.
    pub fn notify_camera_change(&mut self, camera: &Camera) {
        if let Some(on_change) = self.callbacks.on_camera_change.as_mut() {
            on_change(camera);
        }
    }

    fn drag_to(&mut self, camera: &mut Camera, pointer: Pointer) {
        if let Some(delta) = self.state.drag_to(pointer.pos) {
            camera.pan(delta);
            self.notify_camera_change(camera);
        }
    }
}

impl Default for GestureProcessor {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

fn emit(slot: &mut Option<CoordsCallback>, camera: &Camera, pointer: Pointer) {
    if let Some(callback) = slot.as_mut() {
        let coords = CoordinateTransformer::new(camera).pointer_coords(pointer.pos, pointer.client);
        callback(&coords);
    }
}
