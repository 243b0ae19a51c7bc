// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridnav_animation::{
    AnimationController, CompletionCallback, FrameCallback, FrameScheduler, ManualScheduler,
    TickToken,
};
use gridnav_camera::{Camera, CoordinateTransformer, Viewport};
use gridnav_gesture::{Capabilities, GestureCallbacks, GestureProcessor, InputEvent};
use gridnav_index::{Aabb2D, Backend, Placed, SpatialIndex};
use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::NavConfig;

/// Converts a world rectangle into an index query box.
#[must_use]
pub fn rect_to_aabb(rect: Rect) -> Aabb2D {
    let r = rect.abs();
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}

/// Owns the camera, the gesture processor and the animation controller of one
/// map surface and routes host events between them.
///
/// Every camera mutation goes through this type, so components never hold
/// references to each other: the camera is lent to the gesture processor or
/// the animation controller for the duration of a single call.
pub struct Navigator<S: FrameScheduler> {
    camera: Camera,
    gestures: GestureProcessor,
    animations: AnimationController<S>,
}

impl<S: FrameScheduler + core::fmt::Debug> core::fmt::Debug for Navigator<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("camera", &self.camera)
            .field("gestures", &self.gestures)
            .field("animations", &self.animations)
            .finish()
    }
}

impl<S: FrameScheduler> Navigator<S> {
    /// Builds a navigator showing `top_left` in the upper-left corner of `viewport`.
    #[must_use]
    pub fn new(config: &NavConfig, viewport: Viewport, top_left: Point, scheduler: S) -> Self {
        let mut camera = Camera::new(
            top_left,
            config.scale,
            config.min_scale,
            config.max_scale,
            Some(viewport),
        );
        camera.set_bounds(config.bounds);
        debug!(
            scale = camera.scale(),
            handlers = ?config.handlers,
            "navigator created"
        );
        Self {
            camera,
            gestures: GestureProcessor::new(config.handlers),
            animations: AnimationController::new(scheduler),
        }
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera for direct manipulation.
    ///
    /// Changes made here are not announced through `on_camera_change`; call
    /// [`Navigator::notify_camera_change`] afterwards if listeners care.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// A transformer over the current camera state.
    #[must_use]
    pub fn transformer(&self) -> CoordinateTransformer<'_> {
        CoordinateTransformer::new(&self.camera)
    }

    /// The gesture processor.
    #[must_use]
    pub fn gestures(&self) -> &GestureProcessor {
        &self.gestures
    }

    /// Gesture callback slots.
    pub fn callbacks_mut(&mut self) -> &mut GestureCallbacks {
        self.gestures.callbacks_mut()
    }

    /// The animation controller.
    #[must_use]
    pub fn animations(&self) -> &AnimationController<S> {
        &self.animations
    }

    /// Mutable access to the animation controller.
    pub fn animations_mut(&mut self) -> &mut AnimationController<S> {
        &mut self.animations
    }

    /// Sets the notification run after every animation frame.
    pub fn set_on_frame(&mut self, on_frame: Option<FrameCallback>) {
        self.animations.set_on_frame(on_frame);
    }

    /// Enabled interactions.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.gestures.capabilities()
    }

    /// Changes the enabled interactions.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.gestures.set_capabilities(capabilities);
    }

    /// Routes one normalized input event through the gesture processor.
    pub fn handle_input(&mut self, event: &InputEvent<'_>) {
        self.gestures.handle(&mut self.camera, event);
    }

    /// Runs the animation tick identified by `token`.
    pub fn tick(&mut self, token: TickToken) {
        self.animations.tick(&mut self.camera, token);
    }

    /// Animates the view center to the world point `target`.
    pub fn animate_move_to(
        &mut self,
        target: Point,
        duration_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) {
        self.animations
            .animate_move_to(&mut self.camera, target, duration_ms, on_complete);
    }

    /// Animates the viewport to `target`, keeping the view center fixed.
    ///
    /// The host resizes its drawing surface from the frame notification.
    pub fn animate_resize(
        &mut self,
        target: Size,
        duration_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) {
        self.animations.animate_resize(
            &mut self.camera,
            target,
            duration_ms,
            Box::new(|camera: &mut Camera, size: Size| camera.resize_viewport(size)),
            on_complete,
        );
    }

    /// Applies a host resize notification.
    ///
    /// Ignored unless [`Capabilities::RESIZE`] is enabled. Returns `true` if the
    /// camera followed the resize.
    pub fn handle_resize(&mut self, size: Size) -> bool {
        if !self.capabilities().contains(Capabilities::RESIZE) {
            return false;
        }
        self.camera.resize_viewport(size);
        self.gestures.notify_camera_change(&self.camera);
        true
    }

    /// Replaces the world bounds and re-clamps the camera.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.camera.set_bounds(bounds);
        self.gestures.notify_camera_change(&self.camera);
    }

    /// Invokes `on_camera_change`, if set.
    pub fn notify_camera_change(&mut self) {
        self.gestures.notify_camera_change(&self.camera);
    }

    /// Whole-cell world rectangle currently on screen.
    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        self.camera.visible_bounds(self.camera.viewport_size())
    }

    /// Items of `index` touching the visible bounds, in load order.
    #[must_use]
    pub fn cull<'a, T: Placed, B: Backend>(&self, index: &'a SpatialIndex<T, B>) -> Vec<&'a T> {
        index.query_aabb(rect_to_aabb(self.visible_bounds()))
    }

    /// Cancels all animations and ends any gesture in progress.
    pub fn shutdown(&mut self) {
        debug!("navigator shutdown");
        self.animations.cancel_all();
        self.gestures.reset();
    }
}

impl Navigator<ManualScheduler> {
    /// Advances manual time by `ms` and fires every pending animation tick.
    pub fn advance(&mut self, ms: f64) {
        self.animations.advance(&mut self.camera, ms);
    }
}
