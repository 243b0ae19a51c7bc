// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use gridnav_camera::Camera;
use kurbo::{Point, Size};
use tracing::debug;

use crate::easing::{ease_in_out_quad, lerp, linear};
use crate::scheduler::{FrameScheduler, TickToken};

/// Callback run once when an animation reaches its target.
pub type CompletionCallback = Box<dyn FnOnce()>;
/// Applies an interpolated viewport size (resize the surface, adjust the camera).
pub type SizeApplyCallback = Box<dyn FnMut(&mut Camera, Size)>;
/// Notified after every applied animation frame.
pub type FrameCallback = Box<dyn FnMut(&Camera)>;

/// The two independent animation timelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timeline {
    /// Camera center moves.
    Move,
    /// Viewport size changes.
    Resize,
}

struct MoveTask {
    start: Point,
    target: Point,
    start_time: f64,
    duration: f64,
    token: TickToken,
    on_complete: Option<CompletionCallback>,
}

struct ResizeTask {
    start: Size,
    target: Size,
    start_time: f64,
    duration: f64,
    token: TickToken,
    on_apply: SizeApplyCallback,
    on_complete: Option<CompletionCallback>,
}

/// Interpolates camera center and viewport size over scheduled frames.
///
/// Each timeline holds at most one task with at most one pending tick. Starting
/// a new task on a timeline discards the previous one without running its
/// completion callback.
pub struct AnimationController<S: FrameScheduler> {
    scheduler: S,
    move_task: Option<MoveTask>,
    resize_task: Option<ResizeTask>,
    on_frame: Option<FrameCallback>,
}

impl<S: FrameScheduler + fmt::Debug> fmt::Debug for AnimationController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationController")
            .field("scheduler", &self.scheduler)
            .field("moving", &self.is_moving())
            .field("resizing", &self.is_resizing())
            .field("on_frame", &self.on_frame.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: FrameScheduler> AnimationController<S> {
    /// Creates an idle controller over `scheduler`.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            move_task: None,
            resize_task: None,
            on_frame: None,
        }
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Sets or clears the per-frame notification.
    pub fn set_on_frame(&mut self, on_frame: Option<FrameCallback>) {
        self.on_frame = on_frame;
    }

    /// Returns `true` while either timeline has a pending tick.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_moving() || self.is_resizing()
    }

    /// Returns `true` while a move is in flight.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.move_task.is_some()
    }

    /// Returns `true` while a resize is in flight.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize_task.is_some()
    }

    /// Moves the camera center to `target` with quadratic ease-in-out.
    ///
    /// The center is measured against the camera's attached viewport size.
    /// A non-positive `duration_ms` applies the target and completes
    /// immediately.
    pub fn animate_move_to(
        &mut self,
        camera: &mut Camera,
        target: Point,
        duration_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) {
        self.cancel_move();
        if duration_ms <= 0.0 {
            debug!(?target, "animation: instant move");
            camera.set_center(target, camera.viewport_size());
            self.emit_frame(camera);
            if let Some(done) = on_complete {
                done();
            }
            return;
        }
        debug!(?target, duration_ms, "animation: move started");
        self.move_task = Some(MoveTask {
            start: camera.center(camera.viewport_size()),
            target,
            start_time: self.scheduler.now(),
            duration: duration_ms,
            token: self.scheduler.schedule_next_tick(),
            on_complete,
        });
    }

    /// Interpolates the viewport size from its current value to `target`.
    ///
    /// `on_apply` receives each interpolated size and is responsible for
    /// applying it (typically [`Camera::resize_viewport`] plus resizing the
    /// drawing surface). A non-positive `duration_ms` or target dimension
    /// applies the target and completes immediately.
    pub fn animate_resize(
        &mut self,
        camera: &mut Camera,
        target: Size,
        duration_ms: f64,
        mut on_apply: SizeApplyCallback,
        on_complete: Option<CompletionCallback>,
    ) {
        self.cancel_resize();
        if duration_ms <= 0.0 || target.width <= 0.0 || target.height <= 0.0 {
            debug!(?target, "animation: instant resize");
            on_apply(camera, target);
            self.emit_frame(camera);
            if let Some(done) = on_complete {
                done();
            }
            return;
        }
        debug!(?target, duration_ms, "animation: resize started");
        self.resize_task = Some(ResizeTask {
            start: camera.viewport_size(),
            target,
            start_time: self.scheduler.now(),
            duration: duration_ms,
            token: self.scheduler.schedule_next_tick(),
            on_apply,
            on_complete,
        });
    }

    /// Advances the timeline whose pending tick is `token`.
    ///
    /// Tokens that are not pending (cancelled or superseded) are ignored.
    pub fn tick(&mut self, camera: &mut Camera, token: TickToken) {
        if self.move_task.as_ref().is_some_and(|t| t.token == token) {
            self.tick_move(camera);
        } else if self.resize_task.as_ref().is_some_and(|t| t.token == token) {
            self.tick_resize(camera);
        }
    }

    /// Discards the in-flight move without running its completion.
    pub fn cancel_move(&mut self) {
        if let Some(task) = self.move_task.take() {
            debug!("animation: move cancelled");
            self.scheduler.cancel_tick(task.token);
        }
    }

    /// Discards the in-flight resize without running its completion.
    pub fn cancel_resize(&mut self) {
        if let Some(task) = self.resize_task.take() {
            debug!("animation: resize cancelled");
            self.scheduler.cancel_tick(task.token);
        }
    }

    /// Cancels both timelines.
    pub fn cancel_all(&mut self) {
        self.cancel_move();
        self.cancel_resize();
    }

    /// Cancels the given timeline.
    pub fn cancel(&mut self, timeline: Timeline) {
        match timeline {
            Timeline::Move => self.cancel_move(),
            Timeline::Resize => self.cancel_resize(),
        }
    }

    fn tick_move(&mut self, camera: &mut Camera) {
        let Some(mut task) = self.move_task.take() else {
            return;
        };
        let progress = progress(self.scheduler.now(), task.start_time, task.duration);
        let t = ease_in_out_quad(progress);
        let center = Point::new(
            lerp(task.start.x, task.target.x, t),
            lerp(task.start.y, task.target.y, t),
        );
        camera.set_center(center, camera.viewport_size());
        self.emit_frame(camera);

        if progress >= 1.0 {
            debug!("animation: move complete");
            if let Some(done) = task.on_complete.take() {
                done();
            }
        } else {
            task.token = self.scheduler.schedule_next_tick();
            self.move_task = Some(task);
        }
    }

    fn tick_resize(&mut self, camera: &mut Camera) {
        let Some(mut task) = self.resize_task.take() else {
            return;
        };
        let progress = progress(self.scheduler.now(), task.start_time, task.duration);
        let t = linear(progress);
        let size = Size::new(
            lerp(task.start.width, task.target.width, t),
            lerp(task.start.height, task.target.height, t),
        );
        (task.on_apply)(camera, size);
        self.emit_frame(camera);

        if progress >= 1.0 {
            debug!("animation: resize complete");
            if let Some(done) = task.on_complete.take() {
                done();
            }
        } else {
            task.token = self.scheduler.schedule_next_tick();
            self.resize_task = Some(task);
        }
    }

    fn emit_frame(&mut self, camera: &Camera) {
        if let Some(on_frame) = self.on_frame.as_mut() {
            on_frame(camera);
        }
    }
}

impl AnimationController<crate::ManualScheduler> {
    /// Advances manual time by `ms` and fires every pending tick.
    pub fn advance(&mut self, camera: &mut Camera, ms: f64) {
        self.scheduler.advance(ms);
        for token in self.scheduler.take_pending() {
            self.tick(camera, token);
        }
    }
}

fn progress(now: f64, start_time: f64, duration: f64) -> f64 {
    ((now - start_time) / duration).clamp(0.0, 1.0)
}
