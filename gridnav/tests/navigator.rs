// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `gridnav` engine.
//!
//! These follow the control flow a host drives: input events mutate the camera,
//! listeners hear about it, animations advance on scheduled ticks, and the
//! render pass culls a spatial index against the visible bounds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gridnav::animation::{FrameScheduler, ManualScheduler};
use gridnav::camera::{Camera, Viewport};
use gridnav::gesture::{Capabilities, InputEvent, Pointer};
use gridnav::index::{SpatialIndex, SpatialItem};
use gridnav::{NavConfig, Navigator};
use kurbo::{Point, Rect, Size};

fn navigator(config: NavConfig) -> Navigator<ManualScheduler> {
    Navigator::new(
        &config,
        Viewport::new(160.0, 80.0, 2.0),
        Point::ZERO,
        ManualScheduler::new(),
    )
}

#[test]
fn camera_change_precedes_rerender_for_each_input() {
    let mut nav = navigator(NavConfig::default().with_scale(8.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    nav.callbacks_mut().on_camera_change = Some(Box::new(move |cam: &Camera| {
        s.borrow_mut().push(cam.top_left());
    }));

    nav.handle_input(&InputEvent::PointerDown(Pointer::at(80.0, 40.0)));
    nav.handle_input(&InputEvent::PointerMove(Pointer::at(72.0, 40.0)));
    nav.handle_input(&InputEvent::PointerMove(Pointer::at(64.0, 32.0)));
    nav.handle_input(&InputEvent::PointerUp(Pointer::at(64.0, 32.0)));

    // The listener observed the already-mutated camera each time.
    assert_eq!(
        *seen.borrow(),
        vec![Point::new(1.5, 0.5), Point::new(2.5, 1.5)]
    );
    assert_eq!(nav.camera().top_left(), Point::new(2.5, 1.5));
}

#[test]
fn move_animation_eases_and_completes_once() {
    let mut nav = navigator(NavConfig::default().with_scale(4.0));
    let frames = Rc::new(Cell::new(0));
    let completions = Rc::new(Cell::new(0));
    let f = Rc::clone(&frames);
    nav.set_on_frame(Some(Box::new(move |_: &Camera| f.set(f.get() + 1))));

    let start = nav.camera().center(nav.camera().viewport_size());
    let target = Point::new(100.0, 60.0);
    let c = Rc::clone(&completions);
    nav.animate_move_to(target, 200.0, Some(Box::new(move || c.set(c.get() + 1))));

    nav.advance(50.0);
    // Quarter of the way in time, ease-in-out quad gives 2 * 0.25^2 = 0.125.
    let center = nav.camera().center(nav.camera().viewport_size());
    let expected = start.lerp(target, 0.125);
    assert!((center - expected).hypot() < 1e-9, "{center:?} vs {expected:?}");

    nav.advance(150.0);
    let center = nav.camera().center(nav.camera().viewport_size());
    assert!((center - target).hypot() < 1e-9);
    assert_eq!(frames.get(), 2);
    assert_eq!(completions.get(), 1);
    assert!(!nav.animations().is_animating());

    nav.advance(100.0);
    assert_eq!(completions.get(), 1);
}

#[test]
fn superseded_move_never_completes() {
    let mut nav = navigator(NavConfig::default());
    let first = Rc::new(Cell::new(false));
    let second = Rc::new(Cell::new(false));

    let f = Rc::clone(&first);
    nav.animate_move_to(Point::new(10.0, 10.0), 100.0, Some(Box::new(move || f.set(true))));
    // The host picks up the first tick but has not fired it yet.
    let stale = nav.animations_mut().scheduler_mut().take_pending();

    let s = Rc::clone(&second);
    nav.animate_move_to(Point::new(-10.0, 0.0), 100.0, Some(Box::new(move || s.set(true))));

    // A host that still holds the first tick fires it: ignored.
    nav.animations_mut().scheduler_mut().advance(100.0);
    for token in stale {
        nav.tick(token);
    }
    assert!(nav.animations().is_moving());

    nav.advance(0.0);
    assert!(!first.get());
    assert!(second.get());
}

#[test]
fn instant_animations_apply_immediately() {
    let mut nav = navigator(NavConfig::default());
    let done = Rc::new(Cell::new(0));

    let d = Rc::clone(&done);
    nav.animate_move_to(Point::new(7.0, 3.0), 0.0, Some(Box::new(move || d.set(d.get() + 1))));
    let center = nav.camera().center(nav.camera().viewport_size());
    assert!((center - Point::new(7.0, 3.0)).hypot() < 1e-9);

    let d = Rc::clone(&done);
    nav.animate_resize(
        Size::new(-5.0, 40.0),
        300.0,
        Some(Box::new(move || d.set(d.get() + 1))),
    );
    assert_eq!(done.get(), 2);
    assert!(!nav.animations().is_animating());
    assert_eq!(nav.animations().scheduler().pending_count(), 0);
}

#[test]
fn bounded_map_culls_only_what_is_on_screen() {
    let config = NavConfig::default()
        .with_scale(10.0)
        .with_bounds(Some(Rect::new(0.0, 0.0, 64.0, 64.0)));
    let mut nav = navigator(config);

    let markers: SpatialIndex<SpatialItem<(u32, u32)>> = (0..64_u32)
        .flat_map(|y| (0..64_u32).map(move |x| (x, y)))
        .map(|(x, y)| SpatialItem::new(f64::from(x), f64::from(y), None, (x, y)))
        .collect();

    // 16x8 cells on screen from (0.5, 0.5): whole cells 0..=17 by 0..=9.
    assert_eq!(nav.visible_bounds(), Rect::new(0.0, 0.0, 17.0, 9.0));
    let visible = nav.cull(&markers);
    assert_eq!(visible.len(), 18 * 10);
    assert!(visible.iter().all(|m| m.data.0 <= 17 && m.data.1 <= 9));

    // Fling far past the bottom-right edge: clamped to the last screenful.
    nav.handle_input(&InputEvent::PointerDown(Pointer::at(100.0, 50.0)));
    nav.handle_input(&InputEvent::PointerMove(Pointer::at(-5000.0, -5000.0)));
    nav.handle_input(&InputEvent::PointerUp(Pointer::at(-5000.0, -5000.0)));
    assert_eq!(nav.visible_bounds(), Rect::new(48.0, 56.0, 64.0, 64.0));
    let visible = nav.cull(&markers);
    assert!(visible.iter().all(|m| m.data.0 >= 48 && m.data.1 >= 56));
    assert_eq!(visible.len(), 16 * 8);
}

#[test]
fn resize_follows_capability_and_keeps_center() {
    let mut nav = navigator(NavConfig::default().with_scale(5.0));
    let changes = Rc::new(Cell::new(0));
    let c = Rc::clone(&changes);
    nav.callbacks_mut().on_camera_change = Some(Box::new(move |_: &Camera| c.set(c.get() + 1)));

    let center = nav.camera().center(nav.camera().viewport_size());
    assert!(nav.handle_resize(Size::new(320.0, 240.0)));
    let after = nav.camera().center(nav.camera().viewport_size());
    assert!((after - center).hypot() < 1e-9);
    assert_eq!(changes.get(), 1);
    assert_eq!(
        nav.camera().viewport().map(|vp| vp.backing_size()),
        Some(Size::new(640.0, 480.0))
    );

    nav.set_capabilities(Capabilities::all() - Capabilities::RESIZE);
    assert!(!nav.handle_resize(Size::new(10.0, 10.0)));
    assert_eq!(nav.camera().viewport_size(), Size::new(320.0, 240.0));
    assert_eq!(changes.get(), 1);
}

#[test]
fn shutdown_leaves_nothing_scheduled() {
    let mut nav = navigator(NavConfig::default());
    nav.animate_move_to(Point::new(30.0, 30.0), 500.0, None);
    nav.animate_resize(Size::new(320.0, 160.0), 500.0, None);
    assert_eq!(nav.animations().scheduler().pending_count(), 2);

    nav.shutdown();
    assert_eq!(nav.animations().scheduler().pending_count(), 0);
    let now = nav.animations().scheduler().now();
    nav.advance(1000.0);
    assert_eq!(nav.animations().scheduler().now(), now + 1000.0);
    assert_eq!(nav.camera().viewport_size(), Size::new(160.0, 80.0));
}
