// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A normalized pointer contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Position relative to the rendering surface.
    pub pos: Point,
    /// Position relative to the page.
    pub client: Point,
}

impl Pointer {
    /// Creates a pointer from surface-relative and page-relative positions.
    #[must_use]
    pub fn new(pos: Point, client: Point) -> Self {
        Self { pos, client }
    }

    /// Creates a pointer for a surface sitting at the page origin.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        let p = Point::new(x, y);
        Self { pos: p, client: p }
    }

    /// Page position of the surface's top-left corner.
    #[must_use]
    pub fn surface_origin(&self) -> Point {
        self.client - self.pos.to_vec2()
    }

    /// Returns this pointer moved by `delta` in both spaces.
    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            client: self.client + delta,
        }
    }
}

/// A normalized input event produced by the platform binding layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Primary button pressed.
    PointerDown(Pointer),
    /// Pointer moved, with or without a button held.
    PointerMove(Pointer),
    /// Primary button released.
    PointerUp(Pointer),
    /// Pointer left the surface.
    PointerLeave(Pointer),
    /// Primary click (delivered after `PointerUp`).
    Click(Pointer),
    /// Secondary click / context menu.
    RightClick(Pointer),
    /// Wheel scroll; positive `delta_y` zooms out.
    Wheel {
        /// Pointer position at the time of the scroll.
        pointer: Pointer,
        /// Vertical wheel delta.
        delta_y: f64,
    },
    /// Touches currently on the surface after a finger went down.
    TouchStart(&'a [Pointer]),
    /// Touches currently on the surface after movement.
    TouchMove(&'a [Pointer]),
    /// A finger was lifted.
    TouchEnd {
        /// Touches still on the surface.
        remaining: &'a [Pointer],
        /// The contact that was lifted.
        lifted: Pointer,
    },
}
