// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::camera::{CELL_CENTER_OFFSET, Camera};

/// World/screen conversion over the live state of a [`Camera`].
///
/// The two directions are deliberately asymmetric:
/// - [`world_to_screen`](Self::world_to_screen) maps a cell index to the pixel
///   at the visual center of that cell.
/// - [`screen_to_world`](Self::screen_to_world) recovers the continuous world
///   coordinate under a pixel; `floor` it to get a cell index.
///
/// Converting world → screen → world therefore yields `(x + 0.5, y + 0.5)`.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateTransformer<'a> {
    camera: &'a Camera,
}

impl<'a> CoordinateTransformer<'a> {
    /// Creates a transformer reading from `camera`.
    #[must_use]
    pub fn new(camera: &'a Camera) -> Self {
        Self { camera }
    }

    /// Camera this transformer reads from.
    #[must_use]
    pub fn camera(&self) -> &'a Camera {
        self.camera
    }

    /// Pixel position of the visual center of world cell `world`.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let scale = self.camera.scale();
        Point::new(
            (world.x + CELL_CENTER_OFFSET - self.camera.x()) * scale,
            (world.y + CELL_CENTER_OFFSET - self.camera.y()) * scale,
        )
    }

    /// Continuous world coordinate under the pixel `screen`.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let scale = self.camera.scale();
        Point::new(
            self.camera.x() + screen.x / scale,
            self.camera.y() + screen.y / scale,
        )
    }

    /// Index of the cell under the pixel `screen`.
    #[must_use]
    pub fn cell_at_screen(&self, screen: Point) -> Point {
        let world = self.screen_to_world(screen);
        Point::new(world.x.floor(), world.y.floor())
    }

    /// Pixel rectangle covered by the cell containing `world`.
    ///
    /// The rectangle is one scale unit wide and centered on
    /// [`world_to_screen`](Self::world_to_screen) of the floored cell.
    #[must_use]
    pub fn cell_to_screen_rect(&self, world: Point) -> Rect {
        let cell = Point::new(world.x.floor(), world.y.floor());
        let center = self.world_to_screen(cell);
        let half = self.camera.scale() / 2.0;
        Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        )
    }

    /// Builds the coordinate triple handed to pointer callbacks.
    ///
    /// `mouse` is relative to the rendering surface, `client` relative to the page.
    #[must_use]
    pub fn pointer_coords(&self, mouse: Point, client: Point) -> PointerCoords {
        let world = self.screen_to_world(mouse);
        let cell = Point::new(world.x.floor(), world.y.floor());
        let snapped_mouse = self.world_to_screen(cell);
        let surface_origin: Vec2 = client - mouse;
        PointerCoords {
            coords: PointPair {
                raw: world,
                snapped: cell,
            },
            mouse: PointPair {
                raw: mouse,
                snapped: snapped_mouse,
            },
            client: PointPair {
                raw: client,
                snapped: snapped_mouse + surface_origin,
            },
        }
    }
}

/// A raw position and its cell-snapped counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointPair {
    /// Unrounded position.
    pub raw: Point,
    /// Position snapped to the cell under `raw`.
    pub snapped: Point,
}

/// The same pointer location in world, surface and page space.
///
/// - `coords.snapped` is the floored cell index.
/// - `mouse.snapped` / `client.snapped` are the pixel at the visual center of
///   that cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerCoords {
    /// World space.
    pub coords: PointPair,
    /// Surface-relative pixels.
    pub mouse: PointPair,
    /// Page-relative pixels.
    pub client: PointPair,
}
