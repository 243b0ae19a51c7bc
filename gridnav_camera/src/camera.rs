// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

use crate::viewport::Viewport;

/// Offset applied to the stored top-left so integer world coordinates address
/// the visual center of their cell.
pub const CELL_CENTER_OFFSET: f64 = 0.5;

/// Wheel deltas are clamped to `[-WHEEL_DELTA_LIMIT, WHEEL_DELTA_LIMIT]` before
/// being turned into a zoom factor.
pub const WHEEL_DELTA_LIMIT: f64 = 100.0;

/// Exponential zoom rate per wheel delta unit.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Pan/zoom camera over an orthogonal world grid.
///
/// The camera stores the world coordinate shown at the top-left pixel of the
/// viewport and a uniform scale (pixels per world unit). It can:
/// - Pan by pixel deltas.
/// - Zoom around a screen-space anchor, by wheel delta or by factor.
/// - Restrict panning to optional world bounds, centering on them when the
///   viewport is larger than the bounds.
///
/// `min_scale <= scale <= max_scale` holds after every operation.
#[derive(Clone, Debug)]
pub struct Camera {
    top_left: Point,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    bounds: Option<Rect>,
    viewport: Option<Viewport>,
}

impl Camera {
    /// Creates a camera whose top-left pixel shows `top_left` at `scale`.
    ///
    /// - The stored top-left is shifted by [`CELL_CENTER_OFFSET`] on both axes.
    /// - The scale range is normalized so that `min_scale <= max_scale`, and the
    ///   initial scale is clamped into it.
    /// - `viewport` is only needed for bounds clamping and resize handling.
    #[must_use]
    pub fn new(
        top_left: Point,
        scale: f64,
        min_scale: f64,
        max_scale: f64,
        viewport: Option<Viewport>,
    ) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            top_left: top_left + Vec2::new(CELL_CENTER_OFFSET, CELL_CENTER_OFFSET),
            scale: scale.clamp(min_scale, max_scale),
            min_scale,
            max_scale,
            bounds: None,
            viewport,
        }
    }

    /// World X coordinate at the left edge of the viewport.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.top_left.x
    }

    /// World Y coordinate at the top edge of the viewport.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.top_left.y
    }

    /// World point at the top-left pixel of the viewport.
    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Current scale in pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the scale limits and clamps the current scale into them.
    ///
    /// The range is normalized so that `min_scale <= max_scale`. The scale is
    /// clamped about the top-left, then the view is re-clamped to the bounds,
    /// which may move the top-left.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.scale.clamp(min_scale, max_scale);
        self.clamp_to_bounds();
    }

    /// Current world bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets or clears the world bounds and re-clamps immediately.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        debug!(?bounds, "camera bounds changed");
        self.bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Viewport used for clamping, if one was provided.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Logical viewport size, or zero when no viewport is attached.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport.map_or(Size::ZERO, |vp| vp.size)
    }

    /// Replaces the viewport, keeping the top-left fixed, then re-clamps to the bounds.
    ///
    /// Use [`Camera::resize_viewport`] to keep the center fixed.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
        self.clamp_to_bounds();
    }

    /// Resizes the attached viewport, keeping the world point at its center fixed.
    ///
    /// Without an attached viewport this attaches one of `size` at a device pixel
    /// ratio of `1.0`.
    pub fn resize_viewport(&mut self, size: Size) {
        match self.viewport.as_mut() {
            Some(vp) => {
                let delta = Vec2::new(size.width - vp.size.width, size.height - vp.size.height);
                vp.size = size;
                debug!(width = size.width, height = size.height, "camera viewport resized");
                self.adjust_for_resize(delta);
            }
            None => {
                self.viewport = Some(Viewport {
                    size,
                    device_pixel_ratio: 1.0,
                });
            }
        }
        self.clamp_to_bounds();
    }

    /// Pans by a delta in pixels. Positive deltas move the content right/down.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.top_left -= delta / self.scale;
        self.clamp_to_bounds();
    }

    /// Zooms by a wheel delta around `pointer`.
    ///
    /// `pointer` and `viewport_origin` are both in page coordinates; their
    /// difference is the anchor inside the viewport. Positive deltas zoom out.
    /// Returns `true` if the scale changed.
    pub fn zoom(&mut self, pointer: Point, wheel_delta: f64, viewport_origin: Point) -> bool {
        let delta = wheel_delta.clamp(-WHEEL_DELTA_LIMIT, WHEEL_DELTA_LIMIT);
        let new_scale = (self.scale * (-delta * WHEEL_ZOOM_SENSITIVITY).exp())
            .clamp(self.min_scale, self.max_scale);
        self.zoom_about(pointer - viewport_origin, new_scale)
    }

    /// Multiplies the scale by `factor` around `center` (viewport pixels).
    ///
    /// Non-positive or non-finite factors are ignored. Returns `true` if the
    /// scale changed.
    pub fn zoom_by_factor(&mut self, factor: f64, center: Point) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        self.zoom_about(center.to_vec2(), new_scale)
    }

    /// Returns the world point at the center of a `view_size` viewport.
    #[must_use]
    pub fn center(&self, view_size: Size) -> Point {
        let half = Vec2::new(view_size.width, view_size.height) / (2.0 * self.scale);
        self.top_left + half - Vec2::new(CELL_CENTER_OFFSET, CELL_CENTER_OFFSET)
    }

    /// Moves the camera so that `center` sits at the middle of a `view_size` viewport.
    pub fn set_center(&mut self, center: Point, view_size: Size) {
        let half = Vec2::new(view_size.width, view_size.height) / (2.0 * self.scale);
        self.top_left = center - half + Vec2::new(CELL_CENTER_OFFSET, CELL_CENTER_OFFSET);
        self.clamp_to_bounds();
    }

    /// Shifts the top-left so the world point at the viewport center stays put
    /// when the viewport grows by `delta` pixels.
    ///
    /// This does not touch the attached viewport or clamp.
    pub fn adjust_for_resize(&mut self, delta: Vec2) {
        self.top_left -= delta / (2.0 * self.scale);
    }

    /// Returns the continuous world rectangle covered by a `view_size` viewport.
    #[must_use]
    pub fn visible_world_rect(&self, view_size: Size) -> Rect {
        Rect::new(
            self.top_left.x,
            self.top_left.y,
            self.top_left.x + view_size.width / self.scale,
            self.top_left.y + view_size.height / self.scale,
        )
    }

    /// Returns the visible world rectangle expanded outward to whole cells.
    ///
    /// This is the rectangle to query a spatial index with before drawing.
    #[must_use]
    pub fn visible_bounds(&self, view_size: Size) -> Rect {
        let r = self.visible_world_rect(view_size);
        Rect::new(r.x0.floor(), r.y0.floor(), r.x1.ceil(), r.y1.ceil())
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            top_left: self.top_left,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            bounds: self.bounds,
            viewport: self.viewport,
            visible_world_rect: self.viewport.map(|vp| self.visible_world_rect(vp.size)),
        }
    }

    fn zoom_about(&mut self, anchor: Vec2, new_scale: f64) -> bool {
        let old_scale = self.scale;
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return false;
        }
        // Keep the world point under `anchor` fixed.
        self.top_left += anchor * (1.0 / old_scale - 1.0 / new_scale);
        self.scale = new_scale;
        self.clamp_to_bounds();
        true
    }

    fn clamp_to_bounds(&mut self) {
        let (Some(bounds), Some(viewport)) = (self.bounds, self.viewport) else {
            return;
        };
        self.top_left.x = clamp_axis(
            self.top_left.x,
            viewport.size.width / self.scale,
            bounds.x0,
            bounds.x1,
        );
        self.top_left.y = clamp_axis(
            self.top_left.y,
            viewport.size.height / self.scale,
            bounds.y0,
            bounds.y1,
        );
    }
}

/// Clamps one axis of the top-left so `[start, start + view_extent]` stays in
/// `[min, max]`, or centers the view on `[min, max]` when it does not fit.
fn clamp_axis(start: f64, view_extent: f64, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if view_extent >= extent {
        min - (view_extent - extent) / 2.0
    } else {
        start.clamp(min, max - view_extent)
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Stored top-left world point (including the cell-center offset).
    pub top_left: Point,
    /// Current scale.
    pub scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Optional world bounds.
    pub bounds: Option<Rect>,
    /// Attached viewport, if any.
    pub viewport: Option<Viewport>,
    /// Continuous visible world rectangle, when a viewport is attached.
    pub visible_world_rect: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{Camera, clamp_axis};
    use crate::Viewport;

    fn camera_with_viewport(scale: f64, width: f64, height: f64) -> Camera {
        Camera::new(
            Point::ZERO,
            scale,
            0.1,
            10.0,
            Some(Viewport::new(width, height, 1.0)),
        )
    }

    #[test]
    fn construction_applies_cell_center_offset() {
        let cam = Camera::new(Point::ZERO, 2.0, 0.5, 4.0, None);
        assert_eq!(cam.x(), 0.5);
        assert_eq!(cam.y(), 0.5);
        assert_eq!(cam.scale(), 2.0);

        let center = cam.center(Size::new(200.0, 100.0));
        assert!((center.x - 50.0).abs() < 1e-9);
        assert!((center.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn construction_normalizes_limits_and_clamps_scale() {
        let cam = Camera::new(Point::ZERO, 50.0, 8.0, 2.0, None);
        assert_eq!(cam.min_scale(), 2.0);
        assert_eq!(cam.max_scale(), 8.0);
        assert_eq!(cam.scale(), 8.0);
    }

    #[test]
    fn pan_moves_top_left_against_delta() {
        let mut cam = Camera::new(Point::ZERO, 2.0, 0.5, 4.0, None);
        cam.pan(Vec2::new(10.0, -4.0));
        assert!((cam.x() - (0.5 - 5.0)).abs() < 1e-9);
        assert!((cam.y() - (0.5 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn set_center_of_center_is_idempotent() {
        let mut cam = Camera::new(Point::new(13.25, -7.0), 1.7, 0.1, 10.0, None);
        let size = Size::new(640.0, 480.0);
        let before = cam.top_left();
        cam.set_center(cam.center(size), size);
        assert!((cam.x() - before.x).abs() < 1e-9);
        assert!((cam.y() - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_point_under_pointer_fixed() {
        let mut cam = camera_with_viewport(1.0, 800.0, 600.0);
        let origin = Point::new(30.0, 40.0);
        let pointer = Point::new(230.0, 190.0);
        let anchor = pointer - origin;
        let before = cam.top_left() + anchor / cam.scale();

        assert!(cam.zoom(pointer, -100.0, origin));
        assert!(cam.scale() > 1.0);
        let after = cam.top_left() + anchor / cam.scale();
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_wheel_delta() {
        let mut a = Camera::new(Point::ZERO, 1.0, 0.01, 100.0, None);
        let mut b = a.clone();
        a.zoom(Point::ZERO, 100.0, Point::ZERO);
        b.zoom(Point::ZERO, 5000.0, Point::ZERO);
        assert!((a.scale() - b.scale()).abs() < 1e-12);
        assert!((a.scale() - (-0.1_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn zoom_at_limit_is_a_no_op() {
        let mut cam = Camera::new(Point::new(3.0, 4.0), 10.0, 0.1, 10.0, None);
        let before = cam.top_left();
        assert!(!cam.zoom(Point::new(100.0, 100.0), -50.0, Point::ZERO));
        assert_eq!(cam.top_left(), before);
        assert_eq!(cam.scale(), 10.0);
    }

    #[test]
    fn zoom_by_factor_keeps_center_fixed_and_respects_limits() {
        let mut cam = Camera::new(Point::ZERO, 1.0, 0.5, 3.0, None);
        let center = Point::new(120.0, 80.0);
        let before = cam.top_left() + center.to_vec2() / cam.scale();
        assert!(cam.zoom_by_factor(2.0, center));
        assert_eq!(cam.scale(), 2.0);
        let after = cam.top_left() + center.to_vec2() / cam.scale();
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);

        assert!(cam.zoom_by_factor(10.0, center));
        assert_eq!(cam.scale(), 3.0);
        assert!(!cam.zoom_by_factor(10.0, center));
        assert!(!cam.zoom_by_factor(0.0, center));
        assert!(!cam.zoom_by_factor(f64::NAN, center));
    }

    #[test]
    fn bounds_larger_than_view_contain_visible_rect() {
        let mut cam = camera_with_viewport(1.0, 100.0, 100.0);
        let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
        cam.set_bounds(Some(bounds));

        for delta in [
            Vec2::new(1000.0, 1000.0),
            Vec2::new(-5000.0, 20.0),
            Vec2::new(37.0, -9999.0),
        ] {
            cam.pan(delta);
            let visible = cam.visible_bounds(Size::new(100.0, 100.0));
            assert!(visible.x0 >= bounds.x0 && visible.x1 <= bounds.x1, "{visible:?}");
            assert!(visible.y0 >= bounds.y0 && visible.y1 <= bounds.y1, "{visible:?}");
        }
    }

    #[test]
    fn bounds_equal_to_view_stay_fully_visible() {
        let mut cam = camera_with_viewport(1.0, 100.0, 100.0);
        cam.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        for delta in [Vec2::new(40.0, -40.0), Vec2::new(-300.0, 300.0)] {
            cam.pan(delta);
            assert_eq!(cam.top_left(), Point::ZERO);
            let visible = cam.visible_world_rect(Size::new(100.0, 100.0));
            assert_eq!(visible, Rect::new(0.0, 0.0, 100.0, 100.0));
        }
    }

    #[test]
    fn bounds_smaller_than_view_are_centered() {
        let mut cam = camera_with_viewport(1.0, 200.0, 100.0);
        let bounds = Rect::new(10.0, 10.0, 60.0, 40.0);
        cam.set_bounds(Some(bounds));
        cam.pan(Vec2::new(123.0, -77.0));

        let visible = cam.visible_world_rect(Size::new(200.0, 100.0));
        assert!((visible.center().x - bounds.center().x).abs() < 1e-9);
        assert!((visible.center().y - bounds.center().y).abs() < 1e-9);
    }

    #[test]
    fn clamp_axis_pins_or_centers() {
        assert_eq!(clamp_axis(-5.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp_axis(95.0, 10.0, 0.0, 100.0), 90.0);
        assert_eq!(clamp_axis(42.0, 10.0, 0.0, 100.0), 42.0);
        assert_eq!(clamp_axis(42.0, 120.0, 0.0, 100.0), -10.0);
    }

    #[test]
    fn clearing_bounds_frees_panning() {
        let mut cam = camera_with_viewport(1.0, 100.0, 100.0);
        cam.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        cam.set_bounds(None);
        cam.pan(Vec2::new(50.0, 0.0));
        assert_eq!(cam.x(), -50.0);
    }

    #[test]
    fn resize_keeps_center_fixed() {
        let mut cam = camera_with_viewport(2.0, 400.0, 300.0);
        let before = cam.center(Size::new(400.0, 300.0));
        cam.resize_viewport(Size::new(600.0, 200.0));
        let after = cam.center(Size::new(600.0, 200.0));
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert_eq!(cam.viewport_size(), Size::new(600.0, 200.0));
    }

    #[test]
    fn adjust_for_resize_shifts_by_half_delta() {
        let mut cam = Camera::new(Point::ZERO, 2.0, 0.1, 10.0, None);
        cam.adjust_for_resize(Vec2::new(40.0, -20.0));
        assert!((cam.x() - (0.5 - 10.0)).abs() < 1e-9);
        assert!((cam.y() - (0.5 + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn visible_bounds_rounds_outward() {
        let cam = Camera::new(Point::new(1.2, 3.7), 4.0, 0.1, 10.0, None);
        let r = cam.visible_bounds(Size::new(10.0, 10.0));
        assert_eq!(r, Rect::new(1.0, 4.0, 5.0, 7.0));
    }

    #[test]
    fn scale_limits_clamp_current_scale() {
        let mut cam = Camera::new(Point::ZERO, 5.0, 0.1, 10.0, None);
        cam.set_scale_limits(8.0, 2.0);
        assert_eq!(cam.scale(), 5.0);
        cam.set_scale_limits(0.1, 1.0);
        assert_eq!(cam.scale(), 1.0);

        let info = cam.debug_info();
        assert_eq!(info.min_scale, 0.1);
        assert_eq!(info.max_scale, 1.0);
        assert!(info.visible_world_rect.is_none());
    }
}
