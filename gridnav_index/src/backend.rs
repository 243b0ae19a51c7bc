// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use crate::types::Aabb2D;

/// Spatial backend abstraction used by [`SpatialIndex`](crate::SpatialIndex).
///
/// Backends index *slots*: slot `i` is the `i`-th box passed to
/// [`Backend::load`]. Contents are replaced wholesale on every load.
pub trait Backend: Default {
    /// Replaces all contents with `boxes`.
    fn load(&mut self, boxes: &[Aabb2D]);

    /// Removes all contents.
    fn clear(&mut self);

    /// Number of indexed slots.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit slots whose box intersects `rect` (edges inclusive).
    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D, f: F);

    /// Visit slots whose box contains the point.
    ///
    /// The default implementation visits a degenerate rectangle.
    fn visit_point<F: FnMut(usize)>(&self, x: f64, y: f64, f: F) {
        self.visit_rect(Aabb2D::new(x, y, x, y), f);
    }

    /// Query slots whose box intersects the rectangle. Default: collects `visit_rect`.
    fn query_rect<'a>(&'a self, rect: Aabb2D) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out = Vec::new();
        self.visit_rect(rect, |i| out.push(i));
        Box::new(out.into_iter())
    }
}
