// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::RTree;
use crate::types::Aabb2D;

/// Something with a world position and an optional square extent.
pub trait Placed {
    /// Center x in world units.
    fn x(&self) -> f64;
    /// Center y in world units.
    fn y(&self) -> f64;
    /// Side length of the item's square footprint. Points have size `0`.
    fn size(&self) -> f64 {
        0.0
    }

    /// Bounding box: center ± size/2.
    fn aabb(&self) -> Aabb2D {
        Aabb2D::from_center(self.x(), self.y(), self.size())
    }
}

/// A plain positioned item carrying arbitrary data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialItem<D = ()> {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Optional extent; `None` is treated as `0`.
    pub size: Option<f64>,
    /// Payload.
    pub data: D,
}

impl SpatialItem<()> {
    /// A point item without payload.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: None,
            data: (),
        }
    }
}

impl<D> SpatialItem<D> {
    /// An item of the given extent carrying `data`.
    #[must_use]
    pub fn new(x: f64, y: f64, size: Option<f64>, data: D) -> Self {
        Self { x, y, size, data }
    }
}

impl<D> Placed for SpatialItem<D> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn size(&self) -> f64 {
        self.size.unwrap_or(0.0)
    }
}

/// Bulk-loaded spatial index over [`Placed`] items.
///
/// Contents are replaced wholesale by [`SpatialIndex::load`]; there is no
/// incremental insert. Queries are read-only.
#[derive(Clone)]
pub struct SpatialIndex<T, B: Backend = RTree> {
    items: Vec<T>,
    backend: B,
}

impl<T, B: Backend + Debug> Debug for SpatialIndex<T, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.items.len())
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl<T: Placed> SpatialIndex<T, RTree> {
    /// Creates an empty R-tree index.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(RTree::default())
    }

    /// Builds an R-tree index over `items`.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut index = Self::new();
        index.load(items);
        index
    }
}

impl<T: Placed> Default for SpatialIndex<T, RTree> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Placed, B: Backend> SpatialIndex<T, B> {
    /// Creates an empty index over the given backend.
    #[must_use]
    pub fn with_backend(mut backend: B) -> Self {
        backend.clear();
        Self {
            items: Vec::new(),
            backend,
        }
    }

    /// Replaces the contents with `items`.
    pub fn load(&mut self, items: Vec<T>) {
        let boxes: Vec<Aabb2D> = items.iter().map(Placed::aabb).collect();
        self.backend.load(&boxes);
        self.items = items;
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.items.clear();
        self.backend.clear();
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexed items in load order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Items whose box intersects `[min_x, max_x] x [min_y, max_y]`, in load order.
    #[must_use]
    pub fn query(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<&T> {
        self.query_aabb(Aabb2D::new(min_x, min_y, max_x, max_y))
    }

    /// Items whose box intersects `rect`, in load order.
    #[must_use]
    pub fn query_aabb(&self, rect: Aabb2D) -> Vec<&T> {
        let mut slots = Vec::new();
        self.backend.visit_rect(rect, |slot| slots.push(slot));
        slots.sort_unstable();
        slots.into_iter().map(|slot| &self.items[slot]).collect()
    }

    /// Calls `f` for every item whose box intersects `rect`, in backend order.
    pub fn visit<F: FnMut(&T)>(&self, rect: Aabb2D, mut f: F) {
        self.backend.visit_rect(rect, |slot| f(&self.items[slot]));
    }
}

impl<T: Placed> FromIterator<T> for SpatialIndex<T, RTree> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
