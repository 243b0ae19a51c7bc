// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static R-tree built with Sort-Tile-Recursive (STR) bulk loading.
//!
//! Nodes live in one arena. Each level is packed from the level below: entries
//! are sorted by center x, cut into vertical strips, each strip sorted by
//! center y and chunked into nodes of at most `node_capacity` children.
//! Siblings are therefore contiguous, and a node only stores the range of its
//! children.

use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;
use tracing::debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Default maximum number of children per node.
pub const DEFAULT_NODE_CAPACITY: usize = 16;

#[derive(Clone, Debug)]
struct Node {
    bbox: Aabb2D,
    /// Indices into `slots` for leaves, into `nodes` for inner nodes.
    children: Range<usize>,
    leaf: bool,
}

/// Bulk-loaded R-tree backend.
#[derive(Clone)]
pub struct RTree {
    node_capacity: usize,
    nodes: Vec<Node>,
    /// Slot ids in leaf order.
    slots: Vec<usize>,
    /// Box of every slot, indexed by slot id.
    boxes: Vec<Aabb2D>,
    root: Option<usize>,
}

impl Default for RTree {
    fn default() -> Self {
        Self::with_node_capacity(DEFAULT_NODE_CAPACITY)
    }
}

impl Debug for RTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("len", &self.boxes.len())
            .field("nodes", &self.nodes.len())
            .field("height", &self.height())
            .field("node_capacity", &self.node_capacity)
            .finish_non_exhaustive()
    }
}

impl RTree {
    /// Creates an empty tree whose nodes hold at most `node_capacity` children.
    ///
    /// Capacities below 2 are raised to 2.
    #[must_use]
    pub fn with_node_capacity(node_capacity: usize) -> Self {
        Self {
            node_capacity: node_capacity.max(2),
            nodes: Vec::new(),
            slots: Vec::new(),
            boxes: Vec::new(),
            root: None,
        }
    }

    /// Maximum number of children per node.
    #[must_use]
    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Number of levels, counting the leaf level. Zero when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let Some(mut idx) = self.root else {
            return 0;
        };
        let mut height = 1;
        while !self.nodes[idx].leaf {
            idx = self.nodes[idx].children.start;
            height += 1;
        }
        height
    }

    /// Bounding box of everything indexed.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2D> {
        self.root.map(|r| self.nodes[r].bbox)
    }
}

impl Backend for RTree {
    fn load(&mut self, boxes: &[Aabb2D]) {
        self.clear();
        if boxes.is_empty() {
            return;
        }
        self.boxes.extend_from_slice(boxes);
        let cap = self.node_capacity;

        let mut order: Vec<usize> = (0..boxes.len()).collect();
        str_sort(&mut order, cap, |&i| boxes[i].center());
        self.slots = order;

        let mut level: Vec<Node> = (0..self.slots.len())
            .step_by(cap)
            .map(|start| {
                let end = (start + cap).min(self.slots.len());
                Node {
                    bbox: union_all(self.slots[start..end].iter().map(|&s| &boxes[s])),
                    children: start..end,
                    leaf: true,
                }
            })
            .collect();

        while level.len() > 1 {
            str_sort(&mut level, cap, |n| n.bbox.center());
            let base = self.nodes.len();
            self.nodes.append(&mut level);
            let end_of_level = self.nodes.len();
            level = (base..end_of_level)
                .step_by(cap)
                .map(|start| {
                    let end = (start + cap).min(end_of_level);
                    Node {
                        bbox: union_all(self.nodes[start..end].iter().map(|n| &n.bbox)),
                        children: start..end,
                        leaf: false,
                    }
                })
                .collect();
        }

        self.root = Some(self.nodes.len());
        self.nodes.append(&mut level);
        debug!(
            items = self.boxes.len(),
            nodes = self.nodes.len(),
            height = self.height(),
            "rtree: bulk loaded"
        );
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.slots.clear();
        self.boxes.clear();
        self.root = None;
    }

    fn len(&self) -> usize {
        self.boxes.len()
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D, mut f: F) {
        let Some(root) = self.root else {
            return;
        };
        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        stack.push(root);
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bbox.intersects(&rect) {
                continue;
            }
            if node.leaf {
                for &slot in &self.slots[node.children.clone()] {
                    if self.boxes[slot].intersects(&rect) {
                        f(slot);
                    }
                }
            } else {
                stack.extend(node.children.clone());
            }
        }
    }
}

/// Orders `items` into STR tiles of `cap` entries, keyed by `center`.
fn str_sort<T>(items: &mut [T], cap: usize, center: impl Fn(&T) -> (f64, f64)) {
    let leaf_count = items.len().div_ceil(cap);
    let strip_len = strip_count(leaf_count) * cap;

    items.sort_by(|a, b| center(a).0.total_cmp(&center(b).0));
    for strip in items.chunks_mut(strip_len) {
        strip.sort_by(|a, b| center(a).1.total_cmp(&center(b).1));
    }
}

/// Number of vertical strips for `leaf_count` leaves: `ceil(sqrt(n))`, at least one.
fn strip_count(leaf_count: usize) -> usize {
    let root = leaf_count.isqrt();
    let strips = if root * root < leaf_count { root + 1 } else { root };
    strips.max(1)
}

fn union_all<'a>(mut boxes: impl Iterator<Item = &'a Aabb2D>) -> Aabb2D {
    let Some(first) = boxes.next() else {
        return Aabb2D::new(0.0, 0.0, 0.0, 0.0);
    };
    boxes.fold(*first, |acc, b| acc.union(b))
}
