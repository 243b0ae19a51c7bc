// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridnav_index --heading-base-level=0

//! Gridnav Index: a bulk-loaded 2D AABB index for viewport culling.
//!
//! Renderers typically hold many positioned items (markers, sprites, labels)
//! but only draw the few that fall inside the camera view. [`SpatialIndex`]
//! answers "which items touch this rectangle" in sub-linear time:
//!
//! - [`SpatialIndex::load`] replaces the contents wholesale. Each item's box is
//!   its center ± size/2 (size defaults to 0).
//! - [`SpatialIndex::query`] returns items whose box intersects the query
//!   rectangle, edges inclusive.
//! - [`SpatialIndex::clear`] empties it.
//!
//! Backends are pluggable through [`Backend`]: [`backends::RTree`] (default,
//! STR bulk loading) and [`backends::FlatVec`] (linear scan, handy as a
//! reference and for very small sets).
//!
//! ```rust
//! use gridnav_index::{SpatialIndex, SpatialItem};
//!
//! let index = SpatialIndex::from_vec(vec![
//!     SpatialItem::new(2.0, 2.0, None, "well"),
//!     SpatialItem::new(40.0, 8.0, Some(4.0), "tower"),
//! ]);
//!
//! // A visible rectangle from the camera, in world units.
//! let visible = index.query(0.0, 0.0, 38.0, 10.0);
//! let names: Vec<_> = visible.iter().map(|item| item.data).collect();
//! assert_eq!(names, ["well", "tower"]);
//! ```
//!
//! The index has no camera, gesture or animation coupling.

mod backend;
pub mod backends;
mod index;
mod types;

pub use backend::Backend;
pub use index::{Placed, SpatialIndex, SpatialItem};
pub use types::Aabb2D;
