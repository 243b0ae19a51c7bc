// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations.

mod flatvec;
mod rtree;

pub use flatvec::FlatVec;
pub use rtree::{DEFAULT_NODE_CAPACITY, RTree};
