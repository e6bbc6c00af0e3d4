//! Index structures.
//!
//! - [`btree`] - B-tree nodes and sort-order validation

pub mod btree;
