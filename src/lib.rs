//! btreecheck - Sort-order validation for B-trees of integer keys.
//!
//! A tree is correctly ordered when, in every node, keys strictly increase
//! left to right, every key of a key's left subtree is strictly smaller than
//! it and every key of its right subtree is strictly greater.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      btreecheck                       │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │            Index Layer (index/btree/)           │  │
//! │  │   Validator ──checks──▶ Tree ──owns──▶ Node     │  │
//! │  │        │                                        │  │
//! │  │        └── ValidationStats, Violation           │  │
//! │  └─────────────────────────────────────────────────┘  │
//! │                          ↓                            │
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │               Common (common/)                  │  │
//! │  │          Error + Result, ValidatorConfig        │  │
//! │  └─────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`index`] - B-tree structure and validator
//!
//! # Quick Start
//! ```
//! use btreecheck::{Node, Tree};
//!
//! // An empty tree is trivially ordered.
//! assert!(Tree::new().is_valid().unwrap());
//!
//! // Root [13] with leaves [4, 7] and [17, 24].
//! let tree = Tree::with_root(Node::new(
//!     vec![13],
//!     vec![
//!         Some(Node::with_empty_children(vec![4, 7])),
//!         Some(Node::with_empty_children(vec![17, 24])),
//!     ],
//! ));
//! assert!(tree.is_valid().unwrap());
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_MAX_DEPTH;
pub use common::{Error, Result, ValidatorConfig};

pub use index::btree::{Node, StatsSnapshot, Tree, ValidationStats, Validator, Violation};
