//! Error types for btreecheck.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while inspecting a tree.
///
/// These are precondition violations in the caller's tree construction, not
/// ordering defects. An out-of-order tree is reported as `Ok(false)` (or a
/// [`Violation`](crate::Violation)), never as an `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A first/last key lookup reached a node with no keys and no subtree
    /// to descend into.
    #[error("{operation} called on a node with no keys and no subtree")]
    EmptyNode {
        /// Lookup that hit the empty node (`"first_key"` or `"last_key"`).
        operation: &'static str,
    },

    /// A node without keys still owns a child subtree.
    ///
    /// Such a node has no separator keys, so its children cannot be
    /// placed in the key order at all.
    #[error("node at depth {depth} has children but no keys")]
    EmptyInteriorNode {
        /// Depth of the keyless node (root is 0).
        depth: usize,
    },

    /// The tree is deeper than the validator is allowed to recurse.
    ///
    /// Raised for correctly ordered trees too; the limit bounds recursion,
    /// not ordering.
    #[error("tree depth exceeds the configured limit of {limit} levels")]
    DepthLimitExceeded {
        /// Configured [`ValidatorConfig::max_depth`](crate::ValidatorConfig::max_depth).
        limit: usize,
    },
}
