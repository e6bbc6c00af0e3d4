//! Recursive sort-order validation of a B-tree.
//!
//! The scan walks each node's keys left to right. For key `i` it first
//! validates the left subtree (child slot `i`) and checks its key range
//! against `keys[i - 1]` and `keys[i]`; when there is no left subtree it
//! compares `keys[i]` directly against `keys[i - 1]`. After the last key
//! the right subtree (slot `keys.len()`) is validated and checked against
//! the last key. The first violation ends the scan.

use std::fmt;
use std::sync::atomic::Ordering;

use tracing::{debug, trace};

use super::node::{Node, Tree};
use super::stats::ValidationStats;
use crate::common::{Error, Result, ValidatorConfig};

/// The first ordering defect found in a tree.
///
/// `depth` is the depth of the node whose key was being checked (root is 0)
/// and `index` is the position of that key within the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// `key` is not strictly greater than the key before it and there is no
    /// left subtree between them.
    KeysOutOfOrder {
        /// Depth of the node holding the keys.
        depth: usize,
        /// Index of `key` within the node.
        index: usize,
        /// Key at `index - 1`.
        previous: i64,
        /// Key at `index`.
        key: i64,
    },

    /// The largest key of the left subtree is not strictly less than `key`.
    LeftSubtreeTooLarge {
        /// Depth of the node holding `key`.
        depth: usize,
        /// Index of `key` within the node.
        index: usize,
        /// Key the subtree must stay below.
        key: i64,
        /// Last key of the left subtree.
        subtree_last: i64,
    },

    /// The smallest key of the left subtree is not strictly greater than the
    /// previous key in the node.
    LeftSubtreeTooSmall {
        /// Depth of the node holding the keys.
        depth: usize,
        /// Index of the key whose left subtree this is.
        index: usize,
        /// Key at `index - 1`, which the subtree must stay above.
        previous: i64,
        /// First key of the left subtree.
        subtree_first: i64,
    },

    /// The smallest key of the right subtree is not strictly greater than
    /// the node's last key.
    RightSubtreeTooSmall {
        /// Depth of the node holding `key`.
        depth: usize,
        /// Index of the node's last key.
        index: usize,
        /// Last key of the node, which the subtree must stay above.
        key: i64,
        /// First key of the right subtree.
        subtree_first: i64,
    },
}

impl Violation {
    /// Depth of the node holding the offending key.
    pub fn depth(&self) -> usize {
        match *self {
            Violation::KeysOutOfOrder { depth, .. }
            | Violation::LeftSubtreeTooLarge { depth, .. }
            | Violation::LeftSubtreeTooSmall { depth, .. }
            | Violation::RightSubtreeTooSmall { depth, .. } => depth,
        }
    }

    /// Index of the offending key within its node.
    pub fn index(&self) -> usize {
        match *self {
            Violation::KeysOutOfOrder { index, .. }
            | Violation::LeftSubtreeTooLarge { index, .. }
            | Violation::LeftSubtreeTooSmall { index, .. }
            | Violation::RightSubtreeTooSmall { index, .. } => index,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Violation::KeysOutOfOrder { .. } => "keys_out_of_order",
            Violation::LeftSubtreeTooLarge { .. } => "left_subtree_too_large",
            Violation::LeftSubtreeTooSmall { .. } => "left_subtree_too_small",
            Violation::RightSubtreeTooSmall { .. } => "right_subtree_too_small",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::KeysOutOfOrder {
                depth,
                index,
                previous,
                key,
            } => write!(
                f,
                "key {} at index {} (depth {}) does not follow key {}",
                key, index, depth, previous
            ),
            Violation::LeftSubtreeTooLarge {
                depth,
                index,
                key,
                subtree_last,
            } => write!(
                f,
                "left subtree of key {} at index {} (depth {}) ends at {}",
                key, index, depth, subtree_last
            ),
            Violation::LeftSubtreeTooSmall {
                depth,
                index,
                previous,
                subtree_first,
            } => write!(
                f,
                "left subtree at index {} (depth {}) starts at {}, not after key {}",
                index, depth, subtree_first, previous
            ),
            Violation::RightSubtreeTooSmall {
                depth,
                index,
                key,
                subtree_first,
            } => write!(
                f,
                "right subtree of key {} at index {} (depth {}) starts at {}",
                key, index, depth, subtree_first
            ),
        }
    }
}

/// Checks B-tree sort invariants.
///
/// A validator is read-only with respect to the trees it checks; the only
/// state it mutates is its [`ValidationStats`].
///
/// # Example
/// ```
/// use btreecheck::{Node, Tree, Validator, Violation};
///
/// let validator = Validator::new();
///
/// let tree = Tree::with_root(Node::with_empty_children(vec![3, 1]));
/// assert!(!validator.is_valid(&tree).unwrap());
/// assert!(matches!(
///     validator.check(&tree).unwrap(),
///     Some(Violation::KeysOutOfOrder { previous: 3, key: 1, .. })
/// ));
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
    stats: ValidationStats,
}

impl Validator {
    /// Create a validator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            stats: ValidationStats::new(),
        }
    }

    /// Configuration this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Counters accumulated over every check run by this validator.
    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// True if the tree is correctly ordered. An empty tree is valid.
    ///
    /// # Errors
    /// Precondition violations in the tree's construction (see [`Error`]),
    /// and [`Error::DepthLimitExceeded`] for a tree deeper than the
    /// configured limit, even if it is correctly ordered.
    pub fn is_valid(&self, tree: &Tree) -> Result<bool> {
        Ok(self.check(tree)?.is_none())
    }

    /// Return the first violation in scan order, or `None` if the tree is
    /// correctly ordered.
    pub fn check(&self, tree: &Tree) -> Result<Option<Violation>> {
        self.run(tree.root())
    }

    /// True if `node` and all of its subtrees are correctly ordered.
    ///
    /// `node` is treated as a root at depth 0 and counts as one checked tree.
    pub fn node_is_valid(&self, node: &Node) -> Result<bool> {
        Ok(self.run(Some(node))?.is_none())
    }

    fn run(&self, root: Option<&Node>) -> Result<Option<Violation>> {
        self.stats.trees_checked.fetch_add(1, Ordering::Relaxed);

        let verdict = match root {
            Some(node) => self.check_node(node, 0)?,
            None => None,
        };

        if let Some(violation) = &verdict {
            self.stats.violations_found.fetch_add(1, Ordering::Relaxed);
            debug!(
                kind = violation.kind(),
                depth = violation.depth(),
                index = violation.index(),
                %violation,
                "b-tree order violation"
            );
        }
        debug!(valid = verdict.is_none(), empty = root.is_none(), "b-tree validated");
        Ok(verdict)
    }

    fn check_node(&self, node: &Node, depth: usize) -> Result<Option<Violation>> {
        let limit = self.config.max_depth();
        if depth >= limit {
            return Err(Error::DepthLimitExceeded { limit });
        }
        self.stats.nodes_visited.fetch_add(1, Ordering::Relaxed);

        let keys = node.keys();
        trace!(depth, keys = keys.len(), "checking node");

        if keys.is_empty() && !node.is_leaf() {
            return Err(Error::EmptyInteriorNode { depth });
        }

        for (index, &key) in keys.iter().enumerate() {
            let previous = index.checked_sub(1).map(|p| keys[p]);

            match (node.left_subtree(index), previous) {
                (Some(left), _) => {
                    if let Some(violation) = self.check_node(left, depth + 1)? {
                        return Ok(Some(violation));
                    }

                    let subtree_last = left.last_key()?;
                    self.compared();
                    if subtree_last >= key {
                        return Ok(Some(Violation::LeftSubtreeTooLarge {
                            depth,
                            index,
                            key,
                            subtree_last,
                        }));
                    }

                    if let Some(previous) = previous {
                        let subtree_first = left.first_key()?;
                        self.compared();
                        if subtree_first <= previous {
                            return Ok(Some(Violation::LeftSubtreeTooSmall {
                                depth,
                                index,
                                previous,
                                subtree_first,
                            }));
                        }
                    }
                }
                (None, Some(previous)) => {
                    self.compared();
                    if key <= previous {
                        return Ok(Some(Violation::KeysOutOfOrder {
                            depth,
                            index,
                            previous,
                            key,
                        }));
                    }
                }
                (None, None) => {}
            }

            if index + 1 == keys.len() {
                if let Some(right) = node.right_subtree(index) {
                    if let Some(violation) = self.check_node(right, depth + 1)? {
                        return Ok(Some(violation));
                    }

                    let subtree_first = right.first_key()?;
                    self.compared();
                    if subtree_first <= key {
                        return Ok(Some(Violation::RightSubtreeTooSmall {
                            depth,
                            index,
                            key,
                            subtree_first,
                        }));
                    }
                }
            }
        }

        Ok(None)
    }

    #[inline]
    fn compared(&self) {
        self.stats.keys_compared.fetch_add(1, Ordering::Relaxed);
    }
}
