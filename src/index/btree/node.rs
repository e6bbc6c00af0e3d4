//! B-tree node and tree structures.
//!
//! A [`Node`] owns its keys and its child slots. Child slots are optional:
//! a `None` slot, or a slot past the end of the children vector, simply
//! means "no subtree at this position".
//!
//! # Layout
//! ```text
//!              keys:      [ k0 ][ k1 ]
//!          children:   [c0]  [c1]  [c2]
//!
//!   c0 < k0 < c1 < k1 < c2
//! ```
//! `children[i]` is the left subtree of `keys[i]`; `children[i + 1]` is its
//! right subtree.

use crate::common::{Error, Result};

/// One node of a B-tree of signed integer keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    keys: Vec<i64>,
    children: Vec<Option<Box<Node>>>,
}

impl Node {
    /// Create a node from its keys and (possibly sparse) child slots.
    ///
    /// Nothing is checked here; `children` is expected to hold
    /// `keys.len() + 1` slots but may be shorter or contain `None`s.
    pub fn new(keys: Vec<i64>, children: Vec<Option<Node>>) -> Self {
        Self {
            keys,
            children: children.into_iter().map(|c| c.map(Box::new)).collect(),
        }
    }

    /// Create a leaf with no child slots at all.
    pub fn leaf(keys: Vec<i64>) -> Self {
        Self {
            keys,
            children: Vec::new(),
        }
    }

    /// Create a leaf with `keys.len() + 1` explicitly empty child slots.
    pub fn with_empty_children(keys: Vec<i64>) -> Self {
        let slots = keys.len() + 1;
        Self {
            keys,
            children: vec![None; slots],
        }
    }

    /// Keys of this node, left to right.
    #[inline]
    pub fn keys(&self) -> &[i64] {
        &self.keys
    }

    /// Child slots of this node, left to right.
    #[inline]
    pub fn children(&self) -> &[Option<Box<Node>>] {
        &self.children
    }

    /// True if no child slot holds a subtree.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Subtree at child position `pos`, if any.
    #[inline]
    fn child(&self, pos: usize) -> Option<&Node> {
        self.children.get(pos).and_then(|slot| slot.as_deref())
    }

    /// Left subtree of the key at `index` (child slot `index`).
    ///
    /// Returns `None` for an empty slot or a position past the end of the
    /// children vector.
    pub fn left_subtree(&self, index: usize) -> Option<&Node> {
        self.child(index)
    }

    /// Right subtree of the key at `index` (child slot `index + 1`).
    ///
    /// Bounds-checked like [`left_subtree`](Self::left_subtree), including
    /// `index == usize::MAX`.
    pub fn right_subtree(&self, index: usize) -> Option<&Node> {
        index.checked_add(1).and_then(|pos| self.child(pos))
    }

    /// Leftmost key reachable from this node.
    ///
    /// Follows child slot 0 down for as long as it holds a subtree, then
    /// returns the first key of the node it stops at. For a correctly
    /// ordered subtree this is its minimum.
    ///
    /// # Errors
    /// [`Error::EmptyNode`] if the descent ends at a node with no keys.
    pub fn first_key(&self) -> Result<i64> {
        let mut node = self;
        while let Some(left) = node.child(0) {
            node = left;
        }
        node.keys.first().copied().ok_or(Error::EmptyNode {
            operation: "first_key",
        })
    }

    /// Rightmost key reachable from this node.
    ///
    /// Follows the child slot just past the last key (`keys.len()`) down for
    /// as long as it holds a subtree, then returns the last key of the node
    /// it stops at. For a correctly ordered subtree this is its maximum.
    ///
    /// # Errors
    /// [`Error::EmptyNode`] if the descent ends at a node with no keys.
    pub fn last_key(&self) -> Result<i64> {
        let mut node = self;
        while let Some(right) = node.child(node.keys.len()) {
            node = right;
        }
        node.keys.last().copied().ok_or(Error::EmptyNode {
            operation: "last_key",
        })
    }

    /// Check that this node and everything below it is correctly ordered.
    ///
    /// Shorthand for [`Validator::node_is_valid`](crate::Validator::node_is_valid)
    /// with the default configuration. The validator is discarded afterwards,
    /// so no stats are kept.
    ///
    /// # Errors
    /// [`Error::EmptyNode`], [`Error::EmptyInteriorNode`] for malformed nodes,
    /// and [`Error::DepthLimitExceeded`] for a subtree deeper than
    /// [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels, even if it is
    /// correctly ordered.
    pub fn is_valid(&self) -> Result<bool> {
        crate::Validator::new().node_is_valid(self)
    }
}

/// A B-tree: an optional root node. No root means an empty tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Node>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Create a tree with the given root.
    pub fn with_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// Root node, or `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Check that the whole tree is correctly ordered.
    ///
    /// An empty tree is valid. Uses a throwaway [`Validator`](crate::Validator)
    /// with the default configuration, so no stats are kept; use a long-lived
    /// validator to collect them.
    ///
    /// # Errors
    /// - [`Error::EmptyNode`] / [`Error::EmptyInteriorNode`] if a node has no
    ///   keys where keys are required.
    /// - [`Error::DepthLimitExceeded`] if the tree is deeper than
    ///   [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels. A correctly
    ///   ordered tree that deep is still reported as an error.
    ///
    /// # Example
    /// ```
    /// use btreecheck::{Node, Tree};
    ///
    /// let tree = Tree::with_root(Node::new(
    ///     vec![13],
    ///     vec![Some(Node::leaf(vec![4, 7])), Some(Node::leaf(vec![17, 24]))],
    /// ));
    /// assert!(tree.is_valid().unwrap());
    /// ```
    pub fn is_valid(&self) -> Result<bool> {
        crate::Validator::new().is_valid(self)
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::with_root(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level() -> Node {
        Node::new(
            vec![13],
            vec![Some(Node::leaf(vec![4, 7])), Some(Node::leaf(vec![17, 24]))],
        )
    }

    #[test]
    fn test_with_empty_children_slots() {
        let node = Node::with_empty_children(vec![1, 3]);
        assert_eq!(node.children().len(), 3);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_subtree_lookup() {
        let node = two_level();
        assert_eq!(node.left_subtree(0).map(Node::keys), Some(&[4, 7][..]));
        assert_eq!(node.right_subtree(0).map(Node::keys), Some(&[17, 24][..]));
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_subtree_lookup_out_of_range_is_absent() {
        let node = Node::new(vec![1, 2, 3], vec![Some(Node::leaf(vec![0]))]);
        assert!(node.left_subtree(1).is_none());
        assert!(node.left_subtree(99).is_none());
        assert!(node.right_subtree(2).is_none());
        assert!(node.right_subtree(usize::MAX - 1).is_none());
    }

    #[test]
    fn test_right_subtree_at_max_index_is_absent() {
        // Slot 0 holds a subtree; the lookup must not wrap around to it.
        let node = Node::new(vec![10], vec![Some(Node::leaf(vec![1])), None]);
        assert!(node.right_subtree(usize::MAX).is_none());
        assert!(node.left_subtree(usize::MAX).is_none());
    }

    #[test]
    fn test_sparse_slot_is_absent() {
        let node = Node::new(vec![5, 9], vec![None, Some(Node::leaf(vec![7])), None]);
        assert!(node.left_subtree(0).is_none());
        assert_eq!(node.left_subtree(1).map(Node::keys), Some(&[7][..]));
        assert!(node.right_subtree(1).is_none());
    }

    #[test]
    fn test_first_and_last_key_leaf() {
        let node = Node::leaf(vec![2, 5, 8]);
        assert_eq!(node.first_key(), Ok(2));
        assert_eq!(node.last_key(), Ok(8));
    }

    #[test]
    fn test_first_and_last_key_descend() {
        let node = two_level();
        assert_eq!(node.first_key(), Ok(4));
        assert_eq!(node.last_key(), Ok(24));
    }

    #[test]
    fn test_last_key_uses_slot_past_last_key() {
        // Slot 1 is the right subtree of key 10; slot 2 does not exist.
        let node = Node::new(
            vec![10],
            vec![Some(Node::leaf(vec![1])), Some(Node::leaf(vec![20, 30]))],
        );
        assert_eq!(node.last_key(), Ok(30));

        let short = Node::new(vec![10], vec![Some(Node::leaf(vec![1]))]);
        assert_eq!(short.last_key(), Ok(10));
    }

    #[test]
    fn test_empty_node_lookups_fail() {
        let node = Node::leaf(vec![]);
        assert_eq!(
            node.first_key(),
            Err(Error::EmptyNode {
                operation: "first_key"
            })
        );
        assert_eq!(
            node.last_key(),
            Err(Error::EmptyNode {
                operation: "last_key"
            })
        );
    }

    #[test]
    fn test_empty_node_below_keyed_node_fails() {
        let node = Node::new(vec![5], vec![Some(Node::leaf(vec![]))]);
        assert!(matches!(node.first_key(), Err(Error::EmptyNode { .. })));
        assert_eq!(node.last_key(), Ok(5));
    }

    #[test]
    fn test_node_is_valid_on_detached_subtrees() {
        assert_eq!(two_level().is_valid(), Ok(true));
        assert_eq!(Node::leaf(vec![3, 1]).is_valid(), Ok(false));
        assert_eq!(
            Node::new(vec![], vec![Some(Node::leaf(vec![1]))]).is_valid(),
            Err(Error::EmptyInteriorNode { depth: 0 })
        );
    }

    #[test]
    fn test_tree_empty_and_from() {
        assert!(Tree::new().is_empty());
        assert!(Tree::new().root().is_none());

        let tree: Tree = two_level().into();
        assert!(!tree.is_empty());
        assert_eq!(tree.root().map(Node::keys), Some(&[13][..]));
    }
}
