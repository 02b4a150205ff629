//! An unbalanced Binary Search Tree of `i32` keys.
//!
//! Every `Node` owns its two subtrees outright, so the tree is a plain recursive value: it is
//! dropped with its root and cloned by cloning the root. Duplicate keys are allowed and are
//! always routed into the left subtree.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 5, 500, -500, 20, -600] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.maximum(), Ok(500));
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.size(), 6);
//! assert!(!tree.is_balanced());
//! assert!(tree.is_valid_bst());
//!
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [-600, -500, 5, 10, 20, 500]);
//! assert_eq!(tree.level_order(20), Ok(vec![10, 5, 500, -500, 20, -600]));
//! ```

use std::iter::FromIterator;
use std::mem;

use crate::error::{Error, Result, Structure};
use crate::queue::BoundedQueue;
use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};

/// A binary tree of `i32` keys. Trees built with [`Tree::insert`] are Binary Search Trees:
/// every key in a node's left subtree is less than or equal to the node's key and every key in
/// its right subtree is greater.
///
/// Trees assembled by hand with [`Tree::branch`] need not be ordered at all, which is what
/// [`Tree::is_valid_bst`] is for. All of the metrics and traversals work on any shape.
///
/// Nothing keeps the tree short, so a tree can be as deep as it is large. Operations walk the
/// tree with loops instead of recursion; only the derived `Clone`, `Debug` and `PartialEq`
/// impls recurse once per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// The empty tree, also found at the bottom of every subtree.
    Leaf,
    /// A [`Node`] and, through it, its two subtrees.
    Node(Box<Node>),
}

/// A key and the two subtrees hanging off of it. Either subtree may be a
/// [`Leaf`](Tree::Leaf).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: i32,
    left: Tree,
    right: Tree,
}

impl Node {
    fn new(key: i32) -> Self {
        Self {
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The subtree holding keys that sort at or before this node's key.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding keys that sort after this node's key.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    fn minimum(&self) -> i32 {
        let mut node = self;
        while let Some(left) = node.left.root() {
            node = left;
        }
        node.key
    }

    fn maximum(&self) -> i32 {
        let mut node = self;
        while let Some(right) = node.right.root() {
            node = right;
        }
        node.key
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Builds a tree whose root holds `key` with the given subtrees. No ordering is enforced
    /// between `key` and the keys of `left` and `right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// // 3 is in the left subtree of 2, so this isn't a search tree.
    /// let tree = Tree::branch(2, Tree::branch(3, Tree::Leaf, Tree::Leaf), Tree::Leaf);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert!(!tree.is_valid_bst());
    /// ```
    pub fn branch(key: i32, left: Tree, right: Tree) -> Self {
        Self::Node(Box::new(Node { key, left, right }))
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.as_ref()),
        }
    }

    /// Inserts `key` into the tree. Keys less than or equal to a node's key go into its left
    /// subtree, greater keys go right, so inserting a key that is already present adds
    /// another node rather than replacing the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.root().map(|n| n.left().is_empty()), Some(false));
    /// ```
    pub fn insert(&mut self, key: i32) {
        let mut slot = self;
        while let Self::Node(n) = slot {
            slot = if key <= n.key { &mut n.left } else { &mut n.right };
        }
        *slot = Self::Node(Box::new(Node::new(key)));
    }

    /// Returns `true` if some node holds `key`.
    pub fn contains(&self, key: i32) -> bool {
        let mut tree = self;
        while let Some(n) = tree.root() {
            if key == n.key {
                return true;
            }
            tree = if key < n.key { &n.left } else { &n.right };
        }
        false
    }

    /// The smallest key, found by following left children from the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree has no nodes.
    pub fn minimum(&self) -> Result<i32> {
        self.root()
            .map(Node::minimum)
            .ok_or(Error::EmptyStructure(Structure::Tree))
    }

    /// The largest key, found by following right children from the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Error, Structure, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.maximum(), Err(Error::EmptyStructure(Structure::Tree)));
    ///
    /// // -1 is an ordinary key.
    /// tree.insert(-1);
    /// assert_eq!(tree.maximum(), Ok(-1));
    /// ```
    pub fn maximum(&self) -> Result<i32> {
        self.root()
            .map(Node::maximum)
            .ok_or(Error::EmptyStructure(Structure::Tree))
    }

    /// The number of edges on the longest path from the root down to a leaf node. A tree with
    /// a single node has height 0 and the empty tree has height -1.
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut stack: Vec<(&Node, isize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.root().map(|left| (left, depth + 1)));
            stack.extend(node.right.root().map(|right| (right, depth + 1)));
        }
        height
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.in_order().count()
    }

    /// Returns `true` if, at every node, the heights of the two subtrees differ by at most one.
    /// The empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The height of this tree if it is balanced. Subtrees are visited in post-order so each
    /// node's height is computed once from the heights of its children.
    fn balanced_height(&self) -> Option<isize> {
        // Each entry is flagged with whether its children have been pushed yet.
        let mut pending = vec![(self, false)];
        let mut heights: Vec<isize> = Vec::new();

        while let Some((tree, expanded)) = pending.pop() {
            match tree {
                Self::Leaf => heights.push(-1),
                Self::Node(n) if !expanded => {
                    pending.push((tree, true));
                    pending.push((&n.right, false));
                    pending.push((&n.left, false));
                }
                Self::Node(_) => {
                    let right = heights.pop()?;
                    let left = heights.pop()?;
                    if (left - right).abs() > 1 {
                        return None;
                    }
                    heights.push(1 + left.max(right));
                }
            }
        }

        heights.pop()
    }

    /// Returns `true` if every node's key is greater than or equal to all of the keys in its
    /// left subtree and less than all of the keys in its right subtree.
    ///
    /// Each node is checked against the bounds set by all of its ancestors, not just its
    /// parent:
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// //     10
    /// //    /
    /// //   5
    /// //    \
    /// //     12    <- greater than its parent but also greater than 10
    /// let tree = Tree::branch(
    ///     10,
    ///     Tree::branch(5, Tree::Leaf, Tree::branch(12, Tree::Leaf, Tree::Leaf)),
    ///     Tree::Leaf,
    /// );
    ///
    /// assert!(!tree.is_valid_bst());
    /// ```
    pub fn is_valid_bst(&self) -> bool {
        // Nodes still to check, with the `(lower, upper]` range set by their ancestors. `None`
        // leaves that side open.
        let mut pending: Vec<(&Node, Option<i32>, Option<i32>)> =
            self.root().map(|root| (root, None, None)).into_iter().collect();

        while let Some((n, lower, upper)) = pending.pop() {
            let above_lower = lower.map_or(true, |lower| n.key > lower);
            let within_upper = upper.map_or(true, |upper| n.key <= upper);
            if !(above_lower && within_upper) {
                return false;
            }
            pending.extend(n.left.root().map(|left| (left, lower, Some(n.key))));
            pending.extend(n.right.root().map(|right| (right, Some(n.key), upper)));
        }

        true
    }

    /// Visits keys in sorted order: left subtree, node, right subtree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Visits each node before either of its subtrees, left subtree first.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Visits each node after both of its subtrees, left subtree first.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self)
    }

    /// Visits keys one level at a time from the root down, left to right within a level. The
    /// pending nodes are kept in a growable buffer, so this never fails. See
    /// [`Tree::level_order`] for a version with a fixed memory bound.
    pub fn breadth_first(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }

    /// Collects keys in level order, sequencing nodes through a [`BoundedQueue`] of the given
    /// capacity.
    ///
    /// A node is only removed from the queue after both of its children have been added, so
    /// the capacity has to cover the widest level of the tree plus the node being expanded.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the queue fills up. No partial output is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Error, Tree};
    ///
    /// let tree: Tree = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();
    ///
    /// assert_eq!(tree.level_order(20), Ok(vec![4, 2, 6, 1, 3, 5, 7]));
    /// assert_eq!(tree.level_order(3), Err(Error::CapacityExceeded { capacity: 3 }));
    /// ```
    pub fn level_order(&self, capacity: usize) -> Result<Vec<i32>> {
        let mut keys = Vec::new();
        let root = match self.root() {
            Some(root) => root,
            None => return Ok(keys),
        };

        let mut queue = BoundedQueue::with_capacity(capacity);
        queue.enqueue(root)?;
        while let Ok(&node) = queue.front() {
            keys.push(node.key);
            for child in [&node.left, &node.right] {
                if let Some(child) = child.root() {
                    queue.enqueue(child)?;
                }
            }
            queue.dequeue()?;
        }

        Ok(keys)
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Detach subtrees before they are dropped so that dropping a node never reaches more
        // than one level down.
        fn detach_children(n: &mut Node, pending: &mut Vec<Tree>) {
            for child in [&mut n.left, &mut n.right] {
                if !child.is_empty() {
                    pending.push(mem::take(child));
                }
            }
        }

        let mut pending = Vec::new();
        if let Self::Node(n) = self {
            detach_children(n, &mut pending);
        }
        while let Some(mut tree) = pending.pop() {
            if let Self::Node(n) = &mut tree {
                detach_children(n, &mut pending);
            }
        }
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
