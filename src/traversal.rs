//! Lazy iterators over the keys of a [`Tree`].
//!
//! Each iterator borrows the tree and keeps its own stack (or queue) of pending nodes instead
//! of recursing, so a traversal can be paused or cloned halfway through. Asking the
//! tree for a new iterator starts the traversal over.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// In-order traversal: left subtree, node, right subtree. Created by [`Tree::in_order`].
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    /// Nodes whose left subtrees are being visited, innermost last.
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Some(node) = tree.root() {
            self.stack.push(node);
            tree = node.left();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl FusedIterator for InOrder<'_> {}

/// Pre-order traversal: node, left subtree, right subtree. Created by [`Tree::pre_order`].
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        // Right goes on first so that left comes off first.
        self.stack.extend(node.right().root());
        self.stack.extend(node.left().root());
        Some(node.key())
    }
}

impl FusedIterator for PreOrder<'_> {}

/// Post-order traversal: left subtree, right subtree, node. Created by [`Tree::post_order`].
#[derive(Debug, Clone)]
pub struct PostOrder<'a> {
    /// Pending nodes, each flagged with whether its children have been pushed yet.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl Iterator for PostOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().root().map(|right| (right, false)));
            self.stack.extend(node.left().root().map(|left| (left, false)));
        }
    }
}

impl FusedIterator for PostOrder<'_> {}

/// Level-order traversal over a growable queue. Created by [`Tree::breadth_first`].
#[derive(Debug, Clone)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl Iterator for LevelOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left().root());
        self.queue.extend(node.right().root());
        Some(node.key())
    }
}

impl FusedIterator for LevelOrder<'_> {}
