//! This crate provides an unbalanced Binary Search Tree (BST) of integer keys, mostly for
//! educational purposes, along with the fixed-capacity queue it uses for level-order
//! traversal.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! key and has up to two child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than or
//!    equal to its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does nothing to keep its height down,
//! so inserting keys in sorted order produces a chain with a height of `N - 1`.
//! [`Tree::is_balanced`] reports whether that has happened. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Traversals
//!
//! Besides sorted (in-order) iteration, [`Tree`] can be walked in pre-order, post-order, and
//! level-order. The level-order walk comes in two flavors: [`Tree::breadth_first`] is an
//! iterator over a growable queue, and [`Tree::level_order`] runs through a [`BoundedQueue`]
//! of caller-chosen capacity and reports [`Error::CapacityExceeded`] when the tree is too wide
//! for it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod queue;
pub mod traversal;
pub mod tree;

pub use error::{Error, Result, Structure};
pub use queue::BoundedQueue;
pub use tree::{Node, Tree};
