//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over unique elements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the longest path from the
//! root `Node` to a leaf `Node`). [`OrderedBinaryTree`] never rebalances, so inserting
//! already-sorted elements produces a tree whose height equals its length. Visiting the left
//! subtree, then the subtree root, then the right subtree yields the elements in sorted order.
//!
//! ## Removal
//!
//! Deleting a `Node` depends on its children:
//!
//! - a leaf is unlinked from its parent,
//! - a `Node` with one child is replaced by that child,
//! - a `Node` with two children takes the element of its in-order successor (the leftmost `Node`
//!   of its right subtree) and that successor is unlinked instead.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedBinaryTree, Traversal};
//!
//! let mut tree = OrderedBinaryTree::new(10);
//! for x in [5, 20, 9, 8, 2, 18, 21, 22] {
//!     tree.insert(x).unwrap();
//! }
//!
//! tree.remove(&20).unwrap();
//!
//! assert_eq!(
//!     tree.traverse(Traversal::LevelOrder).unwrap(),
//!     vec![&10, &5, &21, &2, &9, &18, &22, &8]
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traversal;
pub mod tree;
mod util;


pub use error::TreeError;
pub use traversal::Traversal;
pub use tree::OrderedBinaryTree;
