//! Errors surfaced by [`OrderedBinaryTree`](crate::OrderedBinaryTree).
//!
//! Every fallible operation checks its precondition before touching the tree, so an `Err`
//! always means the tree is exactly as it was before the call.

use thiserror::Error;

/// Everything that can go wrong when operating on an
/// [`OrderedBinaryTree`](crate::OrderedBinaryTree).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An equal element is already stored. Duplicates are never inserted.
    #[error("element already exists in the tree")]
    DuplicateKey,

    /// The element to remove is not stored in the tree.
    #[error("no such element in the tree")]
    NotFound,

    /// A traversal that needs a root was asked of a tree with no elements.
    #[error("tree is empty")]
    EmptyTree,

    /// A traversal name that isn't one of `pre`, `in`, `post` or `level`.
    #[error("unknown traversal order: {0}")]
    UnknownTraversal(String),
}
