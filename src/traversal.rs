//! Borrowing iterators over an [`OrderedBinaryTree`](crate::OrderedBinaryTree) in the four
//! classic visitation orders.
//!
//! None of these recurse: an unbalanced tree can be as deep as it is long, so each iterator keeps
//! its own stack (or queue) of pending nodes instead. Creating a new iterator restarts the walk.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::TreeError;
use crate::tree::Node;

/// Selects one of the four visitation orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, node, right subtree.
    Inorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth first, one level at a time.
    LevelOrder,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preorder => "pre",
            Self::Inorder => "in",
            Self::Postorder => "post",
            Self::LevelOrder => "level",
        };
        f.write_str(name)
    }
}

impl FromStr for Traversal {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(Self::Preorder),
            "in" | "inorder" => Ok(Self::Inorder),
            "post" | "postorder" => Ok(Self::Postorder),
            "level" | "levelorder" => Ok(Self::LevelOrder),
            _ => Err(TreeError::UnknownTraversal(s.to_string())),
        }
    }
}

/// Iterator returned by [`OrderedBinaryTree::preorder`](crate::OrderedBinaryTree::preorder).
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that left comes off first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.element)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// Iterator returned by [`OrderedBinaryTree::inorder`](crate::OrderedBinaryTree::inorder).
pub struct Inorder<'a, T> {
    /// The path of nodes whose left subtree is being (or has been) visited but which haven't
    /// been yielded themselves.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.element)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// Iterator returned by [`OrderedBinaryTree::postorder`](crate::OrderedBinaryTree::postorder).
pub struct Postorder<'a, T> {
    /// Pending nodes, each flagged with whether its children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.element);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

/// Iterator returned by
/// [`OrderedBinaryTree::level_order`](crate::OrderedBinaryTree::level_order).
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.element)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
