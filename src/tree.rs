//! A mutable, unbalanced Binary Search Tree of unique elements.
//!
//! Every child is owned by the slot in its parent that points at it and there are no parent
//! pointers. Anything that needs a node's parent (removal, mostly) walks down from the root and
//! hands back the `&mut` slot holding the node instead.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedBinaryTree, TreeError};
//!
//! let mut tree = OrderedBinaryTree::new(10);
//! tree.insert(5).unwrap();
//! tree.insert(20).unwrap();
//!
//! // Duplicates are rejected.
//! assert_eq!(tree.insert(5), Err(TreeError::DuplicateKey));
//!
//! assert!(tree.contains(&20));
//! tree.remove(&20).unwrap();
//! assert!(!tree.contains(&20));
//!
//! // Removing something that isn't there is an error too.
//! assert_eq!(tree.remove(&20), Err(TreeError::NotFound));
//!
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![&5, &10]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::traversal::{Inorder, LevelOrder, Postorder, Preorder, Traversal};
use crate::util::RemovalCase;

/// The slot a node lives in: the tree's root or one side of its parent.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding unique, totally ordered elements. No rebalancing is ever
/// performed, so the shape of the tree (and therefore the cost of every operation) depends on
/// the order in which elements were inserted.
///
/// A tree is always constructed with a first element. It only becomes empty again when that
/// last remaining element is removed, after which [`insert`](Self::insert) seeds a new root.
pub struct OrderedBinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Drop for OrderedBinaryTree<T> {
    fn drop(&mut self) {
        // A degenerate tree is as deep as it is long, so the default recursive drop of the
        // boxes could overflow the stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for OrderedBinaryTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        {
            // Each source node is paired with the empty slot its copy goes into.
            let mut pending: Vec<(&Node<T>, &mut Link<T>)> = self
                .root
                .as_deref()
                .map(|node| (node, &mut root))
                .into_iter()
                .collect();

            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(Node::new_boxed(source.element.clone()));
                let Node { left, right, .. } = &mut **copy;
                pending.extend(source.left.as_deref().map(|n| (n, left)));
                pending.extend(source.right.as_deref().map(|n| (n, right)));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for OrderedBinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> OrderedBinaryTree<T> {
    /// Generates a new `Tree` whose root holds `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            root: Some(Node::new_boxed(initial)),
            len: 1,
        }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether every element has been removed.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree holding a
    /// single element has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new(1);
    /// assert_eq!(tree.height(), 1);
    ///
    /// // Ascending inserts never branch.
    /// tree.insert(2).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The smallest element, found at the end of the leftmost path.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// The largest element, found at the end of the rightmost path.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Visits each node before its left subtree and then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the elements
    /// in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Visits both subtrees (left first) before the node itself.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Visits the tree breadth first, starting at the root and taking each level from left to
    /// right.
    ///
    /// Returns [`TreeError::EmptyTree`] if there is no root to start from.
    pub fn level_order(&self) -> Result<LevelOrder<'_, T>, TreeError> {
        self.root
            .as_deref()
            .map(LevelOrder::new)
            .ok_or(TreeError::EmptyTree)
    }

    /// Collects the elements in the given visitation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedBinaryTree, Traversal};
    ///
    /// let mut tree = OrderedBinaryTree::new(2);
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.traverse(Traversal::Preorder).unwrap(), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Traversal::Postorder).unwrap(), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Traversal) -> Result<Vec<&T>, TreeError> {
        let elements: Vec<&T> = match order {
            Traversal::Preorder => self.preorder().collect(),
            Traversal::Inorder => self.inorder().collect(),
            Traversal::Postorder => self.postorder().collect(),
            Traversal::LevelOrder => self.level_order()?.collect(),
        };
        Ok(elements)
    }
}

impl<T> OrderedBinaryTree<T>
where
    T: Ord,
{
    /// Attaches `element` as a new leaf below the first node that has no child on the side
    /// `element` belongs to.
    ///
    /// Returns [`TreeError::DuplicateKey`] without touching the tree if an equal element is
    /// already stored.
    pub fn insert(&mut self, element: T) -> Result<(), TreeError> {
        if self.contains(&element) {
            return Err(TreeError::DuplicateKey);
        }

        let slot = self.slot_mut(&element);
        debug_assert!(slot.is_none());
        *slot = Some(Node::new_boxed(element));
        self.len += 1;

        trace!(len = self.len, "inserted element");
        Ok(())
    }

    /// Whether an element equal to `element` is stored in the tree.
    pub fn contains(&self, element: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Removes the element equal to `element`.
    ///
    /// - A leaf is unlinked from its parent.
    /// - A node with one child is replaced by that child.
    /// - A node with two children keeps its place but takes the element of its in-order
    ///   successor, which is unlinked instead.
    ///
    /// Returns [`TreeError::NotFound`] without touching the tree if no such element is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new(5);
    /// for x in [3, 8, 7, 9] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// // 8 has two children so 9 takes its place.
    /// tree.remove(&8).unwrap();
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![&5, &3, &9, &7]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<(), TreeError> {
        let slot = self.slot_mut(element);
        let case = match slot.as_deref() {
            Some(node) => RemovalCase::of(node),
            None => return Err(TreeError::NotFound),
        };

        debug!(?case, "removing element");
        match case {
            RemovalCase::Leaf => remove_leaf(slot),
            RemovalCase::HalfSubtree => remove_half_subtree(slot),
            RemovalCase::FullSubtree => remove_full_subtree(slot),
        }
        self.len -= 1;

        Ok(())
    }

    /// Walks down from the root and returns the slot holding `element`. If there is no such
    /// element, this is the empty slot it would be attached to.
    fn slot_mut(&mut self, element: &T) -> &mut Link<T> {
        let mut link = &mut self.root;
        while let Some(ordering) = link.as_deref().map(|node| element.cmp(&node.element)) {
            if ordering == Ordering::Equal {
                break;
            }
            // Only borrow mutably once we know we're going down, so the walk can stop with
            // `link` itself.
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
        link
    }
}

fn remove_leaf<T>(slot: &mut Link<T>) {
    *slot = None;
}

fn remove_half_subtree<T>(slot: &mut Link<T>) {
    if let Some(mut node) = slot.take() {
        *slot = node.left.take().or_else(|| node.right.take());
    }
}

fn remove_full_subtree<T>(slot: &mut Link<T>) {
    let Some(node) = slot.as_deref_mut() else {
        return;
    };
    if let Some(successor) = detach_leftmost(&mut node.right) {
        node.element = successor;
    }
}

/// Unlinks the leftmost node below `link` and returns its element. That node has no left child
/// but may have a right one, which is promoted into the vacated slot so that nothing is lost.
fn detach_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.element)
}
