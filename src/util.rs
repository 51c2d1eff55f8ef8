use crate::tree::Node;

/// How a node is unlinked, decided by which of its children are present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RemovalCase {
    /// No children. The parent's slot is simply cleared.
    Leaf,
    /// Exactly one child, which is promoted into the parent's slot.
    HalfSubtree,
    /// Both children. The node survives and takes its in-order successor's element.
    FullSubtree,
}

impl RemovalCase {
    pub(crate) fn of<T>(node: &Node<T>) -> Self {
        match (&node.left, &node.right) {
            (None, None) => Self::Leaf,
            (Some(_), Some(_)) => Self::FullSubtree,
            _ => Self::HalfSubtree,
        }
    }
}
