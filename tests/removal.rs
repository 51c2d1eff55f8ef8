//! End to end removal scenarios on the tree built from `10, 5, 20, 9, 8, 2, 18, 21, 22`:
//!
//! ```text
//!        10
//!      /    \
//!     5      20
//!    / \    /  \
//!   2   9  18   21
//!      /          \
//!     8            22
//! ```

use ordered_tree::{OrderedBinaryTree, Traversal, TreeError};
use test_case::test_case;

fn example_tree() -> OrderedBinaryTree<i32> {
    let mut tree = OrderedBinaryTree::new(10);
    for x in [5, 20, 9, 8, 2, 18, 21, 22] {
        tree.insert(x).unwrap();
    }
    tree
}

fn elements(tree: &OrderedBinaryTree<i32>, order: Traversal) -> Vec<i32> {
    tree.traverse(order).unwrap().into_iter().copied().collect()
}

#[test_case(&[2, 8, 22], &[10, 5, 9, 20, 18, 21] ; "leaves")]
#[test_case(&[2, 8, 22, 9], &[10, 5, 20, 18, 21] ; "leaf left behind by earlier removals")]
#[test_case(&[2, 5], &[10, 9, 8, 20, 18, 21, 22] ; "half subtree with right child")]
#[test_case(&[9], &[10, 5, 2, 8, 20, 18, 21, 22] ; "half subtree with left child")]
#[test_case(&[21], &[10, 5, 2, 9, 8, 20, 18, 22] ; "half subtree deep on the right")]
#[test_case(&[22, 20], &[10, 5, 2, 9, 8, 21, 18] ; "full subtree with leaf successor")]
#[test_case(&[20], &[10, 5, 2, 9, 8, 21, 18, 22] ; "full subtree whose successor has a right child")]
#[test_case(&[10], &[18, 5, 2, 9, 8, 20, 21, 22] ; "full subtree at the root")]
#[test_case(&[2, 8, 22, 9, 20], &[10, 5, 21, 18] ; "every case in turn")]
fn remove_keeps_order(removals: &[i32], expected_preorder: &[i32]) {
    let mut tree = example_tree();

    for x in removals {
        tree.remove(x).unwrap();
        assert!(!tree.contains(x));
    }

    assert_eq!(elements(&tree, Traversal::Preorder), expected_preorder);

    let mut sorted = expected_preorder.to_vec();
    sorted.sort_unstable();
    assert_eq!(elements(&tree, Traversal::Inorder), sorted);
    assert_eq!(tree.len(), 9 - removals.len());
}

#[test]
fn leaf_removals_match_the_example() {
    let mut tree = example_tree();

    tree.remove(&2).unwrap();
    tree.remove(&8).unwrap();
    tree.remove(&22).unwrap();

    assert_eq!(
        elements(&tree, Traversal::Inorder),
        vec![5, 9, 10, 18, 20, 21]
    );
}

#[test]
fn full_subtree_removal_never_duplicates_the_successor() {
    let mut tree = example_tree();

    tree.remove(&20).unwrap();

    let inorder = elements(&tree, Traversal::Inorder);
    assert_eq!(inorder.iter().filter(|&&x| x == 21).count(), 1);
    assert!(!inorder.contains(&20));
    assert!(tree.contains(&22));
}

#[test]
fn level_order_after_the_example_removals() {
    let mut tree = example_tree();
    assert_eq!(
        elements(&tree, Traversal::LevelOrder),
        vec![10, 5, 20, 2, 9, 18, 21, 8, 22]
    );

    for x in [2, 8, 22, 9, 20] {
        tree.remove(&x).unwrap();
    }

    assert_eq!(elements(&tree, Traversal::LevelOrder), vec![10, 5, 21, 18]);
    assert_eq!(
        elements(&tree, Traversal::Postorder),
        vec![5, 18, 21, 10]
    );
    assert_eq!(tree.height(), 3);
}

#[test]
fn failed_operations_leave_the_tree_unchanged() {
    let mut tree = example_tree();
    let before = elements(&tree, Traversal::Preorder);

    assert_eq!(tree.insert(18), Err(TreeError::DuplicateKey));
    assert_eq!(tree.remove(&19), Err(TreeError::NotFound));

    assert_eq!(elements(&tree, Traversal::Preorder), before);
}

#[test]
fn removing_everything_empties_the_tree() {
    let mut tree = example_tree();

    for x in [10, 5, 20, 9, 8, 2, 18, 21, 22] {
        tree.remove(&x).unwrap();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.traverse(Traversal::Inorder), Ok(vec![]));
    assert_eq!(
        tree.traverse(Traversal::LevelOrder),
        Err(TreeError::EmptyTree)
    );
}
