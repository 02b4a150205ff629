//! Properties that hold for any binary tree, ordered or not.

use bst::{Error, Tree};

use crate::Shape;

/// A check of the BST invariant that compares every node against every key in its subtrees.
fn is_valid_bst(tree: &Tree) -> bool {
    match tree.root() {
        None => true,
        Some(n) => {
            n.left().in_order().all(|k| k <= n.key())
                && n.right().in_order().all(|k| k > n.key())
                && is_valid_bst(n.left())
                && is_valid_bst(n.right())
        }
    }
}

/// The number of nodes at the most populated depth.
fn max_width(tree: &Tree) -> usize {
    fn count(tree: &Tree, depth: usize, widths: &mut Vec<usize>) {
        if let Some(n) = tree.root() {
            if widths.len() <= depth {
                widths.push(0);
            }
            widths[depth] += 1;
            count(n.left(), depth + 1, widths);
            count(n.right(), depth + 1, widths);
        }
    }

    let mut widths = Vec::new();
    count(tree, 0, &mut widths);
    widths.into_iter().max().unwrap_or(0)
}

#[quickcheck]
fn validity_matches_brute_force(shape: Shape) -> bool {
    shape.0.is_valid_bst() == is_valid_bst(&shape.0)
}

#[quickcheck]
fn size_covers_height(shape: Shape) -> bool {
    (shape.0.size() as isize) > shape.0.height()
}

#[quickcheck]
fn traversals_yield_size_keys(shape: Shape) -> bool {
    let tree = shape.0;
    let size = tree.size();

    tree.in_order().count() == size
        && tree.pre_order().count() == size
        && tree.post_order().count() == size
        && tree.breadth_first().count() == size
        && tree.level_order(size).map(|keys| keys.len()) == Ok(size)
}

#[quickcheck]
fn bounded_level_order_matches_breadth_first(shape: Shape, capacity: u8) -> bool {
    let tree = shape.0;
    let capacity = usize::from(capacity % 32);

    match tree.level_order(capacity) {
        Ok(keys) => {
            capacity >= max_width(&tree) && keys == tree.breadth_first().collect::<Vec<_>>()
        }
        Err(e) => e == Error::CapacityExceeded { capacity } && capacity < tree.size(),
    }
}

#[test]
fn empty_tree_metrics() {
    let tree = Tree::new();

    assert_eq!(tree.height(), -1);
    assert_eq!(tree.size(), 0);
}
