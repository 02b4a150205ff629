use bst::Tree;

use crate::build;

#[quickcheck]
fn valid_after_every_insert(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    xs.iter().all(|x| {
        tree.insert(i32::from(*x));
        tree.is_valid_bst()
    })
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let keys: Vec<_> = tree.in_order().collect();

    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn in_order_keeps_duplicates(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut expected: Vec<_> = xs.iter().map(|x| i32::from(*x)).collect();
    expected.sort_unstable();

    tree.in_order().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn traversals_visit_the_same_keys(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted = |keys: Vec<i32>| {
        let mut keys = keys;
        keys.sort_unstable();
        keys
    };
    let in_order: Vec<_> = tree.in_order().collect();

    sorted(tree.pre_order().collect()) == in_order
        && sorted(tree.post_order().collect()) == in_order
        && sorted(tree.breadth_first().collect()) == in_order
}

#[quickcheck]
fn min_and_max_are_in_order_ends(xs: Vec<i32>) -> bool {
    let tree = build(&xs);
    let keys: Vec<_> = tree.in_order().collect();

    tree.minimum().ok() == keys.first().copied() && tree.maximum().ok() == keys.last().copied()
}

#[quickcheck]
fn contains_only_inserted(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree = build(&xs);
    probes
        .iter()
        .all(|p| tree.contains(i32::from(*p)) == xs.contains(p))
}

#[quickcheck]
fn ascending_chains_are_unbalanced(len: u8) -> bool {
    let len = i32::from(len % 64) + 3;
    let tree: Tree = (0..len).collect();

    tree.height() == (len - 1) as isize && !tree.is_balanced()
}

#[quickcheck]
fn median_first_is_balanced(levels: u8) -> bool {
    /// Inserts the median of `keys`, then recurses into each half.
    fn fill(tree: &mut Tree, keys: &[i32]) {
        if !keys.is_empty() {
            let mid = keys.len() / 2;
            tree.insert(keys[mid]);
            fill(tree, &keys[..mid]);
            fill(tree, &keys[mid + 1..]);
        }
    }

    let levels = u32::from(levels % 8) + 1;
    let keys: Vec<i32> = (0..2i32.pow(levels) - 1).collect();
    let mut tree = Tree::new();
    fill(&mut tree, &keys);

    tree.is_balanced() && tree.height() == levels as isize - 1 && tree.is_valid_bst()
}

#[test]
fn demonstration_scenario() {
    let mut tree = Tree::new();
    for key in [10, 5, 500] {
        tree.insert(key);
    }

    let root = tree.root().expect("three keys were inserted");
    assert_eq!(root.key(), 10);
    assert_eq!(root.left().root().map(|n| n.key()), Some(5));
    assert_eq!(root.right().root().map(|n| n.key()), Some(500));

    for key in [-500, 20, -600] {
        tree.insert(key);
    }

    assert_eq!(tree.maximum(), Ok(500));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.size(), 6);
    assert!(!tree.is_balanced());
    assert_eq!(tree.in_order().collect::<Vec<_>>(), [-600, -500, 5, 10, 20, 500]);
    assert_eq!(tree.pre_order().collect::<Vec<_>>(), [10, 5, -500, -600, 500, 20]);
    assert_eq!(tree.post_order().collect::<Vec<_>>(), [-600, -500, 5, 20, 500, 10]);
    assert_eq!(tree.level_order(20), Ok(vec![10, 5, 500, -500, 20, -600]));
    assert!(tree.is_valid_bst());
}

#[test]
fn negative_one_is_a_key() {
    let tree = build(&[-1, -2, -1]);

    assert_eq!(tree.maximum(), Ok(-1));
    assert_eq!(tree.minimum(), Ok(-2));
    assert_eq!(tree.size(), 3);
}
