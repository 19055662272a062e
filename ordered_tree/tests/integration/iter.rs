/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the depth-first key iterators.

use ordered_tree::OrderedTree;

use crate::helpers::{SCENARIO_KEYS, SCENARIO_SORTED, build_tree};

#[test]
fn test_traversals_of_scenario_tree() {
    let tree = build_tree(&SCENARIO_KEYS);

    let preorder: Vec<i32> = tree.preorder().copied().collect();
    assert_eq!(preorder, [90, 70, 25, 11, 67, 80, 89, 301, 95, 501, 801]);

    let inorder: Vec<i32> = tree.inorder().copied().collect();
    assert_eq!(inorder, SCENARIO_SORTED);

    let postorder: Vec<i32> = tree.postorder().copied().collect();
    assert_eq!(postorder, [11, 67, 25, 89, 80, 70, 95, 801, 501, 301, 90]);
}

#[test]
fn test_traversals_of_empty_tree() {
    let tree = OrderedTree::<i32>::new();
    assert_eq!(tree.preorder().next(), None);
    assert_eq!(tree.inorder().next(), None);
    assert_eq!(tree.postorder().next(), None);
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn test_single_node_traversals() {
    let tree = build_tree(&[7]);
    assert_eq!(tree.preorder().collect::<Vec<_>>(), [&7]);
    assert_eq!(tree.inorder().collect::<Vec<_>>(), [&7]);
    assert_eq!(tree.postorder().collect::<Vec<_>>(), [&7]);
}

#[test]
fn test_iterators_stop_early() {
    let tree = build_tree(&SCENARIO_KEYS);

    let first_three: Vec<i32> = tree.inorder().take(3).copied().collect();
    assert_eq!(first_three, [11, 25, 67]);

    let mut preorder = tree.preorder();
    assert_eq!(preorder.next(), Some(&90));
    assert_eq!(preorder.next(), Some(&70));
    drop(preorder);

    assert_eq!(tree.postorder().find(|&&key| key > 80), Some(&89));
}

#[test]
fn test_iterators_are_fused() {
    let tree = build_tree(&[2, 1, 3]);

    let mut inorder = tree.inorder();
    assert_eq!(inorder.by_ref().count(), 3);
    assert_eq!(inorder.next(), None);
    assert_eq!(inorder.next(), None);

    let mut postorder = tree.postorder();
    assert_eq!(postorder.by_ref().count(), 3);
    assert_eq!(postorder.next(), None);
}

#[test]
fn test_iter_and_into_iterator_are_inorder() {
    let tree = build_tree(&SCENARIO_KEYS);
    assert!(tree.iter().eq(SCENARIO_SORTED.iter()));

    let mut seen = Vec::new();
    for key in &tree {
        seen.push(*key);
    }
    assert_eq!(seen, SCENARIO_SORTED);
}

#[test]
fn test_traversals_visit_every_key_once() {
    let keys: Vec<u32> = (0..200).map(|i| (i * 37) % 211).collect();
    let tree = build_tree(&keys);

    let mut preorder: Vec<u32> = tree.preorder().copied().collect();
    let mut postorder: Vec<u32> = tree.postorder().copied().collect();
    preorder.sort_unstable();
    postorder.sort_unstable();

    let inorder: Vec<u32> = tree.inorder().copied().collect();
    assert_eq!(preorder, inorder);
    assert_eq!(postorder, inorder);

    // Pre-order starts at the root, post-order ends there.
    let root = *tree.root().unwrap().key();
    assert_eq!(tree.preorder().next(), Some(&root));
    assert_eq!(tree.postorder().last(), Some(&root));
}
