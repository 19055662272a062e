/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for construction and whole-tree accessors of [`OrderedTree`].

use ordered_tree::{Color, OrderedTree, TreeError};

use crate::helpers::{SCENARIO_KEYS, SCENARIO_SORTED, TotalF32, build_tree, inorder_keys};

#[test]
fn test_new_tree() {
    let tree = OrderedTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.black_height(), 0);
    assert_eq!(tree.minimum(), Err(TreeError::EmptyTree));
    assert_eq!(tree.maximum(), Err(TreeError::EmptyTree));
    assert_eq!(tree.inorder().count(), 0);
    tree.check_tree_invariants();
}

#[test]
fn test_default_is_empty() {
    let tree: OrderedTree<String> = OrderedTree::default();
    assert!(tree.is_empty());
}

#[test]
fn test_with_capacity() {
    let mut tree = OrderedTree::with_capacity(64);
    assert!(tree.capacity() >= 64);
    for key in 0..64 {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 64);
    assert!(tree.capacity() >= 64);
}

#[test]
fn test_single_key_is_black_root() {
    let mut tree = OrderedTree::new();
    tree.insert(42);
    let root = tree.root().expect("tree has one key");
    assert_eq!(*root.key(), 42);
    assert_eq!(root.color(), Color::Black);
    assert!(root.is_root());
    assert!(root.left().is_none());
    assert!(root.right().is_none());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.black_height(), 1);
}

#[test]
fn test_scenario_tree() {
    let tree = build_tree(&SCENARIO_KEYS);
    assert_eq!(tree.len(), SCENARIO_KEYS.len());
    assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
    assert_eq!(inorder_keys(&tree), SCENARIO_SORTED);
    assert_eq!(tree.root().map(|root| *root.key()), Some(90));
    assert_eq!(tree.black_height(), 2);
    assert_eq!(tree.height(), 4);
}

#[test]
fn test_from_iter_and_extend() {
    let mut tree: OrderedTree<i32> = SCENARIO_KEYS.into_iter().collect();
    tree.check_tree_invariants();
    assert_eq!(inorder_keys(&tree), SCENARIO_SORTED);

    tree.extend([506, 1000]);
    tree.check_tree_invariants();
    assert_eq!(tree.len(), 13);
    assert!(tree.contains(&506));
    assert_eq!(tree.maximum(), Ok(&1000));
}

#[test]
fn test_clear() {
    let mut tree = build_tree(&SCENARIO_KEYS);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(!tree.contains(&90));
    tree.check_tree_invariants();

    // The tree is fully usable after being cleared.
    tree.insert(7);
    assert_eq!(inorder_keys(&tree), [7]);
    tree.check_tree_invariants();
}

#[test]
fn test_float_keys() {
    let keys = [84.8, 103.5, 67.8, 90.3, 23.5, 67.1, 44.5, 89.2, 100.5, 300.2].map(TotalF32);
    let mut tree = build_tree(&keys);
    tree.insert(TotalF32(88.5));
    tree.check_tree_invariants();

    assert_eq!(tree.delete(&TotalF32(23.5)).map(|k| k.0), Ok(23.5));
    tree.check_tree_invariants();

    let values: Vec<f32> = tree.inorder().map(|k| k.0).collect();
    assert_eq!(
        values,
        [44.5, 67.1, 67.8, 84.8, 88.5, 89.2, 90.3, 100.5, 103.5, 300.2]
    );
}

#[test]
fn test_string_keys() {
    let names = [
        "Milton",
        "Ajax",
        "Clarington",
        "Brock",
        "Oshawa",
        "Pickering",
        "Uxbridge",
        "Whitby",
        "Burlington",
        "Oakville",
        "Brampton",
        "Caledon",
        "Mississauga",
        "Aurora",
        "Georgina",
    ]
    .map(String::from);
    let mut tree = build_tree(&names);
    tree.insert("Stouffville".to_owned());
    tree.check_tree_invariants();
    assert_eq!(tree.len(), 16);

    assert_eq!(tree.delete(&"Caledon".to_owned()), Ok("Caledon".to_owned()));
    tree.check_tree_invariants();

    let mut expected: Vec<String> = names.to_vec();
    expected.push("Stouffville".to_owned());
    expected.retain(|name| name != "Caledon");
    expected.sort();
    assert_eq!(inorder_keys(&tree), expected);
}
