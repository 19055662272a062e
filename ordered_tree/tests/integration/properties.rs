/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the ordered tree using `proptest`.
//!
//! The `unittest` feature is enabled for these tests, so every `insert` and
//! `delete` below also runs the full invariant checker.

#[cfg(not(miri))]
mod proptests {
    use ordered_tree::{OrderedTree, TreeError};

    /// An operation applied to both the tree and the model.
    #[derive(proptest_derive::Arbitrary, Debug, Clone, Copy)]
    enum TreeOperation {
        // A narrow key range so deletes hit existing keys and duplicates occur.
        Insert(#[proptest(strategy = "0u8..48")] u8),
        Delete(#[proptest(strategy = "0u8..48")] u8),
    }

    /// Upper bound on the number of nodes on a root-to-leaf path.
    fn max_height(len: usize) -> f64 {
        2.0 * ((len + 1) as f64).log2()
    }

    proptest::proptest! {
        #[test]
        /// The tree behaves like a sorted multiset kept in a `Vec`.
        fn prop_matches_sorted_vec_model(
            ops in proptest::collection::vec(proptest::prelude::any::<TreeOperation>(), 0..300)
        ) {
            let mut tree = OrderedTree::new();
            let mut model: Vec<u8> = Vec::new();

            for op in ops {
                match op {
                    TreeOperation::Insert(key) => {
                        tree.insert(key);
                        let at = model.partition_point(|&k| k <= key);
                        model.insert(at, key);
                    }
                    TreeOperation::Delete(key) => match model.binary_search(&key) {
                        Ok(at) => {
                            model.remove(at);
                            proptest::prop_assert_eq!(tree.delete(&key), Ok(key));
                        }
                        Err(_) => {
                            proptest::prop_assert_eq!(
                                tree.delete(&key),
                                Err(TreeError::KeyNotFound)
                            );
                        }
                    },
                }

                proptest::prop_assert_eq!(tree.len(), model.len());
                proptest::prop_assert_eq!(tree.is_empty(), model.is_empty());
            }

            tree.check_tree_invariants();
            let keys: Vec<u8> = tree.inorder().copied().collect();
            proptest::prop_assert_eq!(&keys, &model);
            proptest::prop_assert_eq!(tree.minimum().ok(), model.first());
            proptest::prop_assert_eq!(tree.maximum().ok(), model.last());
        }

        #[test]
        /// Deleting every inserted key, in any order, leaves an empty tree.
        fn prop_delete_everything(
            keys in proptest::collection::vec(-500i32..500, 0..200),
            rotate_by in 0usize..200,
        ) {
            let mut tree: OrderedTree<i32> = keys.iter().copied().collect();
            proptest::prop_assert_eq!(tree.len(), keys.len());

            let mut order = keys.clone();
            if !order.is_empty() {
                let shift = rotate_by % order.len();
                order.rotate_left(shift);
            }
            for (removed, key) in order.iter().enumerate() {
                proptest::prop_assert_eq!(tree.delete(key), Ok(*key));
                proptest::prop_assert_eq!(tree.len(), keys.len() - removed - 1);
            }

            proptest::prop_assert!(tree.is_empty());
            proptest::prop_assert!(tree.root().is_none());
            proptest::prop_assert_eq!(tree.minimum(), Err(TreeError::EmptyTree));
        }

        #[test]
        /// Height stays logarithmic and every root-to-NIL path has the same
        /// black count, whatever the insertion order.
        fn prop_height_is_logarithmic(
            keys in proptest::collection::vec(proptest::prelude::any::<u16>(), 1..500)
        ) {
            let tree: OrderedTree<u16> = keys.iter().copied().collect();
            let height = tree.height();
            proptest::prop_assert!(
                height as f64 <= max_height(tree.len()),
                "height {} exceeds the bound for {} keys",
                height,
                tree.len()
            );
            proptest::prop_assert!(tree.black_height() * 2 >= height);
        }

        #[test]
        /// Successor and predecessor agree with the sorted key sequence.
        fn prop_neighbors_follow_sorted_order(
            keys in proptest::collection::hash_set(-1000i32..1000, 1..150)
        ) {
            let tree: OrderedTree<i32> = keys.iter().copied().collect();
            let mut sorted: Vec<i32> = keys.into_iter().collect();
            sorted.sort_unstable();

            for window in sorted.windows(2) {
                proptest::prop_assert_eq!(tree.successor(&window[0]), Ok(Some(&window[1])));
                proptest::prop_assert_eq!(tree.predecessor(&window[1]), Ok(Some(&window[0])));
            }
            proptest::prop_assert_eq!(tree.successor(sorted.last().unwrap()), Ok(None));
            proptest::prop_assert_eq!(tree.predecessor(&sorted[0]), Ok(None));
        }

        #[test]
        /// The parent of every non-root key is one edge closer to the root.
        fn prop_parent_and_depth_agree(
            keys in proptest::collection::hash_set(proptest::prelude::any::<i16>(), 1..150)
        ) {
            let tree: OrderedTree<i16> = keys.iter().copied().collect();
            let root = *tree.root().unwrap().key();

            for key in &keys {
                let depth = tree.depth_of(key).unwrap();
                match tree.parent_of(key) {
                    Ok(parent) => {
                        proptest::prop_assert_eq!(tree.depth_of(parent), Ok(depth - 1));
                    }
                    Err(err) => {
                        proptest::prop_assert_eq!(err, TreeError::NoParent);
                        proptest::prop_assert_eq!(*key, root);
                        proptest::prop_assert_eq!(depth, 0);
                    }
                }
            }
        }
    }
}
