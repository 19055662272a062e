/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Supporting functions for benchmarking [`OrderedTree`] operations.
//!
//! This crate depends on `ordered_tree` without the `unittest` feature, so
//! nothing measured here runs the invariant checker.

use ordered_tree::OrderedTree;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Tree sizes every benchmark group is run at.
pub const SIZES: &[u32] = &[1_000, 10_000, 100_000];

/// Seed for [`shuffled_keys`], fixed so runs are comparable.
pub const SHUFFLE_SEED: u64 = 0x0dd_5eed;

/// Keys `0..n` in ascending order.
pub fn sequential_keys(n: u32) -> Vec<u32> {
    (0..n).collect()
}

/// Keys `0..n` in a fixed pseudo-random order.
pub fn shuffled_keys(n: u32) -> Vec<u32> {
    let mut keys = sequential_keys(n);
    keys.shuffle(&mut StdRng::seed_from_u64(SHUFFLE_SEED));
    keys
}

/// Build a tree sized for `keys` and insert them in order.
pub fn load_tree(keys: &[u32]) -> OrderedTree<u32> {
    let mut tree = OrderedTree::with_capacity(keys.len());
    tree.extend(keys.iter().copied());
    tree
}
