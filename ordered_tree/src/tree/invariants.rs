/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks.
//!
//! With the `unittest` feature enabled these run after every `insert` and
//! `delete` to catch violations at the mutation that introduced them.
//! Messages name arena indices rather than keys, since keys need not be
//! printable.

use super::OrderedTree;
use crate::arena::NodeIndex;

impl<K: Ord> OrderedTree<K> {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated:
    ///
    /// - the root is black and has no parent;
    /// - every child points back to its parent;
    /// - no red node has a red child;
    /// - every path from a node to a NIL below it has the same number of
    ///   black nodes;
    /// - an in-order walk yields non-decreasing keys;
    /// - every stored node is reachable from the root.
    ///
    /// Called automatically after mutations when the `unittest` feature is
    /// enabled.
    pub fn check_tree_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(
                self.nodes.len(),
                0,
                "empty tree still owns {} nodes",
                self.nodes.len()
            );
            return;
        };

        assert!(
            self.nodes[root].color.is_black(),
            "root {root:?} must be black"
        );
        assert_eq!(
            self.nodes[root].parent, None,
            "root {root:?} must not have a parent"
        );

        let mut reachable = 0;
        self.check_node_invariants(root, &mut reachable);
        assert_eq!(
            reachable,
            self.nodes.len(),
            "{reachable} nodes reachable from the root, but the arena holds {}",
            self.nodes.len(),
        );

        // Walk the slab (not the tree) so detached nodes are caught too.
        for (idx, node) in self.nodes.iter() {
            if let Some(parent) = node.parent {
                let parent_node = &self.nodes[parent];
                assert!(
                    parent_node.left == Some(idx) || parent_node.right == Some(idx),
                    "node {idx:?} names {parent:?} as its parent, but is not one of its children",
                );
            }
        }

        let keys: Vec<&K> = self.inorder().collect();
        for (i, window) in keys.windows(2).enumerate() {
            assert!(
                window[0] <= window[1],
                "in-order walk is not sorted at position {i}"
            );
        }
    }

    /// Recursively check the subtree rooted at `idx`.
    ///
    /// Returns the subtree's black height, counting `idx` itself and not
    /// counting NIL.
    fn check_node_invariants(&self, idx: NodeIndex, reachable: &mut usize) -> usize {
        *reachable += 1;
        let node = &self.nodes[idx];

        for child in [node.left, node.right].into_iter().flatten() {
            assert_eq!(
                self.nodes[child].parent,
                Some(idx),
                "child {child:?} does not point back to its parent {idx:?}",
            );
            assert!(
                !(node.color.is_red() && self.nodes[child].color.is_red()),
                "red node {idx:?} has red child {child:?}",
            );
        }

        let left_height = node
            .left
            .map_or(0, |left| self.check_node_invariants(left, reachable));
        let right_height = node
            .right
            .map_or(0, |right| self.check_node_invariants(right, reachable));
        assert_eq!(
            left_height, right_height,
            "black height mismatch at node {idx:?} (left={left_height}, right={right_height})",
        );

        left_height + usize::from(node.color.is_black())
    }
}
