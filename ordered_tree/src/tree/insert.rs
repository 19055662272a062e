/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and the insert fix-up.
//!
//! A new key is placed at the leaf position reached by an ordinary binary
//! search descent and colored red. The only rule that can break is "no red
//! node has a red child", which [`OrderedTree::insert_fixup`] repairs by
//! walking up the tree.

use tracing::trace;

use super::OrderedTree;
use crate::arena::NodeIndex;
use crate::node::{Color, Node, Side};

impl<K: Ord> OrderedTree<K> {
    /// Insert `key` into the tree.
    ///
    /// Equal keys are allowed; a key equal to one already stored is placed
    /// in that key's right subtree. Runs in `O(log n)`.
    pub fn insert(&mut self, key: K) {
        self._insert(key);
        self.after_mutation();
    }

    fn _insert(&mut self, key: K) {
        // Descend to the NIL slot where the key belongs. Ties go right.
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(idx) = current {
            parent = Some(idx);
            side = if key < self.nodes[idx].key {
                Side::Left
            } else {
                Side::Right
            };
            current = self.nodes[idx].child(side);
        }

        let mut node = Node::new(key);
        node.parent = parent;
        let new_idx = self.nodes.insert(node);

        let Some(parent) = parent else {
            // First key: it becomes the black root.
            self.nodes[new_idx].color = Color::Black;
            self.root = Some(new_idx);
            return;
        };
        *self.nodes[parent].child_mut(side) = Some(new_idx);

        // A red child of the (black) root cannot violate anything.
        if self.nodes[parent].parent.is_none() {
            return;
        }

        self.insert_fixup(new_idx);
    }

    /// Restore the red-black rules after inserting the red node `k`.
    ///
    /// While `k` and its parent are both red, the uncle's color selects the
    /// case:
    ///
    /// - **Red uncle**: parent and uncle become black, grandparent red, and
    ///   the violation moves two levels up to the grandparent.
    /// - **Black uncle, `k` on the inner side**: rotate at the parent to turn
    ///   the bent grandparent-parent-`k` path into a straight one.
    /// - **Black uncle, `k` on the outer side**: recolor parent black and
    ///   grandparent red, then rotate at the grandparent. This ends the loop.
    ///
    /// The root is forced black at the end.
    fn insert_fixup(&mut self, mut k: NodeIndex) {
        while let Some(parent) = self.nodes[k].parent {
            if self.nodes[parent].color.is_black() {
                break;
            }
            let grandparent = self.nodes[parent]
                .parent
                .expect("a red node is never the root, so it has a parent");
            let parent_side = if self.nodes[grandparent].left == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            match uncle {
                Some(uncle) if self.nodes[uncle].color.is_red() => {
                    trace!(node = ?k, "insert fixup: red uncle");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    k = grandparent;
                }
                _ => {
                    let mut parent = parent;
                    if self.nodes[parent].child(parent_side.opposite()) == Some(k) {
                        trace!(node = ?k, "insert fixup: black uncle, inner child");
                        k = parent;
                        self.rotate(k, parent_side);
                        parent = self.nodes[k]
                            .parent
                            .expect("rotation lifted the inner child above its parent");
                    }
                    trace!(node = ?k, "insert fixup: black uncle, outer child");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate(grandparent, parent_side.opposite());
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }
}
