/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Removal path: splicing a node out and the delete fix-up.
//!
//! A node with two children is never unlinked directly. Its in-order
//! successor `y`, which has no left child, takes its place and its color, so
//! the only position that can lose a black node is the one `y` vacated.

use tracing::{debug, trace};

use super::OrderedTree;
use crate::TreeError;
use crate::arena::NodeIndex;
use crate::node::{Color, Side};

impl<K: Ord> OrderedTree<K> {
    /// Remove one occurrence of `key` from the tree, returning the stored key.
    ///
    /// The lookup follows the same descent as [`Self::search`], so with
    /// duplicate keys the occurrence removed is the one `search` would find.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no equal key is stored. The tree
    /// is left untouched in that case.
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError> {
        let result = self._delete(key);
        self.after_mutation();
        result
    }

    fn _delete(&mut self, key: &K) -> Result<K, TreeError> {
        let Some(z) = self.find(key) else {
            debug!(len = self.len(), "delete: key not found");
            return Err(TreeError::KeyNotFound);
        };

        // `x` is the (possibly NIL) node moved into the vacated position and
        // `x_parent` its parent afterwards. `x_parent` is tracked separately
        // because a NIL `x` cannot carry a parent link.
        let x;
        let x_parent;
        let removed_color;

        match (self.nodes[z].left, self.nodes[z].right) {
            (None, right) => {
                removed_color = self.nodes[z].color;
                x = right;
                x_parent = self.nodes[z].parent;
                self.transplant(z, right);
            }
            (left, None) => {
                removed_color = self.nodes[z].color;
                x = left;
                x_parent = self.nodes[z].parent;
                self.transplant(z, left);
            }
            (Some(left), Some(right)) => {
                let y = self.subtree_minimum(right);
                removed_color = self.nodes[y].color;
                x = self.nodes[y].right;

                if self.nodes[y].parent == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.nodes[y].parent;
                    self.transplant(y, x);
                    self.nodes[y].right = Some(right);
                    self.nodes[right].parent = Some(y);
                }

                self.transplant(z, Some(y));
                self.nodes[y].left = Some(left);
                self.nodes[left].parent = Some(y);
                self.nodes[y].color = self.nodes[z].color;
            }
        }

        let removed = self.nodes.remove(z);

        if removed_color.is_black() {
            self.delete_fixup(x, x_parent);
        }

        Ok(removed.key)
    }

    /// Put `v` (possibly NIL) where `u` is in the tree.
    ///
    /// Rewrites the link from `u`'s parent (or the root) and `v`'s parent
    /// pointer. `u`'s own links and all colors are left alone.
    fn transplant(&mut self, u: NodeIndex, v: Option<NodeIndex>) {
        let parent = self.nodes[u].parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Restore the red-black rules after a black node was removed above `x`.
    ///
    /// `x` carries an extra black. While it is black and not the root, the
    /// sibling `s` selects the case:
    ///
    /// - **Red `s`**: swap the colors of `s` and the parent and rotate at the
    ///   parent towards `x`. `x` now has a black sibling.
    /// - **Black `s`, both nephews black**: make `s` red and move the extra
    ///   black up to the parent.
    /// - **Black `s`, far nephew black, near nephew red**: swap the colors of
    ///   `s` and the near nephew and rotate at `s` away from `x`. The far
    ///   nephew is now red.
    /// - **Black `s`, far nephew red**: `s` takes the parent's color, the
    ///   parent and far nephew become black, and a rotation at the parent
    ///   towards `x` absorbs the extra black. This ends the loop.
    ///
    /// Finally `x` is colored black, which settles a red `x` or the root.
    fn delete_fixup(&mut self, mut x: Option<NodeIndex>, mut parent: Option<NodeIndex>) {
        while x != self.root && self.color_of(x).is_black() {
            let Some(p) = parent else {
                break;
            };
            // A NIL `x` is unambiguous here: its sibling carries at least one
            // black node, so it cannot be NIL as well.
            let side = if self.nodes[p].left == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let mut sibling = self.nodes[p]
                .child(far)
                .expect("a node with an extra black always has a sibling");

            if self.nodes[sibling].color.is_red() {
                trace!(parent = ?p, "delete fixup: red sibling");
                self.nodes[sibling].color = Color::Black;
                self.nodes[p].color = Color::Red;
                self.rotate(p, side);
                sibling = self.nodes[p]
                    .child(far)
                    .expect("the red sibling's inner child is the new sibling");
            }

            let near_nephew = self.nodes[sibling].child(side);
            let far_nephew = self.nodes[sibling].child(far);

            if self.color_of(near_nephew).is_black() && self.color_of(far_nephew).is_black() {
                trace!(parent = ?p, "delete fixup: black sibling, black nephews");
                self.nodes[sibling].color = Color::Red;
                x = Some(p);
                parent = self.nodes[p].parent;
                continue;
            }

            if self.color_of(far_nephew).is_black() {
                trace!(parent = ?p, "delete fixup: black sibling, red near nephew");
                let near = near_nephew.expect("the near nephew is red, so it exists");
                self.nodes[near].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, far);
                sibling = self.nodes[p]
                    .child(far)
                    .expect("the near nephew was lifted into the sibling position");
            }

            trace!(parent = ?p, "delete fixup: black sibling, red far nephew");
            self.nodes[sibling].color = self.nodes[p].color;
            self.nodes[p].color = Color::Black;
            if let Some(far_nephew) = self.nodes[sibling].child(far) {
                self.nodes[far_nephew].color = Color::Black;
            }
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        if let Some(x) = x {
            self.nodes[x].color = Color::Black;
        }
    }
}
