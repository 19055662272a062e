/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rotation primitives.
//!
//! Rotations are the only operations that change the shape of the tree.
//! Both preserve the in-order key sequence and touch a constant number of
//! links. Colors are never modified here.

use tracing::trace;

use super::OrderedTree;
use crate::arena::NodeIndex;
use crate::node::Side;

impl<K> OrderedTree<K> {
    /// Rotate so that `x` moves down to `side` and its child on the
    /// opposite side takes its place. `Side::Left` is a left rotation:
    ///
    /// ```text
    ///      x                y
    ///     / \              / \
    ///    a   y     =>     x   c
    ///       / \          / \
    ///      b   c        a   b
    /// ```
    ///
    /// `Side::Right` is the exact mirror.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no child on the side opposite to `side`.
    pub(super) fn rotate(&mut self, x: NodeIndex, side: Side) {
        trace!(pivot = ?x, ?side, "rotate");
        let rising = side.opposite();
        let y = self.nodes[x]
            .child(rising)
            .expect("rotation requires a child on the rising side");

        // y's inner subtree changes parent from y to x.
        let inner = self.nodes[y].child(side);
        *self.nodes[x].child_mut(rising) = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        // y takes x's place under x's former parent (or as the root).
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        *self.nodes[y].child_mut(side) = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Point the link that currently leads to `old` at `new` instead.
    ///
    /// `parent` is `old`'s parent; `None` means `old` is the root. Only the
    /// downward link is rewritten: `new`'s parent pointer is left to the
    /// caller.
    pub(super) fn replace_child(
        &mut self,
        parent: Option<NodeIndex>,
        old: NodeIndex,
        new: Option<NodeIndex>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => self.nodes[p].right = new,
        }
    }
}
