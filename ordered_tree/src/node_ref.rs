/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read-only handles to nodes of an [`OrderedTree`].

use std::fmt;

use crate::OrderedTree;
use crate::arena::NodeIndex;
use crate::node::{Color, Node, Side};

/// A shared handle to a node of an [`OrderedTree`].
///
/// Obtained from [`OrderedTree::search`] or [`OrderedTree::root`]. The
/// handle borrows the tree, so it cannot outlive a mutation.
pub struct NodeRef<'a, K> {
    tree: &'a OrderedTree<K>,
    idx: NodeIndex,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) const fn new(tree: &'a OrderedTree<K>, idx: NodeIndex) -> Self {
        Self { tree, idx }
    }

    fn node(&self) -> &'a Node<K> {
        self.tree.node(self.idx)
    }

    fn to(&self, idx: Option<NodeIndex>) -> Option<Self> {
        idx.map(|idx| Self::new(self.tree, idx))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// The node's color.
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.to(self.node().parent)
    }

    /// The left child, `None` if it is NIL.
    pub fn left(&self) -> Option<Self> {
        self.to(self.node().left)
    }

    /// The right child, `None` if it is NIL.
    pub fn right(&self) -> Option<Self> {
        self.to(self.node().right)
    }

    /// The child on `side`.
    pub fn child(&self, side: Side) -> Option<Self> {
        self.to(self.node().child(side))
    }

    /// Which child of its parent this node is, `None` for the root.
    pub fn side(&self) -> Option<Side> {
        self.tree.side_of(self.idx)
    }

    /// Returns `true` if this node is the root of the tree.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.tree.depth_of_index(self.idx)
    }

    /// The node holding the next key in sorted order.
    pub fn successor(&self) -> Option<Self> {
        self.to(self.tree.successor_index(self.idx))
    }

    /// The node holding the previous key in sorted order.
    pub fn predecessor(&self) -> Option<Self> {
        self.to(self.tree.predecessor_index(self.idx))
    }

    /// The node holding the smallest key of the subtree rooted here.
    pub fn subtree_minimum(&self) -> Self {
        Self::new(self.tree, self.tree.subtree_minimum(self.idx))
    }

    /// The node holding the largest key of the subtree rooted here.
    pub fn subtree_maximum(&self) -> Self {
        Self::new(self.tree, self.tree.subtree_maximum(self.idx))
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    /// Two handles are equal when they name the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
