/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for tree nodes.
//!
//! Nodes are stored in a slab and refer to each other through [`NodeIndex`]
//! handles instead of pointers. Parent/child cycles are therefore plain
//! integers, and a rotation is a handful of index writes.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::node::Node;

/// Index of a node inside a [`NodeArena`].
///
/// Stable for as long as the node it refers to is alive: inserting or
/// removing other nodes never moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeIndex(usize);

/// Arena storage for [`Node`]s.
///
/// Newtype around [`Slab<Node<K>>`] providing type-safe indexing via
/// [`NodeIndex`] instead of raw `usize` keys.
#[derive(Debug)]
pub(crate) struct NodeArena<K> {
    nodes: Slab<Node<K>>,
}

impl<K> NodeArena<K> {
    /// Create a new empty arena.
    pub(crate) const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Create an arena able to hold `capacity` nodes without reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the arena can hold before growing.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Store a node, returning its index.
    pub(crate) fn insert(&mut self, node: Node<K>) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index does not refer to a live node.
    pub(crate) fn remove(&mut self, idx: NodeIndex) -> Node<K> {
        self.nodes.remove(idx.0)
    }

    /// Drop every node. Previously handed out indices become dangling.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate over every live node, in slot order (not tree order).
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node<K>)> {
        self.nodes.iter().map(|(key, node)| (NodeIndex(key), node))
    }
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<NodeIndex> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.0]
    }
}

impl<K> IndexMut<NodeIndex> for NodeArena<K> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.0]
    }
}
