/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Red-black tree implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`rotate`]: The two structural primitives every fix-up is built on
//! - [`insert`]: Write path for new keys (descent, insert fix-up)
//! - [`delete`]: Removal path (transplant, delete fix-up)
//! - [`find`]: Read path (search, min/max, successor/predecessor, depth, parent)
//! - [`invariants`]: Structural checks, run after every mutation under the
//!   `unittest` feature

mod delete;
mod find;
mod insert;
mod invariants;
mod rotate;

use tracing::debug;

use crate::arena::{NodeArena, NodeIndex};
use crate::node::{Color, Node, Side};
use crate::{Inorder, NodeRef, Postorder, Preorder, StructureWalk};

/// An ordered collection of keys backed by a red-black tree.
///
/// Every public operation leaves the tree satisfying the red-black rules:
///
/// 1. NIL children are black.
/// 2. The root is black.
/// 3. A red node never has a red child.
/// 4. Every path from a node down to a NIL below it crosses the same number
///    of black nodes.
/// 5. An in-order walk yields keys in non-decreasing order. Equal keys are
///    placed to the right of the key they compare equal to at insertion
///    time.
///
/// Together these bound the height by `2 * log2(len + 1)`, so every
/// key-addressed operation is `O(log n)`.
///
/// # Arena Storage
///
/// Nodes live in a [`NodeArena`] and link to each other through
/// [`NodeIndex`] handles. An absent child or parent is `None`, which plays
/// the role of the classic shared black sentinel without any node being
/// allocated for it.
///
/// # Example
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut tree: OrderedTree<u32> = [95, 301, 501, 801, 90].into_iter().collect();
/// tree.insert(70);
/// assert_eq!(tree.delete(&301), Ok(301));
/// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [70, 90, 95, 501, 801]);
/// assert_eq!(tree.minimum(), Ok(&70));
/// assert_eq!(tree.successor(&95), Ok(Some(&501)));
/// ```
pub struct OrderedTree<K> {
    /// The root node index, `None` for an empty tree.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena<K>,
}

impl<K> OrderedTree<K> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
        }
    }

    /// Create a new empty tree able to hold `capacity` keys without
    /// reallocating its node storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            nodes: NodeArena::with_capacity(capacity),
        }
    }

    /// Number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys the tree can hold before its node storage grows.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        debug!(len = self.len(), "clearing tree");
        self.root = None;
        self.nodes.clear();
    }

    /// A handle to the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|idx| NodeRef::new(self, idx))
    }

    /// Number of black nodes on any path from the root down to a NIL,
    /// not counting the NIL itself. Zero for an empty tree.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(idx) = current {
            if self.nodes[idx].color.is_black() {
                height += 1;
            }
            current = self.nodes[idx].left;
        }
        height
    }

    /// Number of nodes on the longest root-to-leaf path. Zero for an empty
    /// tree, one for a single key.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeIndex, usize)> = self.root.into_iter().map(|r| (r, 1)).collect();
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        max
    }

    /// Iterate over the keys in ascending order. Same as [`Self::inorder`].
    pub fn iter(&self) -> Inorder<'_, K> {
        Inorder::new(self)
    }

    /// Iterate over the keys in pre-order (node, left subtree, right subtree).
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self)
    }

    /// Iterate over the keys in order (left subtree, node, right subtree),
    /// i.e. in ascending key order.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self)
    }

    /// Iterate over the keys in post-order (left subtree, right subtree, node).
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self)
    }

    /// Walk the tree structure in pre-order, exposing each node's key,
    /// color, depth and child presence.
    ///
    /// This is the hook for presentation layers: it reveals the shape of the
    /// tree without exposing how nodes are linked internally.
    pub fn walk(&self) -> StructureWalk<'_, K> {
        StructureWalk::new(self)
    }

    pub(crate) const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    pub(crate) fn node(&self, idx: NodeIndex) -> &Node<K> {
        &self.nodes[idx]
    }

    /// Color of a possibly-NIL node. NIL is black.
    fn color_of(&self, idx: Option<NodeIndex>) -> Color {
        idx.map_or(Color::Black, |idx| self.nodes[idx].color)
    }

    /// Which child of its parent `idx` is. `None` for the root.
    pub(crate) fn side_of(&self, idx: NodeIndex) -> Option<Side> {
        let parent = self.nodes[idx].parent?;
        if self.nodes[parent].left == Some(idx) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Leftmost node of the subtree rooted at `idx`.
    pub(crate) fn subtree_minimum(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    /// Rightmost node of the subtree rooted at `idx`.
    pub(crate) fn subtree_maximum(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        idx
    }

    /// In-order successor of `idx`, or `None` if `idx` holds the largest key.
    pub(crate) fn successor_index(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.neighbor_index(idx, Side::Right)
    }

    /// In-order predecessor of `idx`, or `None` if `idx` holds the smallest key.
    pub(crate) fn predecessor_index(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.neighbor_index(idx, Side::Left)
    }

    /// Next node in the direction of `side` in in-order sequence.
    ///
    /// If the node has a child on `side`, the answer is the extreme node of
    /// that subtree on the opposite side. Otherwise climb while we are the
    /// `side` child of our parent; the first ancestor reached from the other
    /// side is the answer.
    fn neighbor_index(&self, mut idx: NodeIndex, side: Side) -> Option<NodeIndex> {
        if let Some(child) = self.nodes[idx].child(side) {
            return Some(match side {
                Side::Right => self.subtree_minimum(child),
                Side::Left => self.subtree_maximum(child),
            });
        }
        let mut parent = self.nodes[idx].parent;
        while let Some(p) = parent {
            if self.nodes[p].child(side) != Some(idx) {
                break;
            }
            idx = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    /// Number of edges between the root and `idx`.
    pub(crate) fn depth_of_index(&self, mut idx: NodeIndex) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.nodes[idx].parent {
            depth += 1;
            idx = parent;
        }
        depth
    }

    /// Hook run after every mutation.
    #[inline]
    fn after_mutation(&self)
    where
        K: Ord,
    {
        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();
    }
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
