/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Depth-first key iterators.
//!
//! All three traversals are iterative, using an explicit stack rather than
//! recursion, and lazy: each call to `next` does only the work needed to
//! reach the next key, so dropping the iterator early stops the walk.

use std::iter::FusedIterator;

use crate::OrderedTree;
use crate::arena::NodeIndex;

/// Pre-order traversal: node, then left subtree, then right subtree.
///
/// Created by [`OrderedTree::preorder`].
#[derive(Debug)]
pub struct Preorder<'a, K> {
    tree: &'a OrderedTree<K>,
    /// Nodes still to visit. Right children are pushed first so the left one
    /// is popped first.
    stack: Vec<NodeIndex>,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>) -> Self {
        Self {
            tree,
            stack: tree.root_index().into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx);
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// In-order traversal: left subtree, then node, then right subtree. Keys
/// come out in ascending order.
///
/// Created by [`OrderedTree::inorder`] and [`OrderedTree::iter`].
#[derive(Debug)]
pub struct Inorder<'a, K> {
    tree: &'a OrderedTree<K>,
    /// The left spine of the subtree currently being visited.
    stack: Vec<NodeIndex>,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root_index());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeIndex>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.tree.node(idx).left;
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx);
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}

/// Post-order traversal: left subtree, then right subtree, then node.
///
/// Created by [`OrderedTree::postorder`].
#[derive(Debug)]
pub struct Postorder<'a, K> {
    tree: &'a OrderedTree<K>,
    /// Stack of nodes and whether their children have already been pushed.
    stack: Vec<(NodeIndex, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>) -> Self {
        Self {
            tree,
            stack: tree
                .root_index()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, expanded) = self.stack.pop()?;
            let node = self.tree.node(idx);
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((idx, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}
