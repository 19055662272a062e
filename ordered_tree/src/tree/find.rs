/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: key lookup and ordered navigation.
//!
//! Every lookup uses the same descent rule as insertion: go left when the
//! searched key is smaller than the node's key, right when it is greater,
//! stop when they are equal. Delete, depth and parent queries all go through
//! [`OrderedTree::find`], so they always agree on which node a key names.

use std::cmp::Ordering;

use super::OrderedTree;
use crate::arena::NodeIndex;
use crate::{NodeRef, TreeError};

impl<K: Ord> OrderedTree<K> {
    /// Locate the node holding `key`.
    pub(crate) fn find(&self, key: &K) -> Option<NodeIndex> {
        self.find_with_depth(key).map(|(idx, _)| idx)
    }

    /// Locate the node holding `key`, along with the number of edges
    /// traversed from the root to reach it.
    fn find_with_depth(&self, key: &K) -> Option<(NodeIndex, usize)> {
        let mut current = self.root;
        let mut depth = 0;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some((idx, depth)),
            };
            depth += 1;
        }
        None
    }

    /// Find the node holding `key`.
    ///
    /// Returns a handle that can be used to inspect the node and navigate
    /// from it, or `None` if the key is absent.
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.find(key).map(|idx| NodeRef::new(self, idx))
    }

    /// Returns `true` if an equal key is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no keys.
    pub fn minimum(&self) -> Result<&K, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        Ok(&self.nodes[self.subtree_minimum(root)].key)
    }

    /// The largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no keys.
    pub fn maximum(&self) -> Result<&K, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        Ok(&self.nodes[self.subtree_maximum(root)].key)
    }

    /// The key following `key` in sorted order, or `Ok(None)` if `key` is
    /// the largest.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyTree`] if the tree holds no keys.
    /// - [`TreeError::KeyNotFound`] if `key` is not stored.
    pub fn successor(&self, key: &K) -> Result<Option<&K>, TreeError> {
        let idx = self.find_non_empty(key)?;
        Ok(self.successor_index(idx).map(|s| &self.nodes[s].key))
    }

    /// The key preceding `key` in sorted order, or `Ok(None)` if `key` is
    /// the smallest.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyTree`] if the tree holds no keys.
    /// - [`TreeError::KeyNotFound`] if `key` is not stored.
    pub fn predecessor(&self, key: &K) -> Result<Option<&K>, TreeError> {
        let idx = self.find_non_empty(key)?;
        Ok(self.predecessor_index(idx).map(|p| &self.nodes[p].key))
    }

    /// Number of edges between the root and the node holding `key`. The
    /// root is at depth 0.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if `key` is not stored.
    pub fn depth_of(&self, key: &K) -> Result<usize, TreeError> {
        self.find_with_depth(key)
            .map(|(_, depth)| depth)
            .ok_or(TreeError::KeyNotFound)
    }

    /// The key stored in the parent of the node holding `key`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::KeyNotFound`] if `key` is not stored.
    /// - [`TreeError::NoParent`] if `key` is stored at the root.
    pub fn parent_of(&self, key: &K) -> Result<&K, TreeError> {
        let idx = self.find(key).ok_or(TreeError::KeyNotFound)?;
        let parent = self.nodes[idx].parent.ok_or(TreeError::NoParent)?;
        Ok(&self.nodes[parent].key)
    }

    fn find_non_empty(&self, key: &K) -> Result<NodeIndex, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        self.find(key).ok_or(TreeError::KeyNotFound)
    }
}
