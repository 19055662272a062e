/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural introspection of the tree.
//!
//! [`StructureWalk`] exposes the shape and coloring of the tree one node at
//! a time, which is all a dumper or visualizer needs. The [`fmt::Debug`]
//! implementation of [`OrderedTree`] is built on top of it.

use std::fmt;
use std::iter::FusedIterator;

use crate::OrderedTree;
use crate::arena::NodeIndex;
use crate::node::{Color, Side};

/// One node as seen by a [`StructureWalk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a, K> {
    /// The key stored in the node.
    pub key: &'a K,
    /// The node's color.
    pub color: Color,
    /// Number of edges between the root and the node.
    pub depth: usize,
    /// Which child of its parent the node is, `None` for the root.
    pub side: Option<Side>,
    /// Whether the left child is a real node rather than NIL.
    pub has_left: bool,
    /// Whether the right child is a real node rather than NIL.
    pub has_right: bool,
}

/// Pre-order walk over the tree structure.
///
/// Created by [`OrderedTree::walk`].
#[derive(Debug)]
pub struct StructureWalk<'a, K> {
    tree: &'a OrderedTree<K>,
    stack: Vec<(NodeIndex, usize, Option<Side>)>,
}

impl<'a, K> StructureWalk<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>) -> Self {
        Self {
            tree,
            stack: tree
                .root_index()
                .map(|root| (root, 0, None))
                .into_iter()
                .collect(),
        }
    }
}

impl<'a, K> Iterator for StructureWalk<'a, K> {
    type Item = NodeView<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth, side) = self.stack.pop()?;
        let node = self.tree.node(idx);
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1, Some(Side::Right)));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1, Some(Side::Left)));
        }
        Some(NodeView {
            key: &node.key,
            color: node.color,
            depth,
            side,
            has_left: node.left.is_some(),
            has_right: node.right.is_some(),
        })
    }
}

impl<K> FusedIterator for StructureWalk<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for OrderedTree<K> {
    /// One line per node in pre-order, indented by depth:
    ///
    /// ```text
    /// 2 (Black)
    ///   L 1 (Red)
    ///   R 3 (Red)
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        for view in self.walk() {
            let indent = "  ".repeat(view.depth);
            let marker = match view.side {
                None => "",
                Some(Side::Left) => "L ",
                Some(Side::Right) => "R ",
            };
            writeln!(f, "{indent}{marker}{:?} ({:?})", view.key, view.color)?;
        }
        Ok(())
    }
}
