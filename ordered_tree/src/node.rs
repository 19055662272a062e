/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Node representation and the small enums shared by the tree algorithms.

use crate::arena::NodeIndex;

/// The color of a node.
///
/// An absent child (NIL) is always considered [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Freshly inserted nodes start red.
    Red,
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

/// Which child slot of its parent a node occupies.
///
/// The fix-up routines are written once in terms of a [`Side`] and its
/// [`opposite`](Side::opposite); the left and right cases are mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The mirror side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A tree node stored in the arena.
///
/// `None` in any of the link fields stands for NIL.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
}

impl<K> Node<K> {
    /// A freshly inserted node: red, detached, no children.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// The child on `side`.
    pub(crate) const fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Mutable access to the child slot on `side`.
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeIndex> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
