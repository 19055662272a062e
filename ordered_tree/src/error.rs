/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use thiserror::Error;

/// Errors reported by [`OrderedTree`](crate::OrderedTree) queries and mutations.
///
/// None of these leave the tree in a modified state: an operation that
/// returns an error made no structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The requested key is not stored in the tree.
    #[error("key not found in the tree")]
    KeyNotFound,
    /// The key is stored at the root, which has no parent.
    #[error("the root node has no parent")]
    NoParent,
    /// The operation needs at least one key but the tree is empty.
    #[error("the tree is empty")]
    EmptyTree,
}
