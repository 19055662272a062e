/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! OrderedTree - An ordered collection of keys backed by a red-black tree.
//!
//! This crate provides a self-balancing binary search tree over any key type
//! with a total order. It is meant as a building block for ordered sets,
//! secondary indexes and priority structures.
//!
//! # Overview
//!
//! - `O(log n)` insertion, deletion and exact-key lookup
//! - Minimum/maximum, successor/predecessor and depth/parent queries
//! - Lazy pre-order, in-order and post-order key iterators
//! - A read-only structural walk ([`OrderedTree::walk`]) for dumpers and
//!   visualizers
//!
//! Nodes are stored in an arena and linked by index, so rotations are a few
//! index writes and no `unsafe` code is involved.
//!
//! # Example
//!
//! ```
//! use ordered_tree::{Color, OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! for key in [95, 301, 501, 801, 90, 70, 80, 25, 67, 89, 11] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
//! assert_eq!(tree.minimum(), Ok(&11));
//! assert_eq!(tree.predecessor(&90), Ok(Some(&89)));
//!
//! assert_eq!(tree.delete(&89), Ok(89));
//! assert_eq!(tree.delete(&89), Err(TreeError::KeyNotFound));
//! assert_eq!(
//!     tree.inorder().copied().collect::<Vec<_>>(),
//!     [11, 25, 67, 70, 80, 90, 95, 301, 501, 801],
//! );
//! ```

mod arena;
mod debug;
mod error;
mod iter;
mod node;
mod node_ref;
mod tree;

pub use debug::{NodeView, StructureWalk};
pub use error::TreeError;
pub use iter::{Inorder, Postorder, Preorder};
pub use node::{Color, Side};
pub use node_ref::NodeRef;
pub use tree::OrderedTree;
