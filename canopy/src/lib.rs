// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy: a dynamic AABB tree for broad-phase overlap queries.
//!
//! Canopy is a reusable building block for physics broad phases, particle
//! simulations, and any workload that repeatedly asks "which of my moving
//! boxes might touch this one?".
//!
//! - Register particles with axis-aligned bounding boxes in 2-D or higher
//!   dimensions, then move, replace, or remove them freely.
//! - Each stored leaf box is *fattened* by a configurable skin margin, so
//!   small displacements update in O(1) without touching the tree.
//! - Insertion follows the surface-area heuristic and a local rotation
//!   step keeps subtrees shallow under churn; [`Tree::rebuild`] restores
//!   locality wholesale after heavy mutation.
//! - Queries walk the hierarchy with an explicit stack and return
//!   candidate identifiers; exact narrow-phase testing stays with the
//!   caller.
//!
//! Nodes live in a contiguous, index-addressed pool with an intrusive
//! free list; growing the pool never invalidates indices.
//!
//! # Example
//!
//! ```rust
//! use canopy::{Aabb, Tree};
//!
//! // Two nearby particles and one far away, in 2-D.
//! let mut tree: Tree<u32> = Tree::new(2)?;
//! tree.insert(1, &[0.0, 0.0], &[1.0, 1.0])?;
//! tree.insert(2, &[0.5, 0.5], &[1.5, 1.5])?;
//! tree.insert(3, &[8.0, 8.0], &[9.0, 9.0])?;
//!
//! // Candidate partners for particle 1 (never includes 1 itself).
//! assert_eq!(tree.query_particle(1)?, vec![2]);
//!
//! // Region probes work with any box of the right dimension.
//! let probe = Aabb::new(vec![7.0, 7.0], vec![10.0, 10.0])?;
//! assert_eq!(tree.query(&probe)?, vec![3]);
//! # Ok::<(), canopy::Error>(())
//! ```
//!
//! Motion inside the skin is absorbed without restructuring:
//!
//! ```rust
//! use canopy::Tree;
//!
//! // A 10% skin stores (0,0)-(1,1) as (-0.1,-0.1)-(1.1,1.1).
//! let mut tree: Tree<u32> = Tree::with_params(2, 0.1, 16, true)?;
//! tree.insert(5, &[0.0, 0.0], &[1.0, 1.0])?;
//!
//! // A small drift stays inside the fattened box: no reinsertion.
//! assert!(!tree.update(5, &[0.05, 0.05], &[1.05, 1.05], false)?);
//!
//! // A larger jump escapes the skin and relocates the leaf.
//! assert!(tree.update(5, &[0.4, 0.4], &[1.5, 1.5], false)?);
//! # Ok::<(), canopy::Error>(())
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are `f64` and are assumed finite; NaN bounds are rejected
//! at the API boundary as inverted. Whether boxes that merely touch count
//! as overlapping is a per-tree policy chosen at construction.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aabb;
pub mod error;
pub mod tree;

pub use aabb::Aabb;
pub use error::Error;
pub use tree::Tree;
