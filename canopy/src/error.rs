// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-facing errors reported by the tree and by AABB construction.

use thiserror::Error;

/// Errors produced by [`Tree`](crate::Tree) operations and [`Aabb`](crate::Aabb)
/// construction.
///
/// Every variant reflects a mistake in the caller's input. On error the tree
/// is left unchanged: inputs are validated before any node is allocated or
/// any link is rewired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree (or an AABB) was given fewer than two axes.
    #[error("dimension must be at least 2, got {0}")]
    InvalidDimension(usize),

    /// A bounds vector does not match the tree's dimensionality.
    #[error("expected {expected} components, got {got}")]
    DimensionMismatch {
        /// Number of components the tree was constructed with.
        expected: usize,
        /// Number of components the caller supplied.
        got: usize,
    },

    /// A lower bound exceeds its upper bound (NaN bounds also land here).
    #[error("lower bound exceeds upper bound on axis {axis}")]
    InvertedBounds {
        /// The offending axis.
        axis: usize,
    },

    /// The particle is already registered with the tree.
    #[error("particle is already registered")]
    DuplicateParticle,

    /// The particle is not registered with the tree.
    #[error("particle is not registered")]
    UnknownParticle,

    /// A structural or metric invariant does not hold.
    ///
    /// Only returned by [`Tree::validate`](crate::Tree::validate); a healthy
    /// tree never produces it.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}
