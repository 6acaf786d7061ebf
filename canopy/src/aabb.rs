// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes of arbitrary dimensionality.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;

/// An axis-aligned bounding box in `d >= 2` dimensions.
///
/// The box stores its lower and upper corners together with two derived
/// quantities that the tree reads on every placement decision: the surface
/// area (the generalized "sum of side areas", a monotone proxy for query
/// cost) and the centre point. Both are recomputed whenever the bounds
/// change, so they are always consistent with the corners.
///
/// Bounds are validated on construction: the corner vectors must have equal
/// lengths of at least two, and `lower[i] <= upper[i]` must hold on every
/// axis. The comparison is written so that NaN bounds fail it as well.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb {
    lower: Vec<f64>,
    upper: Vec<f64>,
    centre: Vec<f64>,
    surface_area: f64,
}

impl Aabb {
    /// Create a box from its lower and upper corners.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, Error> {
        if lower.len() != upper.len() {
            return Err(Error::DimensionMismatch {
                expected: lower.len(),
                got: upper.len(),
            });
        }
        if lower.len() < 2 {
            return Err(Error::InvalidDimension(lower.len()));
        }
        for axis in 0..lower.len() {
            if !(lower[axis] <= upper[axis]) {
                return Err(Error::InvertedBounds { axis });
            }
        }
        Ok(Self::from_bounds(lower, upper))
    }

    /// Build a box from bounds that are already known to be well formed,
    /// recomputing the cached surface area and centre.
    pub(crate) fn from_bounds(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        let surface_area = surface_area_of(&lower, &upper);
        let centre = centre_of(&lower, &upper);
        Self {
            lower,
            upper,
            centre,
            surface_area,
        }
    }

    /// A zero-extent placeholder box, used to size fresh pool slots.
    pub(crate) fn sized(dimension: usize) -> Self {
        Self {
            lower: vec![0.0; dimension],
            upper: vec![0.0; dimension],
            centre: vec![0.0; dimension],
            surface_area: 0.0,
        }
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// The lower corner.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// The upper corner.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// The componentwise midpoint.
    pub fn centre(&self) -> &[f64] {
        &self.centre
    }

    /// The cached surface area.
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// The smallest box enclosing `self` and `other`.
    pub fn merge(&self, other: &Aabb) -> Aabb {
        debug_assert_eq!(self.dimension(), other.dimension());

        let mut lower = Vec::with_capacity(self.lower.len());
        let mut upper = Vec::with_capacity(self.upper.len());
        for i in 0..self.lower.len() {
            lower.push(self.lower[i].min(other.lower[i]));
            upper.push(self.upper[i].max(other.upper[i]));
        }
        Self::from_bounds(lower, upper)
    }

    /// Whether `other` lies entirely inside `self` (shared faces count).
    pub fn contains(&self, other: &Aabb) -> bool {
        debug_assert_eq!(self.dimension(), other.dimension());

        for i in 0..self.lower.len() {
            if other.lower[i] < self.lower[i] {
                return false;
            }
            if other.upper[i] > self.upper[i] {
                return false;
            }
        }
        true
    }

    /// Whether `other` overlaps `self`.
    ///
    /// With `touch_is_overlap` boxes that merely share a face are reported
    /// as overlapping; without it the test is strict.
    pub fn overlaps(&self, other: &Aabb, touch_is_overlap: bool) -> bool {
        debug_assert_eq!(self.dimension(), other.dimension());

        if touch_is_overlap {
            for i in 0..self.lower.len() {
                if other.upper[i] < self.lower[i] || other.lower[i] > self.upper[i] {
                    return false;
                }
            }
        } else {
            for i in 0..self.lower.len() {
                if other.upper[i] <= self.lower[i] || other.lower[i] >= self.upper[i] {
                    return false;
                }
            }
        }
        true
    }
}

/// Sum over the axes of the product of all other extents, doubled.
///
/// In 2-D this is twice the perimeter-sum, in 3-D the usual surface area.
fn surface_area_of(lower: &[f64], upper: &[f64]) -> f64 {
    let mut sum = 0.0;
    for d1 in 0..lower.len() {
        // Hold one axis fixed and multiply the extents of all the others.
        let mut product = 1.0;
        for d2 in 0..lower.len() {
            if d1 == d2 {
                continue;
            }
            product *= upper[d2] - lower[d2];
        }
        sum += product;
    }
    2.0 * sum
}

fn centre_of(lower: &[f64], upper: &[f64]) -> Vec<f64> {
    let mut centre = Vec::with_capacity(lower.len());
    for i in 0..lower.len() {
        centre.push(0.5 * (lower[i] + upper[i]));
    }
    centre
}
