// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase candidate pairs over a handful of moving particles.
//!
//! Insert a small cluster plus a loner, list candidate pairs, then move
//! one particle and watch the pair set change.
//!
//! Run:
//! - `cargo run -p canopy_demos --example broad_phase_basics`

use canopy::{Error, Tree};

fn candidate_pairs(tree: &Tree<u32>, ids: &[u32]) -> Result<Vec<(u32, u32)>, Error> {
    let mut pairs = Vec::new();
    for &a in ids {
        for b in tree.query_particle(a)? {
            if a < b {
                pairs.push((a, b));
            }
        }
    }
    pairs.sort_unstable();
    Ok(pairs)
}

fn main() -> Result<(), Error> {
    let mut tree: Tree<u32> = Tree::with_params(2, 0.05, 16, true)?;

    // A cluster around the origin and a loner far away.
    tree.insert(0, &[0.0, 0.0], &[2.0, 2.0])?;
    tree.insert(1, &[1.0, 1.0], &[3.0, 3.0])?;
    tree.insert(2, &[1.5, 0.5], &[2.5, 1.5])?;
    tree.insert(3, &[20.0, 20.0], &[21.0, 21.0])?;
    let ids = [0, 1, 2, 3];

    println!("pairs: {:?}", candidate_pairs(&tree, &ids)?);

    // Drift the loner slightly; the skin absorbs it.
    let moved = tree.update(3, &[20.05, 20.05], &[21.05, 21.05], false)?;
    println!("loner drifted, reinserted: {moved}");

    // Now drop it into the middle of the cluster.
    let moved = tree.update(3, &[1.0, 0.0], &[2.0, 1.0], false)?;
    println!("loner jumped, reinserted: {moved}");
    println!("pairs: {:?}", candidate_pairs(&tree, &ids)?);

    Ok(())
}
