// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Canopy: insert, query, and move particles.

use canopy::{Aabb, Error, Tree};

fn main() -> Result<(), Error> {
    let mut tree: Tree<u32> = Tree::new(2)?;
    tree.insert(1, &[0.0, 0.0], &[1.0, 1.0])?;
    tree.insert(2, &[0.5, 0.5], &[1.5, 1.5])?;
    tree.insert(3, &[4.0, 4.0], &[5.0, 5.0])?;

    println!("partners of 1: {:?}", tree.query_particle(1)?);

    let probe = Aabb::new(vec![3.5, 3.5], vec![6.0, 6.0])?;
    println!("hits in probe: {:?}", tree.query(&probe)?);

    // A drift inside the skin is absorbed without restructuring.
    let moved = tree.update(3, &[4.01, 4.01], &[5.01, 5.01], false)?;
    println!("small drift reinserted: {moved}");

    // A jump across the world relocates the leaf.
    let moved = tree.update(3, &[0.2, 0.2], &[1.2, 1.2], false)?;
    println!("large jump reinserted: {moved}");
    println!("partners of 1 now: {:?}", tree.query_particle(1)?);

    Ok(())
}
