// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render the tree before and after an offline rebuild.
//!
//! Run:
//! - `cargo run -p canopy_demos --example tree_ascii`

use canopy::{Error, Tree};

fn report(tree: &Tree<u32>) {
    println!("{tree}");
    println!(
        "height = {}, nodes = {}, max balance = {}, area ratio = {:.3}\n",
        tree.height(),
        tree.node_count(),
        tree.maximum_balance(),
        tree.surface_area_ratio(),
    );
}

fn main() -> Result<(), Error> {
    let mut tree: Tree<u32> = Tree::new(2)?;

    // Insert a strip of boxes in the worst order for a greedy build.
    for i in 0..8u32 {
        let x = f64::from(i) * 2.0;
        tree.insert(i, &[x, 0.0], &[x + 1.0, 1.0])?;
    }
    report(&tree);

    tree.rebuild();
    tree.validate()?;
    report(&tree);

    Ok(())
}
