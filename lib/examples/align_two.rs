// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use display_snap::Rect;

fn main() {
    // A 27" main display and a laptop panel dropped loosely to its right.
    let base = Rect::new((0.0, 0.0), (2560.0, 1440.0));
    let mut laptop = Rect::new((2700.0, 900.0), (1920.0, 1200.0));

    let relation = laptop.relation_to(&base);
    println!("relation: {relation:?}");

    let alignment = laptop.closest_alignment(&base);
    laptop.align_to(&base, alignment);

    println!(
        "x: {} y: {} -> origin {:?}",
        alignment.x,
        alignment.y,
        laptop.origin()
    );
}
