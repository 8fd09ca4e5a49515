//! Connected component regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-region --test conncomp_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p glyphscan-region --test conncomp_reg
//! ```

use glyphscan_core::{Bitmap, BitmapMut, Box};
use glyphscan_region::{ComponentMap, count_components, holes};
use glyphscan_test::{RegParams, bitmap_from_ascii, filled_boxes};
use rand::prelude::*;

fn random_bitmap(rng: &mut StdRng, w: u32, h: u32, one_in: u32) -> Bitmap {
    let mut bm = BitmapMut::new(w, h).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if rng.next_u32() % one_in == 0 {
                bm.set(x, y);
            }
        }
    }
    bm.into()
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // -----------------------------------------------------------
    // Two disjoint 5x5 squares at opposite corners
    // -----------------------------------------------------------
    let squares = filled_boxes(
        50,
        50,
        &[
            Box::new_unchecked(0, 0, 5, 5),
            Box::new_unchecked(45, 45, 5, 5),
        ],
    )
    .unwrap();
    let cm = ComponentMap::new(&squares).unwrap();
    rp.compare_values(2.0, cm.len() as f64, 0.0);
    for (comp, expected) in cm.components().iter().zip([
        Box::new_unchecked(0, 0, 5, 5),
        Box::new_unchecked(45, 45, 5, 5),
    ]) {
        rp.compare_values(25.0, comp.pixel_count as f64, 0.0);
        rp.check(comp.bounds == expected, "square bounding box");
    }

    // -----------------------------------------------------------
    // Empty bitmap is valid and has no components
    // -----------------------------------------------------------
    let empty = Bitmap::new(50, 50).unwrap();
    rp.compare_values(0.0, count_components(&empty).unwrap() as f64, 0.0);

    // -----------------------------------------------------------
    // Relabeling a single rendered component yields one component
    // -----------------------------------------------------------
    for index in 0..cm.len() {
        let alone = cm.to_bitmap_by_index(index).unwrap();
        let again = ComponentMap::new(&alone).unwrap();
        rp.compare_values(1.0, again.len() as f64, 0.0);
        rp.compare_values(
            cm.components()[index].pixel_count as f64,
            again.components()[0].pixel_count as f64,
            0.0,
        );
    }

    // -----------------------------------------------------------
    // Label and bounds invariants on random bitmaps
    // -----------------------------------------------------------
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..8 {
        let bm = random_bitmap(&mut rng, 37 + round, 23, 3);
        let cm = ComponentMap::new(&bm).unwrap();
        rp.compare_values(
            cm.len() as f64,
            count_components(&bm).unwrap() as f64,
            0.0,
        );

        let total: u64 = cm.components().iter().map(|c| c.pixel_count as u64).sum();
        rp.compare_values(bm.count_foreground() as f64, total as f64, 0.0);

        let mut consistent = true;
        for y in 0..bm.height() as i32 {
            for x in 0..bm.width() as i32 {
                let label = cm.label(x, y);
                if bm.get(x, y) != (label != 0) {
                    consistent = false;
                    continue;
                }
                if label != 0 {
                    let comp = cm.component(label as usize - 1);
                    consistent &= comp.is_some_and(|c| c.bounds.contains_point(x, y));
                }
            }
        }
        rp.check(consistent, "every foreground label resolves to a containing component");
        rp.check(
            cm.components().iter().all(|c| c.pixel_count >= 1),
            "non-empty components",
        );
    }

    // -----------------------------------------------------------
    // Glyph with two holes
    // -----------------------------------------------------------
    let eight = bitmap_from_ascii(&[
        ".#####.",
        "#.....#",
        "#.....#",
        ".#####.",
        "#.....#",
        "#.....#",
        ".#####.",
    ])
    .unwrap();
    let h = holes(&eight).unwrap();
    rp.compare_values(2.0, count_components(&h).unwrap() as f64, 0.0);
    rp.write_bitmap_and_check(&h).unwrap();

    assert!(rp.cleanup(), "conncomp regression test failed");
}
