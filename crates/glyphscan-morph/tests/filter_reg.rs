//! Morphological filter regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-morph --test filter_reg
//! ```

use glyphscan_core::{Bitmap, BitmapMut, Box};
use glyphscan_morph::{
    RemoveDotsOptions, count_objects, filter_by_size, filter_fill, filter_obj_max_height,
    filter_remove_dots, hlink, neighbour_count, vlink,
};
use glyphscan_region::ComponentMap;
use glyphscan_test::RegParams;
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
fn filter_reg() {
    let mut rp = RegParams::new("filter");
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..6 {
        let bm = random_bitmap(&mut rng, 40, 30 + round, 4);

        // -----------------------------------------------------------
        // Size filtering never adds foreground
        // -----------------------------------------------------------
        let small = filter_by_size(&bm, 1, 3, 1, 3).unwrap();
        rp.check(small.is_subset_of(&bm), "filter_by_size is a subset");

        // -----------------------------------------------------------
        // count_objects agrees with ComponentMap
        // -----------------------------------------------------------
        let cm = ComponentMap::new(&bm).unwrap();
        rp.compare_values(cm.len() as f64, count_objects(&bm).unwrap() as f64, 0.0);

        // -----------------------------------------------------------
        // Linking is monotonic in the gap
        // -----------------------------------------------------------
        let mut prev_h = bm.clone();
        let mut prev_v = bm.clone();
        let mut monotonic = true;
        for gap in 0..6 {
            let hl = hlink(&bm, gap).unwrap();
            let vl = vlink(&bm, gap).unwrap();
            monotonic &= prev_h.is_subset_of(&hl) && prev_v.is_subset_of(&vl);
            prev_h = hl;
            prev_v = vl;
        }
        rp.check(monotonic, "hlink/vlink monotonic in gap");

        // -----------------------------------------------------------
        // Fill keeps the input; max-height keeps a subset
        // -----------------------------------------------------------
        let filled = filter_fill(&bm).unwrap();
        rp.check(bm.is_subset_of(&filled), "filter_fill is a superset");

        let band = filter_obj_max_height(&bm, 2).unwrap();
        rp.check(band.is_subset_of(&bm), "filter_obj_max_height is a subset");
        let band_map = ComponentMap::new(&band).unwrap();
        rp.check(
            band_map.components().iter().all(|c| c.bounds.h <= 2),
            "max-height components are short",
        );
    }

    // -----------------------------------------------------------
    // Dot removal: large region survives eroded, nearby specks go
    // -----------------------------------------------------------
    let mut canvas = BitmapMut::new(40, 40).unwrap();
    let region = Box::new_unchecked(10, 10, 16, 16);
    canvas.set_region(&region);
    let specks = [(8, 12), (28, 20), (18, 8), (15, 28)];
    for (x, y) in specks {
        canvas.set(x, y);
    }
    let canvas: Bitmap = canvas.into();
    let opts = RemoveDotsOptions::default();
    let cleaned = opts.apply(&canvas).unwrap();
    let direct = filter_remove_dots(&canvas, opts.erosion_n, opts.dilation_n).unwrap();
    rp.compare_bitmaps(&cleaned, &direct);

    for (x, y) in specks {
        rp.check(!cleaned.get(x, y), "speck removed");
    }
    let mut kept_ok = true;
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            let black = neighbour_count(&canvas, x, y);
            if black >= 8 - opts.erosion_n + 1 {
                kept_ok &= cleaned.get(x, y);
            }
        }
    }
    rp.check(kept_ok, "interior of the large region preserved");
    rp.check(cleaned.is_subset_of(&canvas), "large-only canvas only erodes");
    rp.write_bitmap_and_check(&cleaned).unwrap();

    assert!(rp.cleanup(), "filter regression test failed");
}
