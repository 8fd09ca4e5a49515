//! Bitmap regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-core --test bitmap_reg
//! ```

use glyphscan_core::{Bitmap, BitmapMut, Box, Error};
use glyphscan_test::{RegParams, bitmap_from_ascii, bitmap_to_ascii};

#[test]
fn bitmap_reg() {
    let mut rp = RegParams::new("bitmap");

    // -----------------------------------------------------------
    // Construction and out-of-range access
    // -----------------------------------------------------------
    rp.check(
        matches!(Bitmap::new(0, 5), Err(Error::InvalidDimension { .. })),
        "zero width rejected",
    );
    let mut bm = BitmapMut::new(37, 9).unwrap();
    bm.set(-1, 0);
    bm.set(37, 8);
    bm.set(36, 8);
    rp.check(bm.set_pixel(40, 0, 1).is_err(), "checked write out of range");
    let bm: Bitmap = bm.into();
    rp.compare_values(1.0, bm.count_foreground() as f64, 0.0);
    rp.check(!bm.get(-1, 0) && !bm.get(37, 8), "outside reads background");
    rp.check(bm.get(36, 8), "last pixel written");

    // -----------------------------------------------------------
    // Boolean algebra keeps padding clean
    // -----------------------------------------------------------
    let a = bitmap_from_ascii(&["##..", "##..", "...."]).unwrap();
    let b = bitmap_from_ascii(&[".##.", ".##.", "...."]).unwrap();
    rp.compare_values(2.0, a.and(&b).unwrap().count_foreground() as f64, 0.0);
    rp.compare_values(6.0, a.or(&b).unwrap().count_foreground() as f64, 0.0);
    rp.compare_values(4.0, a.xor(&b).unwrap().count_foreground() as f64, 0.0);
    rp.compare_values(2.0, a.and_not(&b).unwrap().count_foreground() as f64, 0.0);
    rp.compare_values(8.0, a.invert().count_foreground() as f64, 0.0);
    rp.check(a.and(&b).unwrap().is_subset_of(&a), "and is a subset");
    let wide = Bitmap::new(5, 3).unwrap();
    rp.check(a.or(&wide).is_err(), "mismatched extents rejected");

    // -----------------------------------------------------------
    // Drawing, masking and foreground extents
    // -----------------------------------------------------------
    let mut frame = BitmapMut::new(6, 5).unwrap();
    frame.draw_box(&Box::new_unchecked(1, 1, 4, 3));
    let frame: Bitmap = frame.into();
    rp.compare_strings(
        bitmap_to_ascii(&frame).as_bytes(),
        b"......\n.####.\n.#..#.\n.####.\n......\n",
    );
    rp.check(
        frame.foreground_bounds() == Some(Box::new_unchecked(1, 1, 4, 3)),
        "foreground bounds",
    );
    let top = frame.retain_region(&Box::new_unchecked(0, 0, 6, 2));
    rp.compare_values(4.0, top.count_foreground() as f64, 0.0);
    rp.check(top.sizes_equal(&frame), "retained copy keeps extent");
    rp.check(Bitmap::new(4, 4).unwrap().foreground_bounds().is_none(), "blank bounds");

    assert!(rp.cleanup(), "bitmap regression test failed");
}
