//! Rectangle drawing and region masking

use super::{Bitmap, BitmapMut};
use crate::box_::Box;

impl BitmapMut {
    /// Make every pixel inside `region` foreground. The region is clipped.
    pub fn set_region(&mut self, region: &Box) {
        self.fill_region(region, true);
    }

    /// Make every pixel inside `region` background. The region is clipped.
    pub fn clear_region(&mut self, region: &Box) {
        self.fill_region(region, false);
    }

    fn fill_region(&mut self, region: &Box, on: bool) {
        let Some(r) = region.clip(self.width(), self.height()) else {
            return;
        };
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                self.put(x, y, on);
            }
        }
    }

    /// Draw the one-pixel outline of `region`.
    ///
    /// Parts of the outline outside the bitmap are dropped.
    pub fn draw_box(&mut self, region: &Box) {
        if region.is_empty() {
            return;
        }
        for x in region.x..region.right() {
            self.set(x, region.y);
            self.set(x, region.last_y());
        }
        for y in region.y..region.bottom() {
            self.set(region.x, y);
            self.set(region.last_x(), y);
        }
    }
}

impl Bitmap {
    /// Copy of this bitmap with everything outside `region` cleared.
    ///
    /// The result keeps the full extent of the source.
    pub fn retain_region(&self, region: &Box) -> Bitmap {
        let mut out = self.create_template().to_mut();
        if let Some(r) = region.clip(self.width(), self.height()) {
            for y in r.y..r.bottom() {
                for x in r.x..r.right() {
                    if self.get(x, y) {
                        out.set(x, y);
                    }
                }
            }
        }
        out.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_region() {
        let mut bm = BitmapMut::new(10, 10).unwrap();
        bm.set_region(&Box::new_unchecked(8, 8, 5, 5));
        let snapshot: Bitmap = bm.clone().into();
        assert_eq!(snapshot.count_foreground(), 4);
        bm.clear_region(&Box::new_unchecked(9, 0, 1, 10));
        let bm: Bitmap = bm.into();
        assert_eq!(bm.count_foreground(), 2);
    }

    #[test]
    fn test_draw_box_outline() {
        let mut bm = BitmapMut::new(10, 10).unwrap();
        bm.draw_box(&Box::new_unchecked(2, 2, 4, 3));
        let bm: Bitmap = bm.into();
        // 4 + 4 + 1 + 1 pixels on the perimeter of a 4x3 box
        assert_eq!(bm.count_foreground(), 10);
        assert!(bm.get(2, 2));
        assert!(bm.get(5, 4));
        assert!(!bm.get(3, 3));
    }

    #[test]
    fn test_draw_single_pixel_box() {
        let mut bm = BitmapMut::new(3, 3).unwrap();
        bm.draw_box(&Box::new_unchecked(1, 1, 1, 1));
        let bm: Bitmap = bm.into();
        assert_eq!(bm.count_foreground(), 1);
    }

    #[test]
    fn test_retain_region() {
        let mut bm = BitmapMut::new(6, 6).unwrap();
        bm.set_region(&Box::new_unchecked(0, 0, 6, 6));
        let bm: Bitmap = bm.into();
        let kept = bm.retain_region(&Box::new_unchecked(1, 1, 2, 3));
        assert!(kept.sizes_equal(&bm));
        assert_eq!(kept.count_foreground(), 6);
        assert!(kept.is_subset_of(&bm));
    }
}
