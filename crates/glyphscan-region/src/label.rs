//! Convenience queries over [`ComponentMap`]

use crate::conncomp::ComponentMap;
use crate::error::RegionResult;
use glyphscan_core::Bitmap;

/// Number of 8-connected components in `bm`.
pub fn count_components(bm: &Bitmap) -> RegionResult<usize> {
    Ok(ComponentMap::new(bm)?.len())
}

/// Render the `rank`-th largest component by pixel count (0 = largest).
///
/// Returns `None` when the bitmap has `rank` components or fewer.
pub fn nth_largest_component(bm: &Bitmap, rank: usize) -> RegionResult<Option<Bitmap>> {
    let cm = ComponentMap::new(bm)?;
    match cm.largest_components().get(rank) {
        Some(&index) => Ok(Some(cm.to_bitmap_by_index(index)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::{BitmapMut, Box};

    #[test]
    fn test_count_and_rank() {
        let mut bm = BitmapMut::new(20, 10).unwrap();
        bm.set_region(&Box::new_unchecked(0, 0, 4, 4));
        bm.set_region(&Box::new_unchecked(10, 0, 2, 2));
        let bm: Bitmap = bm.into();
        assert_eq!(count_components(&bm).unwrap(), 2);

        let second = nth_largest_component(&bm, 1).unwrap().unwrap();
        assert_eq!(second.count_foreground(), 4);
        assert!(second.get(10, 0));
        assert!(nth_largest_component(&bm, 2).unwrap().is_none());
    }
}
