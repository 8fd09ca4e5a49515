//! Seed fill over the background
//!
//! Hole detection treats background as 4-connected, the dual of the
//! 8-connected foreground used for labeling: a diagonal gap between two
//! stroke pixels does not let the background leak through.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use glyphscan_core::{Bitmap, BitmapMut};

const FOUR: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const EIGHT: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn neighbours(connectivity: ConnectivityType) -> &'static [(i32, i32)] {
    match connectivity {
        ConnectivityType::FourWay => &FOUR,
        ConnectivityType::EightWay => &EIGHT,
    }
}

/// Mark every background pixel of `src` reachable from `seeds` in `reached`.
fn spread(
    src: &Bitmap,
    reached: &mut BitmapMut,
    seeds: impl IntoIterator<Item = (i32, i32)>,
    connectivity: ConnectivityType,
) -> u64 {
    let steps = neighbours(connectivity);
    let mut stack: Vec<(i32, i32)> = Vec::new();
    let mut filled = 0u64;
    for (x, y) in seeds {
        if src.get(x, y) || reached.get(x, y) {
            continue;
        }
        if x < 0 || y < 0 || x as u32 >= src.width() || y as u32 >= src.height() {
            continue;
        }
        reached.set(x, y);
        filled += 1;
        stack.push((x, y));
        while let Some((cx, cy)) = stack.pop() {
            for &(dx, dy) in steps {
                let (nx, ny) = (cx + dx, cy + dy);
                if nx < 0 || ny < 0 || nx as u32 >= src.width() || ny as u32 >= src.height() {
                    continue;
                }
                if src.get(nx, ny) || reached.get(nx, ny) {
                    continue;
                }
                reached.set(nx, ny);
                filled += 1;
                stack.push((nx, ny));
            }
        }
    }
    filled
}

/// Flood the background region containing `(x, y)` with foreground.
///
/// # Returns
///
/// The number of pixels that were filled; 0 when the seed is foreground.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed lies outside the bitmap.
pub fn floodfill(
    bm: &mut BitmapMut,
    x: i32,
    y: i32,
    connectivity: ConnectivityType,
) -> RegionResult<u64> {
    if x < 0 || y < 0 || x as u32 >= bm.width() || y as u32 >= bm.height() {
        return Err(RegionError::InvalidSeed { x, y });
    }
    let src: Bitmap = bm.clone().into();
    let mut reached = BitmapMut::new(src.width(), src.height())?;
    let filled = spread(&src, &mut reached, [(x, y)], connectivity);
    bm.or_inplace(&reached.into())?;
    Ok(filled)
}

/// Background pixels connected to the bitmap border.
pub fn background_from_border(bm: &Bitmap, connectivity: ConnectivityType) -> RegionResult<Bitmap> {
    let w = bm.width() as i32;
    let h = bm.height() as i32;
    let border = (0..w)
        .flat_map(|x| [(x, 0), (x, h - 1)])
        .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]));
    let mut reached = BitmapMut::new(bm.width(), bm.height())?;
    spread(bm, &mut reached, border, connectivity);
    Ok(reached.into())
}

/// Background regions fully enclosed by foreground.
///
/// Background is traversed with 4-connectivity.
pub fn holes(bm: &Bitmap) -> RegionResult<Bitmap> {
    let outside = background_from_border(bm, ConnectivityType::FourWay)?;
    let mut enclosed = bm.invert().to_mut();
    enclosed.subtract_inplace(&outside)?;
    Ok(enclosed.into())
}

/// The bitmap with every hole filled.
pub fn fill_holes(bm: &Bitmap) -> RegionResult<Bitmap> {
    Ok(bm.or(&holes(bm)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::Box;

    fn ring() -> Bitmap {
        let mut bm = BitmapMut::new(7, 7).unwrap();
        bm.draw_box(&Box::new_unchecked(1, 1, 5, 5));
        bm.into()
    }

    #[test]
    fn test_holes_of_ring() {
        let h = holes(&ring()).unwrap();
        assert_eq!(h.count_foreground(), 9);
        assert!(h.get(3, 3));
        assert!(!h.get(0, 0));
    }

    #[test]
    fn test_diagonal_gap_still_encloses() {
        // A diamond with only diagonal contacts keeps its centre enclosed.
        let mut bm = BitmapMut::new(5, 5).unwrap();
        for (x, y) in [(2, 0), (1, 1), (3, 1), (0, 2), (4, 2), (1, 3), (3, 3), (2, 4)] {
            bm.set(x, y);
        }
        let h = holes(&bm.into()).unwrap();
        assert_eq!(h.count_foreground(), 5);
        assert!(h.get(2, 2));
    }

    #[test]
    fn test_fill_holes() {
        let filled = fill_holes(&ring()).unwrap();
        assert_eq!(filled.count_foreground(), 25);
    }

    #[test]
    fn test_floodfill() {
        let mut bm = ring().to_mut();
        assert_eq!(floodfill(&mut bm, 3, 3, ConnectivityType::FourWay).unwrap(), 9);
        assert_eq!(floodfill(&mut bm, 3, 3, ConnectivityType::FourWay).unwrap(), 0);
        assert!(matches!(
            floodfill(&mut bm, 7, 0, ConnectivityType::FourWay),
            Err(RegionError::InvalidSeed { x: 7, y: 0 })
        ));
        let outside = floodfill(&mut bm, 0, 0, ConnectivityType::EightWay).unwrap();
        assert_eq!(outside, 49 - 25);
    }
}
