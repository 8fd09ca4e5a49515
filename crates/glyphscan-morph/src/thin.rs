//! Skeletonization and skeleton key points
//!
//! [`thin`] reduces strokes to 1-pixel wide skeletons with the two
//! sub-iteration parallel thinning scheme of Zhang and Suen
//! ("A fast parallel algorithm for thinning digital patterns",
//! CACM 27(3), 1984). Connectivity of every 8-connected component is
//! preserved.
//!
//! Key points are classified by the crossing number of a skeleton pixel:
//! the count of background-to-foreground transitions walking once around
//! its 8-neighbourhood.

use crate::binary::NEIGHBOURS;
use crate::error::MorphResult;
use glyphscan_core::{Bitmap, BitmapMut};

/// Neighbour pattern `[N, NE, E, SE, S, SW, W, NW]`.
fn ring(bm: &BitmapMut, x: i32, y: i32) -> [bool; 8] {
    NEIGHBOURS.map(|(dx, dy)| bm.get(x + dx, y + dy))
}

fn ring_of(bm: &Bitmap, x: i32, y: i32) -> [bool; 8] {
    NEIGHBOURS.map(|(dx, dy)| bm.get(x + dx, y + dy))
}

fn transitions(p: &[bool; 8]) -> u32 {
    (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count() as u32
}

fn deletable(p: &[bool; 8], first_pass: bool) -> bool {
    let count = p.iter().filter(|&&b| b).count();
    if !(2..=6).contains(&count) || transitions(p) != 1 {
        return false;
    }
    let [n, _, e, _, s, _, w, _] = *p;
    if first_pass {
        !(n && e && s) && !(e && s && w)
    } else {
        !(n && e && w) && !(n && s && w)
    }
}

/// Thin every stroke of `bm` to a 1-pixel wide skeleton.
pub fn thin(bm: &Bitmap) -> MorphResult<Bitmap> {
    let mut cur = bm.to_mut();
    let w = bm.width() as i32;
    let h = bm.height() as i32;
    let mut marked: Vec<(i32, i32)> = Vec::new();
    loop {
        let mut changed = false;
        for first_pass in [true, false] {
            marked.clear();
            for y in 0..h {
                for x in 0..w {
                    if cur.get(x, y) && deletable(&ring(&cur, x, y), first_pass) {
                        marked.push((x, y));
                    }
                }
            }
            changed |= !marked.is_empty();
            for &(x, y) in &marked {
                cur.clear(x, y);
            }
        }
        if !changed {
            break;
        }
    }
    Ok(cur.into())
}

/// Skeleton end points: pixels with a single neighbour, or two touching
/// neighbours.
pub fn endpoints(skel: &Bitmap) -> MorphResult<Bitmap> {
    key_points(skel, |p| {
        let count = p.iter().filter(|&&b| b).count();
        count == 1 || (count == 2 && transitions(p) == 1)
    })
}

/// Skeleton junctions: pixels where three or more branches meet.
pub fn junctions(skel: &Bitmap) -> MorphResult<Bitmap> {
    key_points(skel, |p| transitions(p) >= 3)
}

fn key_points<F>(skel: &Bitmap, accept: F) -> MorphResult<Bitmap>
where
    F: Fn(&[bool; 8]) -> bool,
{
    let mut out = BitmapMut::new(skel.width(), skel.height())?;
    for y in 0..skel.height() as i32 {
        for x in 0..skel.width() as i32 {
            if skel.get(x, y) && accept(&ring_of(skel, x, y)) {
                out.set(x, y);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::Box;
    use glyphscan_region::count_components;

    fn bar(w: u32, h: u32, r: Box) -> Bitmap {
        let mut bm = BitmapMut::new(w, h).unwrap();
        bm.set_region(&r);
        bm.into()
    }

    #[test]
    fn test_thin_thick_bar() {
        let bm = bar(20, 9, Box::new_unchecked(2, 2, 15, 5));
        let skel = thin(&bm).unwrap();
        assert!(skel.is_subset_of(&bm));
        assert!(!skel.is_blank());
        assert_eq!(count_components(&skel).unwrap(), 1);
        // one pixel thick along the middle of the bar
        for x in 5..14 {
            let column: u32 = (0..9).map(|y| u32::from(skel.get(x, y))).sum();
            assert_eq!(column, 1, "column {x}");
        }
    }

    #[test]
    fn test_endpoints_of_line() {
        let bm = bar(12, 3, Box::new_unchecked(1, 1, 10, 1));
        let ends = endpoints(&bm).unwrap();
        assert_eq!(ends.count_foreground(), 2);
        assert!(ends.get(1, 1) && ends.get(10, 1));
        assert!(junctions(&bm).unwrap().is_blank());
    }

    #[test]
    fn test_junction_of_tee() {
        let mut bm = BitmapMut::new(11, 11).unwrap();
        bm.set_region(&Box::new_unchecked(1, 1, 9, 1));
        bm.set_region(&Box::new_unchecked(5, 2, 1, 8));
        let bm: Bitmap = bm.into();
        let j = junctions(&bm).unwrap();
        assert_eq!(j.count_foreground(), 1);
        assert!(j.get(5, 1));
        assert_eq!(endpoints(&bm).unwrap().count_foreground(), 3);
    }
}
