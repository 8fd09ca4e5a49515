//! Gap linking along rows and columns
//!
//! A background run is bridged when it has foreground on both ends and is
//! at most `gap` pixels long. Runs touching the bitmap border are never
//! bridged. Linking only adds foreground, and a larger gap bridges a
//! superset of the runs a smaller one does.

use crate::error::MorphResult;
use glyphscan_core::{Bitmap, BitmapMut};

/// Bridge horizontal background runs of at most `gap` pixels.
pub fn hlink(bm: &Bitmap, gap: u32) -> MorphResult<Bitmap> {
    let mut out = bm.to_mut();
    for y in 0..bm.height() as i32 {
        link_line(&mut out, bm.width() as i32, gap, |i| (i, y));
    }
    Ok(out.into())
}

/// Bridge vertical background runs of at most `gap` pixels.
pub fn vlink(bm: &Bitmap, gap: u32) -> MorphResult<Bitmap> {
    let mut out = bm.to_mut();
    for x in 0..bm.width() as i32 {
        link_line(&mut out, bm.height() as i32, gap, |i| (x, i));
    }
    Ok(out.into())
}

fn link_line<F>(out: &mut BitmapMut, len: i32, gap: u32, at: F)
where
    F: Fn(i32) -> (i32, i32),
{
    let mut last_on: Option<i32> = None;
    for i in 0..len {
        let (x, y) = at(i);
        if !out.get(x, y) {
            continue;
        }
        if let Some(prev) = last_on {
            let run = (i - prev - 1) as u32;
            if run > 0 && run <= gap {
                for j in prev + 1..i {
                    let (fx, fy) = at(j);
                    out.set(fx, fy);
                }
            }
        }
        last_on = Some(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pattern: &str) -> Bitmap {
        let mut bm = BitmapMut::new(pattern.len() as u32, 1).unwrap();
        for (x, c) in pattern.chars().enumerate() {
            if c == '#' {
                bm.set(x as i32, 0);
            }
        }
        bm.into()
    }

    fn render(bm: &Bitmap) -> String {
        (0..bm.width() as i32)
            .map(|x| if bm.get(x, 0) { '#' } else { '.' })
            .collect()
    }

    #[test]
    fn test_hlink_bridges_short_gaps() {
        let bm = row("..#.#...#....#..");
        assert_eq!(render(&hlink(&bm, 0).unwrap()), "..#.#...#....#..");
        assert_eq!(render(&hlink(&bm, 1).unwrap()), "..###...#....#..");
        assert_eq!(render(&hlink(&bm, 3).unwrap()), "..#######....#..");
        assert_eq!(render(&hlink(&bm, 4).unwrap()), "..############..");
    }

    #[test]
    fn test_vlink_bridges_columns() {
        let mut bm = BitmapMut::new(1, 6).unwrap();
        bm.set(0, 0);
        bm.set(0, 3);
        let bm: Bitmap = bm.into();
        let linked = vlink(&bm, 2).unwrap();
        assert_eq!(linked.count_foreground(), 4);
        assert!(!linked.get(0, 4));
        assert_eq!(vlink(&bm, 1).unwrap(), bm);
    }
}
