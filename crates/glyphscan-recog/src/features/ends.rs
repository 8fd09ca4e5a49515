//! Skeleton end points and junctions on a 3x3 grid

use super::probe::cell_hit;
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::{Isolation, StrokeIsolator};
use glyphscan_core::Bitmap;
use std::ops::Range;

/// Hits of one 3x3 grid, row-major from the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Grid(pub [bool; 9]);

impl Grid {
    /// Probe `bm` over `rows` bands and the column thirds of the bitmap.
    fn probe(bm: &Bitmap, rows: &[Range<i32>; 3]) -> Self {
        let cols = thirds(bm);
        let mut hits = [false; 9];
        for (r, band) in rows.iter().enumerate() {
            for (c, third) in cols.iter().enumerate() {
                hits[r * 3 + c] = cell_hit(bm, third.clone(), band.clone());
            }
        }
        Self(hits)
    }

    fn write(&self, v: &mut FeatureVector, base: usize) {
        for (i, &hit) in self.0.iter().enumerate() {
            v.set_flag(base + i, hit);
        }
    }
}

/// Column thirds of `bm`.
fn thirds(bm: &Bitmap) -> [Range<i32>; 3] {
    let w = bm.width() as i32;
    [0..w / 3, w / 3..2 * w / 3, 2 * w / 3..w]
}

/// Junction grid. The top-right cell skips the first glyph row.
fn crosses(bm: &Bitmap, rows: &[Range<i32>; 3]) -> Grid {
    let mut grid = Grid::probe(bm, rows);
    let [.., right] = thirds(bm);
    grid.0[2] = cell_hit(bm, right, rows[0].start + 1..rows[0].end);
    grid
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ends {
    ends: Grid,
    crosses: Grid,
}

/// Row bands of the grid. The first row is never probed.
fn bands(start: i32, end: i32) -> [Range<i32>; 3] {
    let start = start.max(1);
    let fh = end - start;
    [
        start..start + fh / 3 + 1,
        start + fh / 3 + 1..start + 2 * fh / 3 + 1,
        start + 2 * fh / 3 + 1..start + fh + 1,
    ]
}

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Ends> {
    let frame = s.frame()?;
    let rows = bands(frame.glyph.start, frame.glyph.end);

    let ends = Grid::probe(&s.isolate(Isolation::Ends)?, &rows);
    let crosses = crosses(&s.isolate(Isolation::Crosses)?, &rows);

    Ok(Ends { ends, crosses })
}

impl FeatureGroup for Ends {
    fn write(&self, v: &mut FeatureVector) {
        self.ends.write(v, index::ENDS);
        self.crosses.write(v, index::CROSSES);
    }
}
