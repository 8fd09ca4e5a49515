//! Zone probes
//!
//! A probe walks a single column or row of an isolated bitmap across one
//! zone of the glyph and reports whether it meets foreground strictly
//! inside the zone. Zones are derived from the glyph (or hole) extent:
//! vertical zones split the occupied rows into `parts` bands, horizontal
//! zones split the occupied columns into thirds.

use super::extent::Span;
use glyphscan_core::Bitmap;
use std::ops::Range;

/// Any foreground in column `x` over `rows`.
pub(crate) fn column_hit(bm: &Bitmap, x: i32, rows: Range<i32>) -> bool {
    rows.into_iter().any(|y| bm.get(x, y))
}

/// Any foreground in row `y` over `cols`.
pub(crate) fn row_hit(bm: &Bitmap, y: i32, cols: Range<i32>) -> bool {
    cols.into_iter().any(|x| bm.get(x, y))
}

/// Any foreground in the cell `cols` x `rows`.
pub(crate) fn cell_hit(bm: &Bitmap, cols: Range<i32>, rows: Range<i32>) -> bool {
    rows.into_iter().any(|y| row_hit(bm, y, cols.clone()))
}

/// `num / den` capped at 1. A zero denominator maps a zero numerator to
/// 0 and anything else to 1.
pub(crate) fn ratio(num: i32, den: i32) -> f64 {
    if den == 0 {
        return if num == 0 { 0.0 } else { 1.0 };
    }
    (f64::from(num) / f64::from(den)).min(1.0)
}

/// Where the middle zone of a probe lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MidZone {
    /// Vertical: the band above the bottom band. Horizontal bottom
    /// probes walk left from the first third down to column 0.
    Edge,
    /// Vertical: everything between the top and bottom bands.
    Notch,
}

/// The zone layout over one glyph or hole.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Zones {
    /// Occupied rows (`end` is the last occupied row)
    pub rows: Span,
    /// Vertical band count
    pub parts: i32,
    /// First occupied column
    pub left: i32,
    /// Last column a right probe starts from
    pub right: i32,
    /// Width split into thirds
    pub span: i32,
}

impl Zones {
    fn band(&self) -> i32 {
        self.rows.height() / self.parts
    }

    pub fn top_rows(&self) -> Range<i32> {
        self.rows.start..self.rows.start + self.band()
    }

    pub fn mid_rows(&self, mid: MidZone) -> Range<i32> {
        let band = self.band();
        let from = match mid {
            MidZone::Edge => self.rows.end - 2 * self.rows.height() / self.parts,
            MidZone::Notch => self.rows.start + band,
        };
        from..self.rows.end - band
    }

    pub fn bottom_rows(&self) -> Range<i32> {
        self.rows.end - self.band() + 1..self.rows.end + 1
    }

    pub fn left_cols(&self, parts: i32) -> Range<i32> {
        self.left..self.left + self.span / parts
    }

    pub fn mid_cols(&self) -> Range<i32> {
        self.left + self.span / 3..self.left + 2 * self.span / 3
    }

    /// Columns seen by a probe that walks left from the first third.
    pub fn leftward_cols(&self) -> Range<i32> {
        0..self.left + self.span / 3 + 1
    }

    pub fn right_cols(&self, parts: i32) -> Range<i32> {
        self.left + (parts - 1) * self.span / parts + 1..self.right + 1
    }
}

/// Hits of one side-probe block, in feature order: top-left, mid-left,
/// bottom-left, top-right, mid-right, bottom-right, left-top, mid-top,
/// right-top, left-bottom, mid-bottom, right-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SideHits(pub [bool; 12]);

/// The four isolated bitmaps a side-probe block reads.
pub(crate) struct SideViews {
    pub left: Bitmap,
    pub right: Bitmap,
    pub top: Bitmap,
    pub bottom: Bitmap,
}

impl SideHits {
    /// Probe left/right views down their middle column and top/bottom
    /// views along their middle row.
    pub fn probe(views: &SideViews, zones: &Zones, mid: MidZone) -> Self {
        let mut hits = [false; 12];
        for (offset, bm) in [(0, &views.left), (3, &views.right)] {
            let x = (bm.width() / 2) as i32;
            hits[offset] = column_hit(bm, x, zones.top_rows());
            hits[offset + 1] = column_hit(bm, x, zones.mid_rows(mid));
            hits[offset + 2] = column_hit(bm, x, zones.bottom_rows());
        }
        for (offset, bm) in [(6, &views.top), (9, &views.bottom)] {
            let y = (bm.height() / 2) as i32;
            let mid_cols = if offset == 9 && mid == MidZone::Edge {
                zones.leftward_cols()
            } else {
                zones.mid_cols()
            };
            hits[offset] = row_hit(bm, y, zones.left_cols(3));
            hits[offset + 1] = row_hit(bm, y, mid_cols);
            hits[offset + 2] = row_hit(bm, y, zones.right_cols(3));
        }
        Self(hits)
    }

    pub fn write(&self, v: &mut super::FeatureVector, base: usize) {
        for (i, &hit) in self.0.iter().enumerate() {
            v.set_flag(base + i, hit);
        }
    }
}
