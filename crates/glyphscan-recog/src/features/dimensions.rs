//! Glyph size, position on the line and background insets

use super::extent::{Span, line_span, row_span};
use super::probe::ratio;
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::StrokeIsolator;
use glyphscan_core::Bitmap;
use glyphscan_morph::dilate_brick;

/// Size and line offsets, normalised into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Placement {
    pub height: f64,
    pub width: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Placement {
    /// Relate an occupied extent to the line.
    ///
    /// An offset closer to the line than `tolerance` snaps to zero and
    /// hands its remainder to the opposite offset; if the height also
    /// matches the line both offsets snap. The height and width are then
    /// halved and the offsets shifted into `[0, 1]`, so 0.5 means "on the
    /// line".
    pub fn new(rows: Span, width: i32, line: Span, tolerance: f64) -> Self {
        let lh = f64::from(line.height());
        let height = f64::from(rows.height()) / lh;
        let width = f64::from(width) / lh;
        let mut top = f64::from(line.start - rows.start) / lh;
        let mut bottom = f64::from(line.end - rows.end) / lh;

        if top.abs() < tolerance {
            if (height - 1.0).abs() < tolerance {
                bottom = 0.0;
            } else {
                bottom -= top;
            }
            top = 0.0;
        } else if bottom.abs() < tolerance {
            top -= bottom;
            bottom = 0.0;
        }

        Self {
            height: (height / 2.0).min(1.0),
            width: (width / 2.0).min(1.0),
            top: ((top + 1.0) / 2.0).clamp(0.0, 1.0),
            bottom: ((bottom + 1.0) / 2.0).clamp(0.0, 1.0),
        }
    }
}

/// Walk from `from` by `step` while `inside` holds and the pixel is
/// background. Returns the position where the walk stopped.
pub(crate) fn walk<F>(bm: &Bitmap, from: (i32, i32), step: (i32, i32), inside: F) -> (i32, i32)
where
    F: Fn(i32, i32) -> bool,
{
    let (mut x, mut y) = from;
    while inside(x, y) && !bm.get(x, y) {
        x += step.0;
        y += step.1;
    }
    (x, y)
}

/// Insets from the four corners along the diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl Corners {
    /// Walk diagonally inwards from the corners of the box spanned by
    /// `rows` and `cols`, stopping at foreground, at the middle row, or
    /// `half` columns in from the left. Left insets are the distance
    /// covered over `half`; right insets are measured from `right_ref`.
    pub fn measure(bm: &Bitmap, rows: Span, cols: Span, half: i32, right_ref: i32) -> Self {
        let mid_x = cols.start + half;
        let mid_y = rows.start + rows.height() / 2;
        let (left, right) = (cols.start, cols.end);
        let (x, _) = walk(bm, (left, rows.start), (1, 1), |x, y| x < mid_x && y < mid_y);
        let top_left = ratio(x - left, half);
        let (x, _) = walk(bm, (left, rows.end), (1, -1), |x, y| x < mid_x && y > mid_y);
        let bottom_left = ratio(x - left, half);
        let (x, _) = walk(bm, (right, rows.start), (-1, 1), |x, y| x > mid_x && y < mid_y);
        let top_right = ratio(right_ref - x, half);
        let (x, _) = walk(bm, (right, rows.end), (-1, -1), |x, y| x > mid_x && y > mid_y);
        let bottom_right = ratio(right_ref - x, half);
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// The dimension group.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dimensions {
    placement: Placement,
    corners: Corners,
    top_mid: f64,
    bottom_mid: f64,
    mid_left: f64,
    mid_right: f64,
    lines_up: usize,
    lines_down: usize,
}

/// Number of foreground runs along row `y`.
fn count_runs(bm: &Bitmap, y: i32) -> usize {
    let w = bm.width() as i32;
    (0..w)
        .filter(|&x| bm.get(x, y) && !bm.get(x - 1, y))
        .count()
}

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Dimensions> {
    let text = s.text;
    let line = line_span(s.mask)?;
    let rows = row_span(text)?;
    let w = text.width() as i32;
    let half = (s.mask.width() / 2) as i32;
    let fh = rows.height();
    let mid_y = rows.start + fh / 2;

    let placement = Placement::new(rows, w, line, s.options.snap_tolerance);
    let cols = Span {
        start: 0,
        end: w - 1,
    };
    let corners = Corners::measure(text, rows, cols, half, s.mask.width() as i32);

    let mid_x = w / 2;
    let (_, y) = walk(text, (mid_x, rows.start), (0, 1), |_, y| y < mid_y);
    let top_mid = ratio(y - rows.start, fh / 2);
    let (_, y) = walk(text, (mid_x, rows.end), (0, -1), |_, y| y > mid_y);
    let bottom_mid = ratio(rows.end - y, fh / 2);
    let (x, _) = walk(text, (0, mid_y), (1, 0), |x, _| x < mid_x);
    let mid_left = ratio(x, mid_x);
    let (x, _) = walk(text, (w - 1, mid_y), (-1, 0), |x, _| x > mid_x);
    let mid_right = ratio(w - x, mid_x);

    let smooth = dilate_brick(text, s.options.hline_smoothing, 1)?;
    let lines_up = count_runs(&smooth, rows.start + fh / 3);
    let lines_down = count_runs(&smooth, rows.start + 2 * fh / 3);

    Ok(Dimensions {
        placement,
        corners,
        top_mid,
        bottom_mid,
        mid_left,
        mid_right,
        lines_up,
        lines_down,
    })
}

impl FeatureGroup for Dimensions {
    fn write(&self, v: &mut FeatureVector) {
        let p = &self.placement;
        v.set(index::HEIGHT, p.height);
        v.set(index::WIDTH, p.width);
        v.set(index::ASPECT, (p.width / p.height).min(1.0));
        v.set(index::TOP, p.top);
        v.set(index::BOTTOM, p.bottom);
        v.set(index::TOP_LEFT, self.corners.top_left);
        v.set(index::TOP_RIGHT, self.corners.top_right);
        v.set(index::BOTTOM_LEFT, self.corners.bottom_left);
        v.set(index::BOTTOM_RIGHT, self.corners.bottom_right);
        v.set(index::TOP_MID, self.top_mid);
        v.set(index::MID_LEFT, self.mid_left);
        v.set(index::MID_RIGHT, self.mid_right);
        v.set(index::BOTTOM_MID, self.bottom_mid);
        v.set_flag(index::TWO_HLINES_UP, self.lines_up == 2);
        v.set_flag(index::THREE_HLINES_UP, self.lines_up == 3);
        v.set_flag(index::TWO_HLINES_DOWN, self.lines_down == 2);
        v.set_flag(index::THREE_HLINES_DOWN, self.lines_down == 3);
    }
}
