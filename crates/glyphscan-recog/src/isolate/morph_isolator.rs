//! Stroke isolation built from run analysis and the morphology crates
//!
//! Bars, diagonals and edges are unions of maximal foreground runs along
//! one direction, selected by length and by where they start or end
//! relative to the glyph bounding box. Notches are background pixels
//! that are open towards one side of the glyph and walled in on the two
//! perpendicular sides. Holes, skeleton key points and the second object
//! come from `glyphscan-region` and `glyphscan-morph`.

use super::{Isolation, StrokeIsolator};
use crate::error::{RecogError, RecogResult};
use glyphscan_core::{Bitmap, BitmapMut, Box};
use glyphscan_morph::{endpoints, junctions, thin};
use glyphscan_region::{ComponentMap, holes, nth_largest_component};

/// Tuning for [`MorphIsolator`]
#[derive(Debug, Clone, PartialEq)]
pub struct IsolatorOptions {
    /// Bars must span this fraction of the longer glyph side (default: 0.5)
    pub bar_fraction: f64,
    /// Diagonal strokes must span this fraction of the longer glyph side
    /// (default: 0.4)
    pub diagonal_fraction: f64,
    /// Shortest run that counts as a bar or diagonal (default: 3)
    pub min_run: u32,
    /// Edges must start within this fraction of the glyph from their side
    /// (default: 0.25)
    pub edge_reach: f64,
    /// Big edges must start within this fraction from their side
    /// (default: 0.125)
    pub big_edge_reach: f64,
    /// Big edges must span this fraction of the glyph (default: 0.5)
    pub big_edge_span: f64,
    /// Holes smaller than this many pixels are ignored (default: 2)
    pub min_hole_area: u32,
}

impl Default for IsolatorOptions {
    fn default() -> Self {
        Self {
            bar_fraction: 0.5,
            diagonal_fraction: 0.4,
            min_run: 3,
            edge_reach: 0.25,
            big_edge_reach: 0.125,
            big_edge_span: 0.5,
            min_hole_area: 2,
        }
    }
}

impl IsolatorOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar length fraction
    pub fn with_bar_fraction(mut self, fraction: f64) -> Self {
        self.bar_fraction = fraction;
        self
    }

    /// Set the diagonal length fraction
    pub fn with_diagonal_fraction(mut self, fraction: f64) -> Self {
        self.diagonal_fraction = fraction;
        self
    }

    /// Set the shortest bar run
    pub fn with_min_run(mut self, min_run: u32) -> Self {
        self.min_run = min_run;
        self
    }

    /// Set how far from its side an edge may start
    pub fn with_edge_reach(mut self, reach: f64) -> Self {
        self.edge_reach = reach;
        self
    }

    /// Set how far from its side a big edge may start
    pub fn with_big_edge_reach(mut self, reach: f64) -> Self {
        self.big_edge_reach = reach;
        self
    }

    /// Set the span a big edge must cover
    pub fn with_big_edge_span(mut self, span: f64) -> Self {
        self.big_edge_span = span;
        self
    }

    /// Set the smallest hole kept
    pub fn with_min_hole_area(mut self, area: u32) -> Self {
        self.min_hole_area = area;
        self
    }

    fn validate(&self) -> RecogResult<()> {
        let fractions = [
            ("bar_fraction", self.bar_fraction),
            ("diagonal_fraction", self.diagonal_fraction),
            ("edge_reach", self.edge_reach),
            ("big_edge_reach", self.big_edge_reach),
            ("big_edge_span", self.big_edge_span),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(RecogError::InvalidParameter(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.min_run == 0 {
            return Err(RecogError::InvalidParameter(
                "min_run must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// The default [`StrokeIsolator`]
#[derive(Debug, Clone, Default)]
pub struct MorphIsolator {
    options: IsolatorOptions,
}

impl MorphIsolator {
    /// Create an isolator with validated options.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] when a fraction lies
    /// outside `(0, 1]` or `min_run` is zero.
    pub fn new(options: IsolatorOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in use.
    pub fn options(&self) -> &IsolatorOptions {
        &self.options
    }

    fn bar_length(&self, bounds: &Box, fraction: f64) -> u32 {
        let side = f64::from(bounds.w.max(bounds.h));
        self.options.min_run.max((fraction * side).ceil() as u32)
    }

    fn bars(&self, text: &Bitmap, bounds: &Box, step: (i32, i32)) -> RecogResult<Bitmap> {
        let min_len = self.bar_length(bounds, self.options.bar_fraction);
        runs_where(text, step, |run| run.len >= min_len)
    }

    fn diagonals(&self, text: &Bitmap, bounds: &Box, step: (i32, i32)) -> RecogResult<Bitmap> {
        let straight = self
            .bars(text, bounds, (1, 0))?
            .or(&self.bars(text, bounds, (0, 1))?)?;
        let rest = text.and_not(&straight)?;
        let min_len = self.bar_length(bounds, self.options.diagonal_fraction);
        runs_where(&rest, step, |run| run.len >= min_len)
    }

    fn edges(&self, text: &Bitmap, bounds: &Box, side: Side, big: bool) -> RecogResult<Bitmap> {
        let (reach, span) = if big {
            (self.options.big_edge_reach, self.options.big_edge_span)
        } else {
            (self.options.edge_reach, 0.0)
        };
        let extent = f64::from(match side {
            Side::Left | Side::Right => bounds.w,
            Side::Top | Side::Bottom => bounds.h,
        });
        let max_offset = reach * extent;
        let min_len = span * extent;
        runs_where(text, side.run_step(), |run| {
            let offset = match side {
                Side::Left => run.start.0 - bounds.x,
                Side::Right => bounds.last_x() - run.end.0,
                Side::Top => run.start.1 - bounds.y,
                Side::Bottom => bounds.last_y() - run.end.1,
            };
            f64::from(offset) <= max_offset && f64::from(run.len) >= min_len
        })
    }

    fn holes(&self, text: &Bitmap) -> RecogResult<Bitmap> {
        let enclosed = holes(text)?;
        let min_area = self.options.min_hole_area;
        let cm = ComponentMap::new(&enclosed)?;
        Ok(cm.to_bitmap_where(|c| c.pixel_count >= min_area)?)
    }
}

impl StrokeIsolator for MorphIsolator {
    fn isolate(&self, kind: Isolation, text: &Bitmap, mask: &Bitmap) -> RecogResult<Bitmap> {
        if text.width() != mask.width() {
            return Err(RecogError::InvalidParameter(format!(
                "text width {} differs from mask width {}",
                text.width(),
                mask.width()
            )));
        }
        let Some(bounds) = text.foreground_bounds() else {
            return Ok(text.create_template());
        };
        match kind {
            Isolation::HorizontalBars => self.bars(text, &bounds, (1, 0)),
            Isolation::VerticalBars => self.bars(text, &bounds, (0, 1)),
            Isolation::Diagonal => self.diagonals(text, &bounds, (1, 1)),
            Isolation::AntiDiagonal => self.diagonals(text, &bounds, (1, -1)),
            Isolation::EdgesLeft => self.edges(text, &bounds, Side::Left, false),
            Isolation::EdgesRight => self.edges(text, &bounds, Side::Right, false),
            Isolation::EdgesTop => self.edges(text, &bounds, Side::Top, false),
            Isolation::EdgesBottom => self.edges(text, &bounds, Side::Bottom, false),
            Isolation::BigEdgesLeft => self.edges(text, &bounds, Side::Left, true),
            Isolation::BigEdgesRight => self.edges(text, &bounds, Side::Right, true),
            Isolation::BigEdgesTop => self.edges(text, &bounds, Side::Top, true),
            Isolation::BigEdgesBottom => self.edges(text, &bounds, Side::Bottom, true),
            Isolation::NotchLeft => notches(text, Side::Left),
            Isolation::NotchRight => notches(text, Side::Right),
            Isolation::NotchTop => notches(text, Side::Top),
            Isolation::NotchBottom => notches(text, Side::Bottom),
            Isolation::Holes => self.holes(text),
            Isolation::Ends => Ok(endpoints(&thin(text)?)?),
            Isolation::Crosses => Ok(junctions(&thin(text)?)?),
            Isolation::SecondObject => {
                Ok(nth_largest_component(text, 1)?.unwrap_or_else(|| text.create_template()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    fn run_step(self) -> (i32, i32) {
        match self {
            Side::Left | Side::Right => (1, 0),
            Side::Top | Side::Bottom => (0, 1),
        }
    }
}

/// A maximal foreground run along one direction. `start` and `end` are
/// inclusive.
#[derive(Debug, Clone, Copy)]
struct Run {
    start: (i32, i32),
    end: (i32, i32),
    len: u32,
}

fn in_bounds(bm: &Bitmap, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < bm.width() && (y as u32) < bm.height()
}

/// Visit every maximal run along `step`.
///
/// Lines start at the pixels whose predecessor along `step` lies outside
/// the bitmap.
fn for_each_run<F>(bm: &Bitmap, step: (i32, i32), mut visit: F)
where
    F: FnMut(&Run),
{
    let (dx, dy) = step;
    let w = bm.width() as i32;
    let h = bm.height() as i32;
    for y0 in 0..h {
        for x0 in 0..w {
            if in_bounds(bm, x0 - dx, y0 - dy) {
                continue;
            }
            let (mut x, mut y) = (x0, y0);
            let mut open: Option<Run> = None;
            while in_bounds(bm, x, y) {
                if bm.get(x, y) {
                    let run = open.get_or_insert(Run {
                        start: (x, y),
                        end: (x, y),
                        len: 0,
                    });
                    run.end = (x, y);
                    run.len += 1;
                } else if let Some(run) = open.take() {
                    visit(&run);
                }
                x += dx;
                y += dy;
            }
            if let Some(run) = open.take() {
                visit(&run);
            }
        }
    }
}

/// Paint the runs along `step` accepted by `keep`.
fn runs_where<F>(bm: &Bitmap, step: (i32, i32), keep: F) -> RecogResult<Bitmap>
where
    F: Fn(&Run) -> bool,
{
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    for_each_run(bm, step, |run| {
        if keep(run) {
            let (mut x, mut y) = run.start;
            for _ in 0..run.len {
                out.set(x, y);
                x += step.0;
                y += step.1;
            }
        }
    });
    Ok(out.into())
}

fn span(mut coords: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    let first = coords.next()?;
    Some((first, coords.last().unwrap_or(first)))
}

/// First and last foreground coordinate of every row and column.
struct Profile {
    rows: Vec<Option<(i32, i32)>>,
    columns: Vec<Option<(i32, i32)>>,
}

impl Profile {
    fn new(bm: &Bitmap) -> Self {
        let w = bm.width() as i32;
        let h = bm.height() as i32;
        let rows = (0..h)
            .map(|y| span((0..w).filter(|&x| bm.get(x, y))))
            .collect();
        let columns = (0..w)
            .map(|x| span((0..h).filter(|&y| bm.get(x, y))))
            .collect();
        Self { rows, columns }
    }
}

fn strictly_inside(value: i32, span: Option<(i32, i32)>) -> bool {
    span.is_some_and(|(first, last)| first < value && value < last)
}

/// Background pixels open towards `side` and walled in on both
/// perpendicular sides.
fn notches(text: &Bitmap, side: Side) -> RecogResult<Bitmap> {
    let profile = Profile::new(text);
    let mut out = BitmapMut::new(text.width(), text.height())?;
    for y in 0..text.height() as i32 {
        let row = profile.rows[y as usize];
        for x in 0..text.width() as i32 {
            if text.get(x, y) {
                continue;
            }
            let column = profile.columns[x as usize];
            let open = match side {
                Side::Left => row.is_some_and(|(first, _)| x < first),
                Side::Right => row.is_some_and(|(_, last)| x > last),
                Side::Top => column.is_some_and(|(first, _)| y < first),
                Side::Bottom => column.is_some_and(|(_, last)| y > last),
            };
            let walled = match side {
                Side::Left | Side::Right => strictly_inside(y, column),
                Side::Top | Side::Bottom => strictly_inside(x, row),
            };
            if open && walled {
                out.set(x, y);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(rows: &[&str]) -> Bitmap {
        let mut bm = BitmapMut::new(rows[0].len() as u32, rows.len() as u32).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    bm.set(x as i32, y as i32);
                }
            }
        }
        bm.into()
    }

    fn isolate(kind: Isolation, text: &Bitmap) -> Bitmap {
        MorphIsolator::default()
            .isolate(kind, text, &text.create_template())
            .unwrap()
    }

    // A "ב"-like shape: top bar, right stem, bottom bar.
    fn bet() -> Bitmap {
        bitmap(&[
            "..........",
            ".#######..",
            "......##..",
            "......##..",
            "......##..",
            "......##..",
            ".########.",
            "..........",
        ])
    }

    #[test]
    fn test_bars() {
        let text = bet();
        let h = isolate(Isolation::HorizontalBars, &text);
        assert!(h.get(1, 1) && h.get(7, 1) && h.get(8, 6));
        assert!(!h.get(6, 3));
        let v = isolate(Isolation::VerticalBars, &text);
        assert!(v.get(6, 1) && v.get(7, 6));
        assert!(!v.get(1, 1));
        assert!(h.is_subset_of(&text) && v.is_subset_of(&text));
    }

    #[test]
    fn test_diagonal() {
        let text = bitmap(&[
            "#.......",
            ".#......",
            "..#.....",
            "...#....",
            "....#...",
            ".....#..",
        ]);
        let d = isolate(Isolation::Diagonal, &text);
        assert_eq!(d, text);
        assert!(isolate(Isolation::AntiDiagonal, &text).is_blank());
    }

    #[test]
    fn test_edges() {
        let text = bet();
        let left = isolate(Isolation::EdgesLeft, &text);
        assert!(left.get(1, 1) && left.get(5, 1) && left.get(1, 6));
        assert!(!left.get(6, 3));
        let right = isolate(Isolation::EdgesRight, &text);
        assert_eq!(right, text);
        let big_left = isolate(Isolation::BigEdgesLeft, &text);
        assert!(big_left.get(3, 1) && big_left.get(3, 6));
    }

    #[test]
    fn test_notches() {
        let text = bet();
        let left = isolate(Isolation::NotchLeft, &text);
        assert!(left.get(1, 3) && left.get(5, 4));
        assert!(!left.get(0, 3));
        assert!(isolate(Isolation::NotchRight, &text).is_blank());
        assert!(isolate(Isolation::NotchTop, &text).is_blank());
    }

    #[test]
    fn test_holes_and_second_object() {
        let text = bitmap(&[
            "#####....",
            "#...#..##",
            "#...#..##",
            "#####....",
        ]);
        let holes = isolate(Isolation::Holes, &text);
        assert_eq!(holes.count_foreground(), 6);
        assert!(holes.get(2, 1));
        let second = isolate(Isolation::SecondObject, &text);
        assert_eq!(second.count_foreground(), 4);
        assert!(second.get(7, 1));
    }

    #[test]
    fn test_blank_and_mismatch() {
        let blank = Bitmap::new(6, 6).unwrap();
        for kind in Isolation::ALL {
            assert!(isolate(kind, &blank).is_blank());
        }
        let mask = Bitmap::new(7, 6).unwrap();
        assert!(
            MorphIsolator::default()
                .isolate(Isolation::Holes, &blank, &mask)
                .is_err()
        );
    }

    #[test]
    fn test_options_validate() {
        assert!(MorphIsolator::new(IsolatorOptions::new().with_bar_fraction(0.0)).is_err());
        assert!(MorphIsolator::new(IsolatorOptions::new().with_min_run(0)).is_err());
        assert!(MorphIsolator::new(IsolatorOptions::new().with_edge_reach(0.3)).is_ok());
    }
}
