//! Line and glyph extents shared by the feature groups

use crate::error::{RecogError, RecogResult};
use glyphscan_core::Bitmap;

/// A vertical (or horizontal) extent. `height()` is `end - start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: i32,
    pub end: i32,
}

impl Span {
    pub fn height(&self) -> i32 {
        self.end - self.start
    }

    /// Extent from the first and last occupied coordinate. A single
    /// occupied coordinate yields a span of one.
    fn occupied(first: i32, last: i32) -> Self {
        Self {
            start: first,
            end: if last > first { last } else { first + 1 },
        }
    }
}

/// The text line at the middle column of the mask.
///
/// `start` is the row above the first line row and `end` the row after
/// the last one.
pub(crate) fn line_span(mask: &Bitmap) -> RecogResult<Span> {
    let x = (mask.width() / 2) as i32;
    let h = mask.height() as i32;
    let first = (0..h)
        .find(|&y| mask.get(x, y))
        .ok_or_else(|| RecogError::Degenerate("mask has no line at its middle column".into()))?;
    let after = (first..h).find(|&y| !mask.get(x, y)).unwrap_or(h);
    Ok(Span {
        start: first - 1,
        end: after,
    })
}

/// Rows occupied by the foreground of `bm`.
pub(crate) fn row_span(bm: &Bitmap) -> RecogResult<Span> {
    let (first, last) = bm
        .foreground_rows()
        .ok_or_else(|| RecogError::Degenerate("bitmap is blank".into()))?;
    Ok(Span::occupied(first, last))
}

/// Columns occupied by the foreground of `bm`.
pub(crate) fn column_span(bm: &Bitmap) -> RecogResult<Span> {
    let (first, last) = bm
        .foreground_columns()
        .ok_or_else(|| RecogError::Degenerate("bitmap is blank".into()))?;
    Ok(Span::occupied(first, last))
}

/// Line and glyph extents of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub line: Span,
    pub glyph: Span,
    /// Width of the glyph bitmap
    pub width: i32,
}

impl Frame {
    pub fn new(text: &Bitmap, mask: &Bitmap) -> RecogResult<Self> {
        let line = line_span(mask)?;
        let glyph = row_span(text)?;
        Ok(Self {
            line,
            glyph,
            width: text.width() as i32,
        })
    }

    /// Vertical zone count: 2 for glyphs shorter than `short_ratio` of
    /// the line, 3 otherwise.
    pub fn parts(&self, short_ratio: f64) -> i32 {
        vertical_parts(self.glyph, self.line, short_ratio)
    }
}

pub(crate) fn vertical_parts(glyph: Span, line: Span, short_ratio: f64) -> i32 {
    if f64::from(glyph.height()) / f64::from(line.height()) < short_ratio {
        2
    } else {
        3
    }
}
