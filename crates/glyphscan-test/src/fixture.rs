//! ASCII-art bitmap fixtures
//!
//! Rows are strings of equal length. `#`, `X`, `x` and `1` mark
//! foreground; `.`, `0`, `-` and space mark background.

use crate::error::{TestError, TestResult};
use glyphscan_core::{Bitmap, BitmapMut, Box};

/// Build a bitmap from ASCII-art rows.
///
/// # Errors
///
/// Returns [`TestError::Fixture`] for an empty fixture, ragged rows or
/// unknown characters.
pub fn bitmap_from_ascii(rows: &[&str]) -> TestResult<Bitmap> {
    let Some(first) = rows.first() else {
        return Err(TestError::Fixture {
            row: 0,
            message: "fixture has no rows".into(),
        });
    };
    let width = first.chars().count();
    let mut bm = BitmapMut::new(width as u32, rows.len() as u32)?;
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(TestError::Fixture {
                row: y,
                message: format!("expected {width} columns, got {}", row.chars().count()),
            });
        }
        for (x, c) in row.chars().enumerate() {
            match c {
                '#' | 'X' | 'x' | '1' => bm.set(x as i32, y as i32),
                '.' | '0' | '-' | ' ' => {}
                other => {
                    return Err(TestError::Fixture {
                        row: y,
                        message: format!("unexpected character {other:?}"),
                    });
                }
            }
        }
    }
    Ok(bm.into())
}

/// Render a bitmap as ASCII art, one line per row.
pub fn bitmap_to_ascii(bm: &Bitmap) -> String {
    let mut out = String::with_capacity(((bm.width() + 1) * bm.height()) as usize);
    for y in 0..bm.height() as i32 {
        for x in 0..bm.width() as i32 {
            out.push(if bm.get(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Build a `width x height` bitmap with the given rectangles filled.
pub fn filled_boxes(width: u32, height: u32, boxes: &[Box]) -> TestResult<Bitmap> {
    let mut bm = BitmapMut::new(width, height)?;
    for b in boxes {
        bm.set_region(b);
    }
    Ok(bm.into())
}
