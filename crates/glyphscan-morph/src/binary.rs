//! Binary dilation and erosion with rectangular bricks
//!
//! A brick of size `w x h` has its origin at `(w / 2, h / 2)`, so a
//! horizontal brick of width 6 reaches 3 pixels left and 2 pixels right.
//! Both operations are separable and run as a horizontal pass followed
//! by a vertical pass. Pixels outside the bitmap count as background, so
//! erosion eats into shapes touching the border.

use crate::error::{MorphError, MorphResult};
use glyphscan_core::{Bitmap, BitmapMut};

#[derive(Clone, Copy)]
enum Pass {
    Horizontal,
    Vertical,
}

fn check_brick(width: u32, height: u32) -> MorphResult<()> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidParameters(format!(
            "brick must be at least 1x1, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Offsets covered by a 1-D brick of `size` pixels.
fn reach(size: u32) -> std::ops::RangeInclusive<i32> {
    let before = (size / 2) as i32;
    -before..=(size as i32 - 1 - before)
}

fn sweep(bm: &Bitmap, size: u32, pass: Pass, dilate: bool) -> MorphResult<Bitmap> {
    if size == 1 {
        return Ok(bm.clone());
    }
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    let offsets = reach(size);
    for y in 0..bm.height() as i32 {
        for x in 0..bm.width() as i32 {
            let mut probe = offsets.clone().map(|d| match pass {
                Pass::Horizontal => bm.get(x + d, y),
                Pass::Vertical => bm.get(x, y + d),
            });
            let on = if dilate {
                probe.any(|p| p)
            } else {
                probe.all(|p| p)
            };
            if on {
                out.set(x, y);
            }
        }
    }
    Ok(out.into())
}

/// Dilate with a `width x height` brick.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] for a zero-sized brick.
pub fn dilate_brick(bm: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    check_brick(width, height)?;
    let tmp = sweep(bm, width, Pass::Horizontal, true)?;
    sweep(&tmp, height, Pass::Vertical, true)
}

/// Erode with a `width x height` brick.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] for a zero-sized brick.
pub fn erode_brick(bm: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    check_brick(width, height)?;
    let tmp = sweep(bm, width, Pass::Horizontal, false)?;
    sweep(&tmp, height, Pass::Vertical, false)
}

/// Dilate with the 3x3 square.
pub fn dilate(bm: &Bitmap) -> MorphResult<Bitmap> {
    dilate_brick(bm, 3, 3)
}

/// Erode with the 3x3 square.
pub fn erode(bm: &Bitmap) -> MorphResult<Bitmap> {
    erode_brick(bm, 3, 3)
}

/// The 8-neighbourhood in clockwise order starting north.
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Number of foreground pixels among the 8 neighbours of `(x, y)`.
pub fn neighbour_count(bm: &Bitmap, x: i32, y: i32) -> u32 {
    NEIGHBOURS
        .iter()
        .filter(|&&(dx, dy)| bm.get(x + dx, y + dy))
        .count() as u32
}
