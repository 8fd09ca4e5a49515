//! Hole counts and detached parts

use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::{Isolation, StrokeIsolator};
use glyphscan_core::Bitmap;
use glyphscan_morph::count_objects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parts {
    holes: usize,
    hey: bool,
    dot: bool,
    comma: bool,
}

/// First foreground pixel in row-major order.
fn first_pixel(bm: &Bitmap) -> Option<(i32, i32)> {
    let (w, h) = (bm.width() as i32, bm.height() as i32);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .find(|&(x, y)| bm.get(x, y))
}

/// A foreground run on row `y` that starts and ends in the left half.
fn closed_run_in_left_half(bm: &Bitmap, y: i32) -> bool {
    let half = (bm.width() / 2) as i32;
    let mut x = 0;
    while x < half && !bm.get(x, y) {
        x += 1;
    }
    if x >= half {
        return false;
    }
    while x < half && bm.get(x, y) {
        x += 1;
    }
    x < half
}

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Parts> {
    let frame = s.frame()?;
    let (fs, fe) = (frame.glyph.start, frame.glyph.end);
    let fh = frame.glyph.height();
    let w = frame.width;

    let holes = count_objects(&s.isolate(Isolation::Holes)?)?;

    let second = s.isolate(Isolation::SecondObject)?;
    let hey = closed_run_in_left_half(&second, fe - fh / 5);
    let (dot, comma) = match first_pixel(&second) {
        Some((x, y)) => (
            y > fs + 2 * fh / 3 && x > w / 4,
            y > fs + fh / 2 && x > w / 2,
        ),
        None => (false, false),
    };

    Ok(Parts {
        holes,
        hey,
        dot,
        comma,
    })
}

impl FeatureGroup for Parts {
    fn write(&self, v: &mut FeatureVector) {
        v.set_flag(index::ONE_HOLE, self.holes == 1);
        v.set_flag(index::TWO_HOLES, self.holes == 2);
        v.set_flag(index::HEY_PART, self.hey);
        v.set_flag(index::DOT_PART, self.dot);
        v.set_flag(index::COMMA_PART, self.comma);
    }
}
