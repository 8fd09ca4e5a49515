//! Bar indicators

use super::probe::{Zones, column_hit, row_hit};
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::{Isolation, StrokeIsolator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bars {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    diagonal: bool,
    anti_diagonal: bool,
}

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Bars> {
    let frame = s.frame()?;
    let parts = frame.parts(s.options.short_glyph_ratio);
    let zones = Zones {
        rows: frame.glyph,
        parts,
        left: 0,
        right: frame.width - 1,
        span: frame.width,
    };

    let hbars = s.isolate(Isolation::HorizontalBars)?;
    let x = (hbars.width() / 2) as i32;
    let top = column_hit(&hbars, x, zones.top_rows());
    let bottom = column_hit(&hbars, x, zones.bottom_rows());

    let vbars = s.isolate(Isolation::VerticalBars)?;
    let y = (vbars.height() / 2) as i32;
    let left = row_hit(&vbars, y, zones.left_cols(parts));
    let right = row_hit(&vbars, y, zones.right_cols(parts));

    let across = |kind| -> RecogResult<bool> {
        let bm = s.isolate(kind)?;
        Ok(row_hit(&bm, (bm.height() / 2) as i32, 0..bm.width() as i32))
    };
    let diagonal = across(Isolation::Diagonal)?;
    let anti_diagonal = across(Isolation::AntiDiagonal)?;

    Ok(Bars {
        top,
        bottom,
        left,
        right,
        diagonal,
        anti_diagonal,
    })
}

impl FeatureGroup for Bars {
    fn write(&self, v: &mut FeatureVector) {
        v.set_flag(index::TOP_BAR, self.top);
        v.set_flag(index::BOTTOM_BAR, self.bottom);
        v.set_flag(index::LEFT_BAR, self.left);
        v.set_flag(index::RIGHT_BAR, self.right);
        v.set_flag(index::DIAGONAL_BAR, self.diagonal);
        v.set_flag(index::ANTI_DIAGONAL_BAR, self.anti_diagonal);
    }
}
