//! Edge indicators, regular and big

use super::probe::{MidZone, SideHits, SideViews, Zones};
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::{Isolation, StrokeIsolator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edges {
    hits: SideHits,
    big: bool,
}

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(
    s: &Sample<'_, I>,
    big: bool,
) -> RecogResult<Edges> {
    let frame = s.frame()?;
    let zones = Zones {
        rows: frame.glyph,
        parts: frame.parts(s.options.short_glyph_ratio),
        left: 0,
        right: frame.width - 1,
        span: frame.width,
    };
    let views = if big {
        SideViews {
            left: s.isolate(Isolation::BigEdgesLeft)?,
            right: s.isolate(Isolation::BigEdgesRight)?,
            top: s.isolate(Isolation::BigEdgesTop)?,
            bottom: s.isolate(Isolation::BigEdgesBottom)?,
        }
    } else {
        SideViews {
            left: s.isolate(Isolation::EdgesLeft)?,
            right: s.isolate(Isolation::EdgesRight)?,
            top: s.isolate(Isolation::EdgesTop)?,
            bottom: s.isolate(Isolation::EdgesBottom)?,
        }
    };
    Ok(Edges {
        hits: SideHits::probe(&views, &zones, MidZone::Edge),
        big,
    })
}

impl FeatureGroup for Edges {
    fn write(&self, v: &mut FeatureVector) {
        let base = if self.big {
            index::BIG_EDGES
        } else {
            index::EDGES
        };
        self.hits.write(v, base);
    }
}
