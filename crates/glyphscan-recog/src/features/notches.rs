//! Notch indicators

use super::probe::{MidZone, SideHits, SideViews, Zones};
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::RecogResult;
use crate::isolate::{Isolation, StrokeIsolator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Notches(SideHits);

pub(crate) fn measure<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Notches> {
    let frame = s.frame()?;
    // notches always use three vertical bands
    let zones = Zones {
        rows: frame.glyph,
        parts: 3,
        left: 0,
        right: frame.width - 1,
        span: frame.width,
    };
    let views = SideViews {
        left: s.isolate(Isolation::NotchLeft)?,
        right: s.isolate(Isolation::NotchRight)?,
        top: s.isolate(Isolation::NotchTop)?,
        bottom: s.isolate(Isolation::NotchBottom)?,
    };
    Ok(Notches(SideHits::probe(&views, &zones, MidZone::Notch)))
}

impl FeatureGroup for Notches {
    fn write(&self, v: &mut FeatureVector) {
        self.0.write(v, index::NOTCHES);
    }
}
