//! Hole shape features
//!
//! Both groups need one or two holes. The hole bitmap is measured like a
//! glyph of its own: its edges are isolated and probed in zones over the
//! hole extent, and its size and corner insets are related to the line.

use super::dimensions::{Corners, Placement};
use super::extent::{Span, column_span, line_span, row_span, vertical_parts};
use super::probe::{MidZone, SideHits, SideViews, Zones};
use super::{FeatureGroup, FeatureVector, Sample, index};
use crate::error::{RecogError, RecogResult};
use crate::isolate::{Isolation, StrokeIsolator};
use glyphscan_core::Bitmap;
use glyphscan_morph::count_objects;

/// Holes of a glyph with their extents.
struct HoleFrame {
    holes: Bitmap,
    line: Span,
    rows: Span,
    cols: Span,
}

impl HoleFrame {
    fn new<I: StrokeIsolator + ?Sized>(s: &Sample<'_, I>) -> RecogResult<Self> {
        let line = line_span(s.mask)?;
        row_span(s.text)?;
        let holes = s.isolate(Isolation::Holes)?;
        let count = count_objects(&holes)?;
        if !(1..=2).contains(&count) {
            return Err(RecogError::Degenerate(format!(
                "{count} holes, expected one or two"
            )));
        }
        let rows = row_span(&holes)?;
        let cols = column_span(&holes)?;
        Ok(Self {
            holes,
            line,
            rows,
            cols,
        })
    }

    fn width(&self) -> i32 {
        self.cols.height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HoleEdges(SideHits);

pub(crate) fn measure_edges<I: StrokeIsolator + ?Sized>(
    s: &Sample<'_, I>,
) -> RecogResult<HoleEdges> {
    let frame = HoleFrame::new(s)?;
    let zones = Zones {
        rows: frame.rows,
        parts: vertical_parts(frame.rows, frame.line, s.options.short_glyph_ratio),
        left: frame.cols.start,
        right: frame.cols.end,
        span: frame.width(),
    };
    let edges = |kind| s.isolator.isolate(kind, &frame.holes, s.mask);
    let views = SideViews {
        left: edges(Isolation::EdgesLeft)?,
        right: edges(Isolation::EdgesRight)?,
        top: edges(Isolation::EdgesTop)?,
        bottom: edges(Isolation::EdgesBottom)?,
    };
    Ok(HoleEdges(SideHits::probe(&views, &zones, MidZone::Edge)))
}

impl FeatureGroup for HoleEdges {
    fn write(&self, v: &mut FeatureVector) {
        self.0.write(v, index::HOLE_EDGES);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HoleDimensions {
    placement: Placement,
    corners: Corners,
}

pub(crate) fn measure_dimensions<I: StrokeIsolator + ?Sized>(
    s: &Sample<'_, I>,
) -> RecogResult<HoleDimensions> {
    let frame = HoleFrame::new(s)?;
    let fw = frame.width();
    let placement = Placement::new(
        frame.rows,
        fw,
        frame.line,
        s.options.hole_snap_tolerance,
    );
    let corners = Corners::measure(&frame.holes, frame.rows, frame.cols, fw / 2, frame.cols.end);
    Ok(HoleDimensions { placement, corners })
}

impl FeatureGroup for HoleDimensions {
    fn write(&self, v: &mut FeatureVector) {
        let p = &self.placement;
        v.set(index::HOLE_HEIGHT, p.height);
        v.set(index::HOLE_WIDTH, p.width);
        v.set(index::HOLE_TOP, p.top);
        v.set(index::HOLE_BOTTOM, p.bottom);
        v.set(index::HOLE_TOP_LEFT, self.corners.top_left);
        v.set(index::HOLE_TOP_RIGHT, self.corners.top_right);
        v.set(index::HOLE_BOTTOM_LEFT, self.corners.bottom_left);
        v.set(index::HOLE_BOTTOM_RIGHT, self.corners.bottom_right);
    }
}
