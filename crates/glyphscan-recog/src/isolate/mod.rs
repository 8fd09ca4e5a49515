//! Stroke isolation
//!
//! The feature extractor never looks at strokes directly. It asks a
//! [`StrokeIsolator`] for a bitmap holding only one kind of structure
//! (horizontal bars, left edges, holes, skeleton end points, ...) and then
//! probes fixed zones of that bitmap. Every isolated bitmap has the extent
//! of the input glyph bitmap so zone coordinates carry over unchanged.

mod morph_isolator;

pub use morph_isolator::{IsolatorOptions, MorphIsolator};

use crate::error::RecogResult;
use glyphscan_core::Bitmap;

/// The structures a [`StrokeIsolator`] can extract from a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isolation {
    /// Long horizontal strokes
    HorizontalBars,
    /// Long vertical strokes
    VerticalBars,
    /// Strokes running from top-left to bottom-right
    Diagonal,
    /// Strokes running from bottom-left to top-right
    AntiDiagonal,
    /// Horizontal strokes starting at the left side of the glyph
    EdgesLeft,
    /// Horizontal strokes ending at the right side of the glyph
    EdgesRight,
    /// Vertical strokes starting at the top of the glyph
    EdgesTop,
    /// Vertical strokes ending at the bottom of the glyph
    EdgesBottom,
    /// Left edges that also span half the glyph width
    BigEdgesLeft,
    /// Right edges that also span half the glyph width
    BigEdgesRight,
    /// Top edges that also span half the glyph height
    BigEdgesTop,
    /// Bottom edges that also span half the glyph height
    BigEdgesBottom,
    /// Background bays open to the left
    NotchLeft,
    /// Background bays open to the right
    NotchRight,
    /// Background bays open to the top
    NotchTop,
    /// Background bays open to the bottom
    NotchBottom,
    /// Enclosed background regions
    Holes,
    /// Skeleton end points
    Ends,
    /// Skeleton junctions
    Crosses,
    /// The second largest connected component
    SecondObject,
}

impl Isolation {
    /// Every isolation kind, in declaration order.
    pub const ALL: [Isolation; 20] = [
        Isolation::HorizontalBars,
        Isolation::VerticalBars,
        Isolation::Diagonal,
        Isolation::AntiDiagonal,
        Isolation::EdgesLeft,
        Isolation::EdgesRight,
        Isolation::EdgesTop,
        Isolation::EdgesBottom,
        Isolation::BigEdgesLeft,
        Isolation::BigEdgesRight,
        Isolation::BigEdgesTop,
        Isolation::BigEdgesBottom,
        Isolation::NotchLeft,
        Isolation::NotchRight,
        Isolation::NotchTop,
        Isolation::NotchBottom,
        Isolation::Holes,
        Isolation::Ends,
        Isolation::Crosses,
        Isolation::SecondObject,
    ];
}

/// Produces single-structure views of a glyph.
///
/// Implementations must return a bitmap with the extent of `text`.
pub trait StrokeIsolator {
    /// Isolate one kind of structure.
    ///
    /// # Arguments
    ///
    /// * `kind` - Structure to extract
    /// * `text` - Glyph bitmap
    /// * `mask` - Text-line mask of the same width
    fn isolate(&self, kind: Isolation, text: &Bitmap, mask: &Bitmap) -> RecogResult<Bitmap>;
}

impl<T: StrokeIsolator + ?Sized> StrokeIsolator for &T {
    fn isolate(&self, kind: Isolation, text: &Bitmap, mask: &Bitmap) -> RecogResult<Bitmap> {
        (**self).isolate(kind, text, mask)
    }
}
