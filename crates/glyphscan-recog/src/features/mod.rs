//! Geometric feature extraction
//!
//! [`FeatureExtractor::extract`] turns a glyph bitmap and its text-line
//! mask into a [`FeatureVector`] of 102 values in `[0, 1]`. Most entries
//! are 0/1 indicators ("the glyph has a top bar"), the rest are
//! normalised proportions (height relative to the line, corner insets).
//!
//! The vector is assembled from independent groups. A group that cannot
//! be measured (blank glyph, no line in the mask, no holes where holes
//! are needed) is logged and leaves its entries at 0.0; the remaining
//! groups are still filled in.
//!
//! # Index layout
//!
//! | range    | group                                   |
//! |----------|-----------------------------------------|
//! | 0-8      | dimensions and corner insets            |
//! | 9-14     | bars                                    |
//! | 15-26    | edges                                   |
//! | 27-38    | notches                                 |
//! | 39-47    | skeleton end points (3x3 grid)          |
//! | 48-56    | skeleton junctions (3x3 grid)           |
//! | 57-59    | holes count and "hey" part              |
//! | 60-71    | edges of the holes                      |
//! | 72-79    | dimensions of the holes                 |
//! | 80-91    | big edges                               |
//! | 92-101   | mid insets, dot/comma parts, hlines     |

mod bars;
mod dimensions;
mod edges;
mod ends;
mod extent;
mod holes;
mod notches;
mod parts;
mod probe;

use crate::error::{RecogError, RecogResult};
use crate::isolate::{MorphIsolator, StrokeIsolator};
use glyphscan_core::Bitmap;
use std::ops::Index;

pub(crate) use extent::Frame;

/// Number of entries in a [`FeatureVector`]
pub const FEATURE_COUNT: usize = 102;

/// Positions of the entries of a [`FeatureVector`]
pub mod index {
    /// Glyph height relative to the line, halved
    pub const HEIGHT: usize = 0;
    /// Bitmap width relative to the line height, halved
    pub const WIDTH: usize = 1;
    /// Width over height, at most 1
    pub const ASPECT: usize = 2;
    /// Offset of the glyph top from the line top
    pub const TOP: usize = 3;
    /// Offset of the glyph bottom from the line bottom
    pub const BOTTOM: usize = 4;
    /// Background inset walking in from the top-left corner
    pub const TOP_LEFT: usize = 5;
    /// Background inset walking in from the top-right corner
    pub const TOP_RIGHT: usize = 6;
    /// Background inset walking in from the bottom-left corner
    pub const BOTTOM_LEFT: usize = 7;
    /// Background inset walking in from the bottom-right corner
    pub const BOTTOM_RIGHT: usize = 8;

    pub const TOP_BAR: usize = 9;
    pub const BOTTOM_BAR: usize = 10;
    pub const LEFT_BAR: usize = 11;
    pub const RIGHT_BAR: usize = 12;
    pub const DIAGONAL_BAR: usize = 13;
    pub const ANTI_DIAGONAL_BAR: usize = 14;

    /// First entry of the edge block
    pub const EDGES: usize = 15;
    pub const TOP_LEFT_EDGE: usize = 15;
    pub const MID_LEFT_EDGE: usize = 16;
    pub const BOTTOM_LEFT_EDGE: usize = 17;
    pub const TOP_RIGHT_EDGE: usize = 18;
    pub const MID_RIGHT_EDGE: usize = 19;
    pub const BOTTOM_RIGHT_EDGE: usize = 20;
    pub const LEFT_TOP_EDGE: usize = 21;
    pub const MID_TOP_EDGE: usize = 22;
    pub const RIGHT_TOP_EDGE: usize = 23;
    pub const LEFT_BOTTOM_EDGE: usize = 24;
    pub const MID_BOTTOM_EDGE: usize = 25;
    pub const RIGHT_BOTTOM_EDGE: usize = 26;

    /// First entry of the notch block
    pub const NOTCHES: usize = 27;
    pub const TOP_LEFT_NOTCH: usize = 27;
    pub const MID_LEFT_NOTCH: usize = 28;
    pub const BOTTOM_LEFT_NOTCH: usize = 29;
    pub const TOP_RIGHT_NOTCH: usize = 30;
    pub const MID_RIGHT_NOTCH: usize = 31;
    pub const BOTTOM_RIGHT_NOTCH: usize = 32;
    pub const LEFT_TOP_NOTCH: usize = 33;
    pub const MID_TOP_NOTCH: usize = 34;
    pub const RIGHT_TOP_NOTCH: usize = 35;
    pub const LEFT_BOTTOM_NOTCH: usize = 36;
    pub const MID_BOTTOM_NOTCH: usize = 37;
    pub const RIGHT_BOTTOM_NOTCH: usize = 38;

    /// First entry of the end point grid
    pub const ENDS: usize = 39;
    pub const TOP_LEFT_END: usize = 39;
    pub const TOP_MID_END: usize = 40;
    pub const TOP_RIGHT_END: usize = 41;
    pub const MID_LEFT_END: usize = 42;
    pub const MID_MID_END: usize = 43;
    pub const MID_RIGHT_END: usize = 44;
    pub const BOTTOM_LEFT_END: usize = 45;
    pub const BOTTOM_MID_END: usize = 46;
    pub const BOTTOM_RIGHT_END: usize = 47;

    /// First entry of the junction grid
    pub const CROSSES: usize = 48;
    pub const TOP_LEFT_CROSS: usize = 48;
    pub const TOP_MID_CROSS: usize = 49;
    pub const TOP_RIGHT_CROSS: usize = 50;
    pub const MID_LEFT_CROSS: usize = 51;
    pub const MID_MID_CROSS: usize = 52;
    pub const MID_RIGHT_CROSS: usize = 53;
    pub const BOTTOM_LEFT_CROSS: usize = 54;
    pub const BOTTOM_MID_CROSS: usize = 55;
    pub const BOTTOM_RIGHT_CROSS: usize = 56;

    pub const ONE_HOLE: usize = 57;
    pub const TWO_HOLES: usize = 58;
    /// A second object that starts and ends in the left half near the
    /// bottom of the glyph
    pub const HEY_PART: usize = 59;

    /// First entry of the hole edge block
    pub const HOLE_EDGES: usize = 60;
    pub const HOLE_TOP_LEFT_EDGE: usize = 60;
    pub const HOLE_MID_LEFT_EDGE: usize = 61;
    pub const HOLE_BOTTOM_LEFT_EDGE: usize = 62;
    pub const HOLE_TOP_RIGHT_EDGE: usize = 63;
    pub const HOLE_MID_RIGHT_EDGE: usize = 64;
    pub const HOLE_BOTTOM_RIGHT_EDGE: usize = 65;
    pub const HOLE_LEFT_TOP_EDGE: usize = 66;
    pub const HOLE_MID_TOP_EDGE: usize = 67;
    pub const HOLE_RIGHT_TOP_EDGE: usize = 68;
    pub const HOLE_LEFT_BOTTOM_EDGE: usize = 69;
    pub const HOLE_MID_BOTTOM_EDGE: usize = 70;
    pub const HOLE_RIGHT_BOTTOM_EDGE: usize = 71;

    pub const HOLE_HEIGHT: usize = 72;
    pub const HOLE_WIDTH: usize = 73;
    pub const HOLE_TOP: usize = 74;
    pub const HOLE_BOTTOM: usize = 75;
    pub const HOLE_TOP_LEFT: usize = 76;
    pub const HOLE_TOP_RIGHT: usize = 77;
    pub const HOLE_BOTTOM_LEFT: usize = 78;
    pub const HOLE_BOTTOM_RIGHT: usize = 79;

    /// First entry of the big edge block
    pub const BIG_EDGES: usize = 80;
    pub const BIG_TOP_LEFT_EDGE: usize = 80;
    pub const BIG_MID_LEFT_EDGE: usize = 81;
    pub const BIG_BOTTOM_LEFT_EDGE: usize = 82;
    pub const BIG_TOP_RIGHT_EDGE: usize = 83;
    pub const BIG_MID_RIGHT_EDGE: usize = 84;
    pub const BIG_BOTTOM_RIGHT_EDGE: usize = 85;
    pub const BIG_LEFT_TOP_EDGE: usize = 86;
    pub const BIG_MID_TOP_EDGE: usize = 87;
    pub const BIG_RIGHT_TOP_EDGE: usize = 88;
    pub const BIG_LEFT_BOTTOM_EDGE: usize = 89;
    pub const BIG_MID_BOTTOM_EDGE: usize = 90;
    pub const BIG_RIGHT_BOTTOM_EDGE: usize = 91;

    /// Background inset walking down the middle column
    pub const TOP_MID: usize = 92;
    /// Background inset walking right along the middle row
    pub const MID_LEFT: usize = 93;
    /// Background inset walking left along the middle row
    pub const MID_RIGHT: usize = 94;
    /// Background inset walking up the middle column
    pub const BOTTOM_MID: usize = 95;
    /// A second object low in the glyph, right of the first quarter
    pub const DOT_PART: usize = 96;
    pub const TWO_HLINES_UP: usize = 97;
    pub const TWO_HLINES_DOWN: usize = 98;
    pub const THREE_HLINES_UP: usize = 99;
    pub const THREE_HLINES_DOWN: usize = 100;
    /// A second object in the lower right of the glyph
    pub const COMMA_PART: usize = 101;
}

/// Fixed-length glyph description consumed by the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }
}

impl FeatureVector {
    /// Create an all-zero vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw values.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Number of entries, always [`FEATURE_COUNT`].
    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at `index`, `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Set the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= FEATURE_COUNT`.
    pub fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Set a 0/1 indicator.
    pub fn set_flag(&mut self, index: usize, on: bool) {
        self.set(index, if on { 1.0 } else { 0.0 });
    }

    /// All values in index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Count of entries that are not zero.
    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Tuning for [`FeatureExtractor`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorOptions {
    /// Tolerance under which the glyph top or bottom snaps onto the line
    /// (default: 0.025)
    pub snap_tolerance: f64,
    /// Snap tolerance for hole extents (default: 0.1)
    pub hole_snap_tolerance: f64,
    /// Height ratio under which the glyph is split into two vertical
    /// zones instead of three (default: 0.6)
    pub short_glyph_ratio: f64,
    /// Width of the horizontal brick used before counting horizontal
    /// lines (default: 6)
    pub hline_smoothing: u32,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            snap_tolerance: 0.025,
            hole_snap_tolerance: 0.1,
            short_glyph_ratio: 0.6,
            hline_smoothing: 6,
        }
    }
}

impl ExtractorOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line snap tolerance
    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Set the hole snap tolerance
    pub fn with_hole_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.hole_snap_tolerance = tolerance;
        self
    }

    /// Set the short glyph ratio
    pub fn with_short_glyph_ratio(mut self, ratio: f64) -> Self {
        self.short_glyph_ratio = ratio;
        self
    }

    /// Set the horizontal smoothing brick width
    pub fn with_hline_smoothing(mut self, width: u32) -> Self {
        self.hline_smoothing = width;
        self
    }

    fn validate(&self) -> RecogResult<()> {
        for (name, value) in [
            ("snap_tolerance", self.snap_tolerance),
            ("hole_snap_tolerance", self.hole_snap_tolerance),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(RecogError::InvalidParameter(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }
        if !(self.short_glyph_ratio > 0.0) {
            return Err(RecogError::InvalidParameter(format!(
                "short_glyph_ratio must be positive, got {}",
                self.short_glyph_ratio
            )));
        }
        if self.hline_smoothing == 0 {
            return Err(RecogError::InvalidParameter(
                "hline_smoothing must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything a feature group needs to measure one glyph.
pub(crate) struct Sample<'a, I: ?Sized> {
    pub text: &'a Bitmap,
    pub mask: &'a Bitmap,
    pub options: &'a ExtractorOptions,
    pub isolator: &'a I,
}

impl<I: StrokeIsolator + ?Sized> Sample<'_, I> {
    pub fn isolate(&self, kind: crate::isolate::Isolation) -> RecogResult<Bitmap> {
        self.isolator.isolate(kind, self.text, self.mask)
    }

    /// Glyph and line extents.
    pub fn frame(&self) -> RecogResult<Frame> {
        Frame::new(self.text, self.mask)
    }
}

/// Builds [`FeatureVector`]s with a [`StrokeIsolator`]
///
/// # Examples
///
/// ```
/// use glyphscan_core::{BitmapMut, Box};
/// use glyphscan_recog::features::{FeatureExtractor, index};
///
/// let mut mask = BitmapMut::new(20, 30).unwrap();
/// mask.set_region(&Box::new_unchecked(0, 5, 20, 20));
/// let mut text = BitmapMut::new(20, 30).unwrap();
/// text.set_region(&Box::new_unchecked(9, 5, 2, 20));
///
/// let extractor = FeatureExtractor::default();
/// let v = extractor.extract(&text.into(), &mask.into()).unwrap();
/// assert!(v[index::HEIGHT] > 0.4 && v[index::HEIGHT] < 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureExtractor<I = MorphIsolator> {
    options: ExtractorOptions,
    isolator: I,
}

impl Default for FeatureExtractor<MorphIsolator> {
    fn default() -> Self {
        Self {
            options: ExtractorOptions::default(),
            isolator: MorphIsolator::default(),
        }
    }
}

impl<I: StrokeIsolator> FeatureExtractor<I> {
    /// Create an extractor.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] when the options are out
    /// of range.
    pub fn new(options: ExtractorOptions, isolator: I) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self { options, isolator })
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// The isolator in use.
    pub fn isolator(&self) -> &I {
        &self.isolator
    }

    /// Measure one glyph.
    ///
    /// # Arguments
    ///
    /// * `text` - Glyph bitmap
    /// * `mask` - Text-line mask of the same width
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] when the widths differ.
    /// Groups that cannot be measured do not fail the call.
    pub fn extract(&self, text: &Bitmap, mask: &Bitmap) -> RecogResult<FeatureVector> {
        if text.width() != mask.width() {
            return Err(RecogError::InvalidParameter(format!(
                "text width {} differs from mask width {}",
                text.width(),
                mask.width()
            )));
        }
        let sample = Sample {
            text,
            mask,
            options: &self.options,
            isolator: &self.isolator,
        };
        let mut v = FeatureVector::new();
        apply("dimensions", dimensions::measure(&sample), &mut v);
        apply("bars", bars::measure(&sample), &mut v);
        apply("edges", edges::measure(&sample, false), &mut v);
        apply("notches", notches::measure(&sample), &mut v);
        apply("ends", ends::measure(&sample), &mut v);
        apply("parts", parts::measure(&sample), &mut v);
        apply("hole edges", holes::measure_edges(&sample), &mut v);
        apply("hole dimensions", holes::measure_dimensions(&sample), &mut v);
        apply("big edges", edges::measure(&sample, true), &mut v);
        Ok(v)
    }
}

/// Feature groups write their entries through this trait.
pub(crate) trait FeatureGroup {
    fn write(&self, v: &mut FeatureVector);
}

fn apply<G: FeatureGroup>(name: &str, group: RecogResult<G>, v: &mut FeatureVector) {
    match group {
        Ok(group) => group.write(v),
        Err(err) => log::debug!("skipping {name} features: {err}"),
    }
}
