//! glyphscan - Glyph recognition for binarized text
//!
//! # Overview
//!
//! glyphscan recognises isolated glyphs of Hebrew print. A glyph bitmap
//! and a mask marking its text line go through three stages:
//!
//! - Bitmap filters and connected components ([`region`], [`morph`])
//! - Geometric feature extraction into a 102-entry vector ([`recog`])
//! - Rule-based classification into one of 34 glyph classes
//!
//! # Example
//!
//! ```
//! use glyphscan::{BitmapMut, Box, GlyphClass, recognize};
//!
//! let mut mask = BitmapMut::new(30, 40).unwrap();
//! mask.set_region(&Box::new_unchecked(0, 10, 30, 20));
//! let text = BitmapMut::new(30, 40).unwrap();
//!
//! // an empty glyph has nothing to recognise
//! let class = recognize(&text.into(), &mask.into()).unwrap();
//! assert_eq!(class, GlyphClass::Unclassified);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphscan_morph as morph;
pub use glyphscan_recog as recog;
pub use glyphscan_region as region;

pub use glyphscan_recog::{
    CLASS_COUNT, Classifier, FEATURE_COUNT, FeatureExtractor, FeatureVector, GlyphClass,
    RecogError, RecogResult,
};

/// Recognise one glyph with the default extractor and classifier.
///
/// # Arguments
///
/// * `text` - Glyph bitmap
/// * `mask` - Text-line mask of the same width
///
/// # Errors
///
/// Returns [`RecogError::InvalidParameter`] when `text` and `mask` differ
/// in width.
pub fn recognize(text: &Bitmap, mask: &Bitmap) -> RecogResult<GlyphClass> {
    let v = FeatureExtractor::default().extract(text, mask)?;
    Ok(Classifier::new().classify(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_rejects_mismatched_widths() {
        let text = Bitmap::new(10, 20).unwrap();
        let mask = Bitmap::new(12, 20).unwrap();
        assert!(matches!(
            recognize(&text, &mask),
            Err(RecogError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_counts() {
        assert_eq!(FeatureVector::new().len(), FEATURE_COUNT);
        assert_eq!(Classifier::new().class_count(), CLASS_COUNT);
    }
}
