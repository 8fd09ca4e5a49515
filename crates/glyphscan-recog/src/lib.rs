//! glyphscan-recog - Glyph feature extraction and classification
//!
//! This crate provides the recognition stages:
//!
//! - **Stroke isolation**: [`StrokeIsolator`] pulls one kind of structure
//!   (bars, edges, notches, holes, skeleton points) out of a glyph;
//!   [`MorphIsolator`] implements every kind with the workspace morphology
//! - **Feature extraction**: [`FeatureExtractor`] probes the isolated
//!   bitmaps and fills a 102-entry [`FeatureVector`]
//! - **Classification**: [`Classifier`] scores the vector against a fixed
//!   rule table and picks a [`GlyphClass`]
//!
//! # Quick Start
//!
//! ```
//! use glyphscan_core::{BitmapMut, Box};
//! use glyphscan_recog::{Classifier, FeatureExtractor};
//!
//! let mut mask = BitmapMut::new(24, 40).unwrap();
//! mask.set_region(&Box::new_unchecked(0, 10, 24, 20));
//! let mut text = BitmapMut::new(24, 40).unwrap();
//! text.set_region(&Box::new_unchecked(4, 10, 16, 2));
//!
//! let v = FeatureExtractor::default()
//!     .extract(&text.into(), &mask.into())
//!     .unwrap();
//! let class = Classifier::new().classify(&v);
//! println!("recognised {:?} ({})", class, class.label());
//! ```

pub mod classify;
mod error;
pub mod features;
pub mod isolate;

pub use error::{RecogError, RecogResult};

pub use classify::{CLASS_COUNT, Classifier, GlyphClass};
pub use features::{ExtractorOptions, FEATURE_COUNT, FeatureExtractor, FeatureVector};
pub use isolate::{Isolation, IsolatorOptions, MorphIsolator, StrokeIsolator};

// Re-export lower layers for convenience
pub use glyphscan_core;
pub use glyphscan_morph;
pub use glyphscan_region;
