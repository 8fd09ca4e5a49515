//! Error types for glyphscan-recog

use thiserror::Error;

/// Errors that can occur during feature extraction and recognition
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Component labeling error
    #[error("region error: {0}")]
    Region(#[from] glyphscan_region::RegionError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] glyphscan_morph::MorphError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The glyph or line geometry cannot support a measurement
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
