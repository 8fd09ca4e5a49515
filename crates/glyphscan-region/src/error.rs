//! Error types for glyphscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Component index past the end of the component list
    #[error("component index {index} out of range ({len} components)")]
    ComponentOutOfRange { index: usize, len: usize },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i32, y: i32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Label storage could not be reserved
    #[error("label storage allocation failed for {0} pixels")]
    AllocationFailed(usize),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
