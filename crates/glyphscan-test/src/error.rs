//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII-art fixture could not be turned into a bitmap
    #[error("bad fixture at row {row}: {message}")]
    Fixture { row: usize, message: String },

    /// Core bitmap error while building a fixture
    #[error("bitmap error: {0}")]
    Bitmap(#[from] glyphscan_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
