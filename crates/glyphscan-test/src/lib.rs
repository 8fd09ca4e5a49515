//! glyphscan-test - Regression test framework for glyphscan
//!
//! Each regression test creates a [`RegParams`], runs a numbered sequence
//! of checks against it and asserts on [`RegParams::cleanup`]. Three modes
//! are supported:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use glyphscan_test::{RegParams, bitmap_from_ascii};
//!
//! let bm = bitmap_from_ascii(&["##..", "##.."]).unwrap();
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(4.0, bm.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{bitmap_from_ascii, bitmap_to_ascii, filled_boxes};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphscan-test is at crates/glyphscan-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
