//! glyphscan-region - Region analysis for glyph bitmaps
//!
//! This crate provides:
//!
//! - **Connected component labeling** - [`ComponentMap`], 8-connected,
//!   dense labels in first-seen order
//! - **Component queries** - counting and ranking components by size
//! - **Seed fill** - background flood fill and hole detection
//!
//! # Examples
//!
//! ```
//! use glyphscan_core::{BitmapMut, Box};
//! use glyphscan_region::ComponentMap;
//!
//! let mut bm = BitmapMut::new(50, 50).unwrap();
//! bm.set_region(&Box::new_unchecked(0, 0, 5, 5));
//! bm.set_region(&Box::new_unchecked(45, 45, 5, 5));
//!
//! let cm = ComponentMap::new(&bm.into()).unwrap();
//! assert_eq!(cm.len(), 2);
//! assert_eq!(cm.components()[1].pixel_count, 25);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod seedfill;

// Re-export core types
pub use glyphscan_core;

pub use conncomp::{Component, ComponentMap, ConnectivityType};
pub use error::{RegionError, RegionResult};
pub use label::{count_components, nth_largest_component};
pub use seedfill::{background_from_border, fill_holes, floodfill, holes};
