//! glyphscan-core - Basic data structures for glyph recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the glyphscan workspace:
//!
//! - [`Bitmap`] / [`BitmapMut`] - Binary pixel grid (immutable / mutable)
//! - [`Box`] - Rectangle region (bounding boxes of components)
//!
//! Pixel value 0 is background (white) and 1 is foreground (black).
//! Reads outside the grid always report background, so scanning code can
//! walk one step past an edge without special casing it.

pub mod bitmap;
pub mod box_;
pub mod error;

pub use bitmap::rop::RopOp;
pub use bitmap::{Bitmap, BitmapMut, get_data_bit, set_data_bit};
pub use box_::Box;
pub use error::{Error, Result};
