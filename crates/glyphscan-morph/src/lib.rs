//! glyphscan-morph - Morphological filters for glyph bitmaps
//!
//! This crate provides:
//!
//! - Binary dilation and erosion with rectangular bricks
//! - Horizontal and vertical gap linking
//! - Component-aware filters: size selection, bounding boxes, fill,
//!   max-height bands, adaptive dot removal, thin-object linking
//! - Thinning (skeletonization) with end point and junction detection
//!
//! All operations return a new bitmap of the input's extent.

pub mod binary;
mod error;
pub mod filter;
pub mod link;
pub mod thin;

pub use error::{MorphError, MorphResult};

pub use binary::{dilate, dilate_brick, erode, erode_brick, neighbour_count};
pub use filter::{
    RemoveDotsOptions, count_objects, filter_boxes, filter_by_size, filter_fill,
    filter_hlink_thin, filter_obj_max_height, filter_remove_dots,
};
pub use link::{hlink, vlink};
pub use thin::{endpoints, junctions, thin};
