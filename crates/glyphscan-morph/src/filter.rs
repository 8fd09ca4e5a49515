//! Component-aware bitmap filters
//!
//! Every filter labels its input with [`ComponentMap`] where needed and
//! returns a new bitmap of the same extent. Inputs are never modified.

use crate::binary::{dilate, neighbour_count};
use crate::error::{MorphError, MorphResult};
use crate::link::{hlink, vlink};
use glyphscan_core::{Bitmap, BitmapMut, Box};
use glyphscan_region::ComponentMap;

/// Keep the components whose bounding-box height lies in
/// `[min_h, max_h]` and width in `[min_w, max_w]`.
///
/// # Arguments
///
/// * `bm` - Input bitmap
/// * `min_h`, `max_h` - Inclusive height range
/// * `min_w`, `max_w` - Inclusive width range
///
/// # Returns
///
/// A subset of the input's foreground.
pub fn filter_by_size(
    bm: &Bitmap,
    min_h: i32,
    max_h: i32,
    min_w: i32,
    max_w: i32,
) -> MorphResult<Bitmap> {
    let cm = ComponentMap::new(bm)?;
    Ok(cm.to_bitmap_by_size(min_h, max_h, min_w, max_w)?)
}

/// Replace every component by the outline of its bounding box.
pub fn filter_boxes(bm: &Bitmap) -> MorphResult<Bitmap> {
    let cm = ComponentMap::new(bm)?;
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    for comp in cm.components() {
        out.draw_box(&comp.bounds);
    }
    Ok(out.into())
}

/// Approximate a solid fill of every component.
///
/// Each component is linked horizontally with a gap of a quarter of its
/// width, then vertically with a gap of a quarter of its height.
pub fn filter_fill(bm: &Bitmap) -> MorphResult<Bitmap> {
    let cm = ComponentMap::new(bm)?;
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    for (index, comp) in cm.components().iter().enumerate() {
        let alone = cm.to_bitmap_by_index(index)?;
        let linked = hlink(&alone, (comp.bounds.w / 4) as u32)?;
        let linked = vlink(&linked, (comp.bounds.h / 4) as u32)?;
        out.or_inplace(&linked)?;
    }
    Ok(out.into())
}

/// Keep only the first `height` rows of every component, counted from
/// the component's top row.
pub fn filter_obj_max_height(bm: &Bitmap, height: u32) -> MorphResult<Bitmap> {
    let cm = ComponentMap::new(bm)?;
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    let rows = height.min(bm.height()) as i32;
    for (index, comp) in cm.components().iter().enumerate() {
        let alone = cm.to_bitmap_by_index(index)?;
        let band = Box::new_unchecked(0, comp.bounds.y, bm.width() as i32, rows);
        out.or_inplace(&alone.retain_region(&band))?;
    }
    Ok(out.into())
}

/// Link the thin components horizontally and keep everything else.
///
/// Components between 5 and `max_height` rows tall and between 5 pixels
/// and half the bitmap wide are linked with `gap`; the result is merged
/// back with the input.
pub fn filter_hlink_thin(bm: &Bitmap, gap: u32, max_height: i32) -> MorphResult<Bitmap> {
    let thin = filter_by_size(bm, 5, max_height, 5, bm.width() as i32 / 2)?;
    let mut out = hlink(&thin, gap)?.to_mut();
    out.or_inplace(bm)?;
    Ok(out.into())
}

/// Number of 8-connected components in `bm`.
pub fn count_objects(bm: &Bitmap) -> MorphResult<usize> {
    Ok(ComponentMap::new(bm)?.len())
}

/// Parameters of [`filter_remove_dots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveDotsOptions {
    /// A foreground pixel of a large object survives while fewer than
    /// this many of its 8 neighbours are background
    pub erosion_n: u32,
    /// A background pixel near a small object turns foreground when at
    /// least this many of its 8 neighbours are foreground
    pub dilation_n: u32,
}

impl Default for RemoveDotsOptions {
    fn default() -> Self {
        Self {
            erosion_n: 3,
            dilation_n: 5,
        }
    }
}

impl RemoveDotsOptions {
    /// Create options with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the erosion threshold.
    pub fn with_erosion_n(mut self, n: u32) -> Self {
        self.erosion_n = n;
        self
    }

    /// Set the dilation threshold.
    pub fn with_dilation_n(mut self, n: u32) -> Self {
        self.dilation_n = n;
        self
    }

    fn validate(&self) -> MorphResult<()> {
        if self.erosion_n > 8 || self.dilation_n > 8 {
            return Err(MorphError::InvalidParameters(format!(
                "neighbour thresholds must be at most 8, got erosion_n={} dilation_n={}",
                self.erosion_n, self.dilation_n
            )));
        }
        Ok(())
    }

    /// Run [`filter_remove_dots`] with these thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidParameters`] if a threshold exceeds 8.
    pub fn apply(&self, bm: &Bitmap) -> MorphResult<Bitmap> {
        self.validate()?;
        filter_remove_dots(bm, self.erosion_n, self.dilation_n)
    }
}

/// Adaptive denoising: erode large objects, dilate small ones.
///
/// The input is dilated once with the 3x3 square and the dilated view is
/// labeled. A pixel belongs to a large object when its dilated component
/// is wider than a quarter of the bitmap or taller than a quarter of it.
///
/// - Large: a foreground pixel survives iff fewer than `erosion_n` of its
///   8 neighbours are background.
/// - Small: foreground always survives; a background pixel turns
///   foreground iff at least `dilation_n` neighbours are foreground.
///
/// Only interior pixels are evaluated; the one-pixel border of the
/// output is background.
pub fn filter_remove_dots(bm: &Bitmap, erosion_n: u32, dilation_n: u32) -> MorphResult<Bitmap> {
    let w = bm.width() as i32;
    let h = bm.height() as i32;
    let mut out = BitmapMut::new(bm.width(), bm.height())?;
    let grown = dilate(bm)?;
    let cm = ComponentMap::new(&grown)?;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let (cw, ch) = match cm.label(x, y) {
                0 => (0, 0),
                label => cm
                    .component(label as usize - 1)
                    .map_or((0, 0), |c| (c.bounds.w, c.bounds.h)),
            };
            let on = bm.get(x, y);
            let black = neighbour_count(bm, x, y);
            let keep = if cw > w / 4 || ch > h / 4 {
                on && (8 - black) < erosion_n
            } else {
                on || black >= dilation_n
            };
            if keep {
                out.set(x, y);
            }
        }
    }
    Ok(out.into())
}
