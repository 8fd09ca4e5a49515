//! Bitmap - binary pixel grid
//!
//! The `Bitmap` structure holds one glyph candidate, a line mask, or any
//! intermediate produced by the filters and isolation transforms.
//!
//! # Pixel layout
//!
//! - Pixels are stored 1 bit each in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - Padding bits past the last column are always zero
//!
//! # Ownership model
//!
//! `Bitmap` uses `Arc` for cheap cloning (shared ownership). To modify
//! pixels, convert to `BitmapMut` via [`Bitmap::try_into_mut`] or
//! [`Bitmap::to_mut`], then convert back with `Into<Bitmap>`.

mod access;
mod draw;
pub mod rop;

pub use access::{get_data_bit, set_data_bit};

use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BitmapData {
    width: u32,
    height: u32,
    wpl: u32,
    data: Vec<u32>,
}

impl BitmapData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = width.div_ceil(32);
        let words = (wpl as usize)
            .checked_mul(height as usize)
            .ok_or(Error::AllocationFailed(usize::MAX))?;
        let mut data = Vec::new();
        data.try_reserve_exact(words)
            .map_err(|_| Error::AllocationFailed(words))?;
        data.resize(words, 0);
        Ok(Self {
            width,
            height,
            wpl,
            data,
        })
    }

    #[inline]
    fn row(&self, y: u32) -> &[u32] {
        let start = (y * self.wpl) as usize;
        &self.data[start..start + self.wpl as usize]
    }

    #[inline]
    fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.wpl) as usize;
        let wpl = self.wpl as usize;
        &mut self.data[start..start + wpl]
    }

    /// Mask selecting the valid bits of the last word in a row.
    #[inline]
    fn last_word_mask(&self) -> u32 {
        match self.width % 32 {
            0 => u32::MAX,
            r => !(u32::MAX >> r),
        }
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

/// Binary image shared by reference count.
///
/// # Examples
///
/// ```
/// use glyphscan_core::Bitmap;
///
/// let bm = Bitmap::new(20, 30).unwrap();
/// assert_eq!(bm.width(), 20);
/// assert_eq!(bm.height(), 30);
/// assert!(!bm.get(5, 5));
/// assert!(!bm.get(-1, 100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    inner: Arc<BitmapData>,
}

impl Bitmap {
    /// Create an all-background bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::AllocationFailed`] if the pixel storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Bitmap {
            inner: Arc::new(BitmapData::zeroed(width, height)?),
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Raw packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        self.inner.row(y)
    }

    /// Create an all-background bitmap with the same extent.
    pub fn create_template(&self) -> Self {
        let inner = BitmapData {
            width: self.inner.width,
            height: self.inner.height,
            wpl: self.inner.wpl,
            data: vec![0u32; self.inner.data.len()],
        };
        Bitmap {
            inner: Arc::new(inner),
        }
    }

    /// True when both bitmaps have the same width and height.
    pub fn sizes_equal(&self, other: &Bitmap) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Number of foreground pixels.
    pub fn count_foreground(&self) -> u64 {
        self.inner
            .data
            .iter()
            .map(|w| u64::from(w.count_ones()))
            .sum()
    }

    /// True when no pixel is foreground.
    pub fn is_blank(&self) -> bool {
        self.inner.data.iter().all(|&w| w == 0)
    }

    /// True when row `y` holds at least one foreground pixel.
    ///
    /// Rows outside the bitmap report `false`.
    pub fn row_has_foreground(&self, y: i32) -> bool {
        if y < 0 || y as u32 >= self.inner.height {
            return false;
        }
        self.inner.row(y as u32).iter().any(|&w| w != 0)
    }

    /// First and last rows that hold foreground, `None` for a blank bitmap.
    pub fn foreground_rows(&self) -> Option<(i32, i32)> {
        let h = self.inner.height as i32;
        let first = (0..h).find(|&y| self.row_has_foreground(y))?;
        let last = (first..h).rev().find(|&y| self.row_has_foreground(y))?;
        Some((first, last))
    }

    /// True when column `x` holds at least one foreground pixel.
    ///
    /// Columns outside the bitmap report `false`.
    pub fn column_has_foreground(&self, x: i32) -> bool {
        (0..self.inner.height as i32).any(|y| self.get(x, y))
    }

    /// First and last columns that hold foreground, `None` for a blank bitmap.
    pub fn foreground_columns(&self) -> Option<(i32, i32)> {
        let w = self.inner.width as i32;
        let first = (0..w).find(|&x| self.column_has_foreground(x))?;
        let last = (first..w).rev().find(|&x| self.column_has_foreground(x))?;
        Some((first, last))
    }

    /// Bounding box of all foreground pixels, `None` for a blank bitmap.
    pub fn foreground_bounds(&self) -> Option<crate::Box> {
        let (y0, y1) = self.foreground_rows()?;
        let (x0, x1) = self.foreground_columns()?;
        Some(crate::Box::from_extent(x0, y0, x1, y1))
    }

    /// Try to take unique ownership of the pixel data.
    ///
    /// Fails (returning `self`) when other clones share the data.
    pub fn try_into_mut(self) -> std::result::Result<BitmapMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(BitmapMut { inner }),
            Err(inner) => Err(Bitmap { inner }),
        }
    }

    /// Copy the pixel data into a new mutable bitmap.
    pub fn to_mut(&self) -> BitmapMut {
        BitmapMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable binary image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapMut {
    inner: BitmapData,
}

impl BitmapMut {
    /// Create an all-background mutable bitmap.
    ///
    /// # Errors
    ///
    /// Same as [`Bitmap::new`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(BitmapMut {
            inner: BitmapData::zeroed(width, height)?,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Raw packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Raw packed pixel words, mutable.
    ///
    /// Callers must keep the padding bits of each row zero.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Packed words of row `y`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        self.inner.row(y)
    }

    /// Packed words of row `y`, mutable.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        self.inner.row_mut(y)
    }

    /// Reset every pixel to background.
    pub fn clear_all(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<BitmapMut> for Bitmap {
    fn from(bm: BitmapMut) -> Self {
        Bitmap {
            inner: Arc::new(bm.inner),
        }
    }
}
