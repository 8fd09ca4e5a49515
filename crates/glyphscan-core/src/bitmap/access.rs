//! Pixel access
//!
//! Reads take signed coordinates and treat everything outside the grid as
//! background. Writes come in two flavours: [`BitmapMut::set_pixel`]
//! reports out-of-range coordinates as an error, while [`BitmapMut::set`]
//! and [`BitmapMut::clear`] silently ignore them.
//!
//! Pixel 0 of a row occupies bit 31 (MSB) of the row's first word.

use super::{Bitmap, BitmapData, BitmapMut};
use crate::error::{Error, Result};

/// Read bit `x` of a packed row.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Write bit `x` of a packed row; any non-zero `val` sets it.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 5) as usize];
    let mask = 0x8000_0000u32 >> (x & 31);
    if val != 0 {
        *word |= mask;
    } else {
        *word &= !mask;
    }
}

impl BitmapData {
    #[inline]
    fn get(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && get_data_bit(self.row(y as u32), x as u32) != 0
    }

    #[inline]
    fn write(&mut self, x: i32, y: i32, val: u32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        set_data_bit(self.row_mut(y as u32), x as u32, val);
        true
    }
}

impl Bitmap {
    /// True when `(x, y)` is foreground. Out-of-range reads are background.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.inner.get(x, y)
    }

    /// Pixel value (0 or 1) at `(x, y)`, `None` when out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(get_data_bit(self.inner.row(y), x))
    }
}

impl BitmapMut {
    /// True when `(x, y)` is foreground. Out-of-range reads are background.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.inner.get(x, y)
    }

    /// Pixel value (0 or 1) at `(x, y)`, `None` when out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(get_data_bit(self.inner.row(y), x))
    }

    /// Write a pixel; any non-zero `val` makes it foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` lies outside the bitmap.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        set_data_bit(self.inner.row_mut(y), x, val);
        Ok(())
    }

    /// Make `(x, y)` foreground; ignored when out of range.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        self.inner.write(x, y, 1);
    }

    /// Make `(x, y)` background; ignored when out of range.
    #[inline]
    pub fn clear(&mut self, x: i32, y: i32) {
        self.inner.write(x, y, 0);
    }

    /// Write a boolean pixel; ignored when out of range.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, on: bool) {
        self.inner.write(x, y, u32::from(on));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bit_packing() {
        let mut line = [0u32; 2];
        set_data_bit(&mut line, 0, 1);
        set_data_bit(&mut line, 33, 1);
        assert_eq!(line[0], 0x8000_0000);
        assert_eq!(line[1], 0x4000_0000);
        assert_eq!(get_data_bit(&line, 33), 1);
        set_data_bit(&mut line, 0, 0);
        assert_eq!(line[0], 0);
    }

    #[test]
    fn test_get_out_of_range_is_background() {
        let mut bm = BitmapMut::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                bm.set(x, y);
            }
        }
        assert!(bm.get(3, 3));
        assert!(!bm.get(4, 0));
        assert!(!bm.get(0, -1));
        assert!(!bm.get(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_set_pixel_checked() {
        let mut bm = BitmapMut::new(5, 5).unwrap();
        bm.set_pixel(4, 4, 1).unwrap();
        assert_eq!(bm.get_pixel(4, 4), Some(1));
        assert!(matches!(
            bm.set_pixel(5, 0, 1),
            Err(Error::OutOfBounds { x: 5, y: 0, .. })
        ));
        assert_eq!(bm.get_pixel(5, 0), None);
    }

    #[test]
    fn test_set_clear_ignore_out_of_range() {
        let mut bm = BitmapMut::new(5, 5).unwrap();
        bm.set(-1, 2);
        bm.set(2, 5);
        bm.clear(7, 7);
        let frozen: Bitmap = bm.into();
        assert!(frozen.is_blank());
    }
}
