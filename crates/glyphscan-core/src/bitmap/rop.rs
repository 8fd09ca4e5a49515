//! Boolean raster operations
//!
//! Word-at-a-time combination of two bitmaps of identical extent, plus
//! inversion. Padding bits past the last column stay zero after every
//! operation.

use super::{Bitmap, BitmapData, BitmapMut};
use crate::error::{Error, Result};

/// Binary combination applied pixel by pixel as `dst = op(dst, src)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopOp {
    /// Foreground in both
    And,
    /// Foreground in either
    Or,
    /// Foreground in exactly one
    Xor,
    /// Foreground in the destination but not the source
    Subtract,
}

impl RopOp {
    #[inline]
    fn apply(self, dst: u32, src: u32) -> u32 {
        match self {
            RopOp::And => dst & src,
            RopOp::Or => dst | src,
            RopOp::Xor => dst ^ src,
            RopOp::Subtract => dst & !src,
        }
    }
}

impl BitmapData {
    fn check_same_size(&self, other: &BitmapData) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        Ok(())
    }

    fn rop_from(&mut self, other: &BitmapData, op: RopOp) -> Result<()> {
        self.check_same_size(other)?;
        for (d, &s) in self.data.iter_mut().zip(other.data.iter()) {
            *d = op.apply(*d, s);
        }
        Ok(())
    }

    fn invert(&mut self) {
        let wpl = self.wpl as usize;
        let tail = self.last_word_mask();
        for row in self.data.chunks_mut(wpl) {
            for w in row.iter_mut() {
                *w = !*w;
            }
            if let Some(last) = row.last_mut() {
                *last &= tail;
            }
        }
    }
}

impl Bitmap {
    /// Combine with another bitmap into a new one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the extents differ.
    pub fn rop(&self, other: &Bitmap, op: RopOp) -> Result<Bitmap> {
        let mut out = self.to_mut();
        out.rop_inplace(other, op)?;
        Ok(out.into())
    }

    /// Pixels foreground in both bitmaps.
    pub fn and(&self, other: &Bitmap) -> Result<Bitmap> {
        self.rop(other, RopOp::And)
    }

    /// Pixels foreground in either bitmap.
    pub fn or(&self, other: &Bitmap) -> Result<Bitmap> {
        self.rop(other, RopOp::Or)
    }

    /// Pixels foreground in exactly one bitmap.
    pub fn xor(&self, other: &Bitmap) -> Result<Bitmap> {
        self.rop(other, RopOp::Xor)
    }

    /// Pixels foreground here but not in `other`.
    pub fn and_not(&self, other: &Bitmap) -> Result<Bitmap> {
        self.rop(other, RopOp::Subtract)
    }

    /// Swap foreground and background.
    pub fn invert(&self) -> Bitmap {
        let mut out = self.to_mut();
        out.invert_inplace();
        out.into()
    }

    /// True when every foreground pixel here is also foreground in `other`.
    ///
    /// Bitmaps of different extent are never subsets of each other.
    pub fn is_subset_of(&self, other: &Bitmap) -> bool {
        self.sizes_equal(other)
            && self
                .data()
                .iter()
                .zip(other.data().iter())
                .all(|(&a, &b)| a & !b == 0)
    }
}

impl BitmapMut {
    /// Combine `other` into this bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the extents differ.
    pub fn rop_inplace(&mut self, other: &Bitmap, op: RopOp) -> Result<()> {
        self.inner.rop_from(&other.inner, op)
    }

    /// OR `other` into this bitmap.
    pub fn or_inplace(&mut self, other: &Bitmap) -> Result<()> {
        self.rop_inplace(other, RopOp::Or)
    }

    /// AND `other` into this bitmap.
    pub fn and_inplace(&mut self, other: &Bitmap) -> Result<()> {
        self.rop_inplace(other, RopOp::And)
    }

    /// Remove the foreground of `other` from this bitmap.
    pub fn subtract_inplace(&mut self, other: &Bitmap) -> Result<()> {
        self.rop_inplace(other, RopOp::Subtract)
    }

    /// Swap foreground and background in place.
    pub fn invert_inplace(&mut self) {
        self.inner.invert();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Bitmap, Bitmap) {
        let mut a = BitmapMut::new(40, 2).unwrap();
        let mut b = BitmapMut::new(40, 2).unwrap();
        a.set(0, 0);
        a.set(35, 1);
        b.set(35, 1);
        b.set(10, 0);
        (a.into(), b.into())
    }

    #[test]
    fn test_rop_binary_ops() {
        let (a, b) = pair();
        let and = a.and(&b).unwrap();
        assert_eq!(and.count_foreground(), 1);
        assert!(and.get(35, 1));

        let or = a.or(&b).unwrap();
        assert_eq!(or.count_foreground(), 3);

        let xor = a.xor(&b).unwrap();
        assert_eq!(xor.count_foreground(), 2);
        assert!(!xor.get(35, 1));

        let diff = a.and_not(&b).unwrap();
        assert_eq!(diff.count_foreground(), 1);
        assert!(diff.get(0, 0));
    }

    #[test]
    fn test_rop_size_mismatch() {
        let a = Bitmap::new(4, 4).unwrap();
        let b = Bitmap::new(5, 4).unwrap();
        assert!(matches!(
            a.or(&b),
            Err(Error::IncompatibleSizes(4, 4, 5, 4))
        ));
    }

    #[test]
    fn test_invert_keeps_padding_clear() {
        let bm = Bitmap::new(35, 3).unwrap();
        let inv = bm.invert();
        assert_eq!(inv.count_foreground(), 35 * 3);
        assert_eq!(inv.invert(), bm);
    }

    #[test]
    fn test_is_subset_of() {
        let (a, b) = pair();
        let or = a.or(&b).unwrap();
        assert!(a.is_subset_of(&or));
        assert!(!or.is_subset_of(&a));
    }
}
