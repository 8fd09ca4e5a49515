//! Box - axis-aligned rectangle
//!
//! Bounding boxes of connected components and drawing regions are
//! expressed with this type. Coordinates are signed so that callers can
//! describe regions that hang off the bitmap and clip them afterwards.

use crate::error::{Error, Result};

/// An axis-aligned rectangle with its origin at the top-left corner.
///
/// `right()` and `bottom()` are exclusive; `last_x()` and `last_y()` give
/// the inclusive far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `w` or `h` is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box extent must be non-negative: w={w}, h={h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validating its extent.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the box spanning the inclusive pixel range
    /// `min_x..=max_x` by `min_y..=max_y`.
    ///
    /// The corners may be given in any order.
    pub fn from_extent(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        let (x0, x1) = (min_x.min(max_x), min_x.max(max_x));
        let (y0, y1) = (min_y.min(max_y), min_y.max(max_y));
        Self {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        }
    }

    /// Right x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Last column covered by the box.
    #[inline]
    pub fn last_x(&self) -> i32 {
        self.right() - 1
    }

    /// Last row covered by the box.
    #[inline]
    pub fn last_y(&self) -> i32 {
        self.bottom() - 1
    }

    /// Area in pixels.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// True when the box covers no pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a pixel lies inside the box.
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if another box lies entirely inside this one.
    pub fn contains_box(&self, other: &Box) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlap of two boxes, `None` if they do not share a pixel.
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (x < right && y < bottom).then(|| Box::new_unchecked(x, y, right - x, bottom - y))
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &Box) -> Box {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Box::new_unchecked(x, y, right - x, bottom - y)
    }

    /// Restrict the box to a `width x height` grid anchored at the origin.
    pub fn clip(&self, width: u32, height: u32) -> Option<Box> {
        let bounds = Box::new_unchecked(0, 0, clamp_dim(width), clamp_dim(height));
        self.intersect(&bounds)
    }
}

fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_creation() {
        let b = Box::new(3, 4, 10, 5).unwrap();
        assert_eq!(b.right(), 13);
        assert_eq!(b.bottom(), 9);
        assert_eq!(b.last_x(), 12);
        assert_eq!(b.last_y(), 8);
        assert_eq!(b.area(), 50);
        assert!(Box::new(0, 0, -1, 2).is_err());
    }

    #[test]
    fn test_box_from_extent() {
        let b = Box::from_extent(7, 2, 3, 2);
        assert_eq!(b, Box::new_unchecked(3, 2, 5, 1));
        assert!(b.contains_point(3, 2));
        assert!(b.contains_point(7, 2));
        assert!(!b.contains_point(8, 2));
    }

    #[test]
    fn test_box_intersect_union() {
        let a = Box::new_unchecked(0, 0, 10, 10);
        let b = Box::new_unchecked(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Box::new_unchecked(5, 5, 5, 5)));
        assert_eq!(a.union(&b), Box::new_unchecked(0, 0, 15, 15));
        let far = Box::new_unchecked(20, 20, 2, 2);
        assert_eq!(a.intersect(&far), None);
        assert!(a.union(&b).contains_box(&a));
    }

    #[test]
    fn test_box_clip() {
        let b = Box::new_unchecked(-2, -2, 6, 6);
        assert_eq!(b.clip(3, 3), Some(Box::new_unchecked(0, 0, 3, 3)));
        assert_eq!(Box::new_unchecked(5, 5, 2, 2).clip(3, 3), None);
    }
}
