//! Rectangle primitives shared by both partitioning schemes.

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// An axis-aligned integer rectangle in render-target pixels.
///
/// Used for scissor rectangles and bounding rectangles. The invariant
/// `min <= max` holds componentwise for every rect this crate produces.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct PixelRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl PixelRect {
    /// Create a rect from min/max corners.
    #[inline]
    pub const fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Create a rect from corner coordinates.
    #[inline]
    pub const fn from_coords(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Extent as a vector.
    #[inline]
    pub const fn size(&self) -> IVec2 {
        IVec2::new(self.width(), self.height())
    }

    /// Pixel area. Zero for degenerate rects.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Smallest rect enclosing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        PixelRect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of `self` and `other`, or `None` if they share no area.
    pub fn intersection(&self, other: &PixelRect) -> Option<PixelRect> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x < max.x && min.y < max.y {
            Some(PixelRect { min, max })
        } else {
            None
        }
    }

    /// True if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Translate by a pixel offset.
    #[inline]
    pub fn offset(&self, delta: IVec2) -> PixelRect {
        PixelRect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// A floating-point viewport description for the graphics API.
///
/// The viewport may be larger than its scissor rect and may have fractional
/// extents; the pipeline's viewport-to-NDC scaling is what makes the density
/// remapping work.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Viewport {
    pub top_left_x: f32,
    pub top_left_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(top_left_x: f32, top_left_y: f32, width: f32, height: f32) -> Self {
        Self {
            top_left_x,
            top_left_y,
            width,
            height,
        }
    }
}
