//! Quad-Warp partitioning ("lens matched shading").
//!
//! A fixed 2×2 grid (mono) or two side-by-side 2×2 blocks (stereo). Unlike
//! the split-grid scheme, each quadrant is sized independently: the four
//! per-quadrant size fractions place the quadrant boundary point, and the
//! warp factors over-scan each quadrant's render viewport beyond its scissor
//! so the lens-distorted projection still covers the quadrant fully.

use crate::rect::{PixelRect, Viewport};
use glam::Vec2;

/// Columns in the mono grid.
pub const GRID_WIDTH: usize = 2;
/// Rows in the mono grid.
pub const GRID_HEIGHT: usize = 2;
/// Cells in the mono grid.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Cells in the stereo grid (two 2×2 blocks).
pub const STEREO_CELL_COUNT: usize = 2 * CELL_COUNT;

/// A single-eye 2×2 lens-matched configuration.
///
/// Sizes are fractions of the eye viewport extent (horizontal sizes of the
/// width, vertical sizes of the height); a pair summing to 1.0 covers the
/// full axis. Warp factors are unitless over-scan ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LensMatchedConfig {
    pub warp_left: f32,
    pub warp_right: f32,
    pub warp_up: f32,
    pub warp_down: f32,

    pub size_left: f32,
    pub size_right: f32,
    pub size_up: f32,
    pub size_down: f32,
}

/// A two-eye lens-matched configuration: the left eye's config plus its
/// mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LensMatchedStereoConfig {
    pub left: LensMatchedConfig,
    pub right: LensMatchedConfig,
}

/// Viewport and scissor rectangles for a mono lens-matched configuration,
/// row-major (upper-left, upper-right, lower-left, lower-right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensMatchedViewports {
    pub views: [Viewport; CELL_COUNT],
    pub scissors: [PixelRect; CELL_COUNT],
    pub bounding_rect: PixelRect,
}

/// Viewport and scissor rectangles for a stereo lens-matched configuration:
/// the left eye's four cells followed by the right eye's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensMatchedStereoViewports {
    pub views: [Viewport; STEREO_CELL_COUNT],
    pub scissors: [PixelRect; STEREO_CELL_COUNT],
    pub bounding_rect: PixelRect,
}

/// Round float edges to pixels (ties to even) and clamp to the original rect.
fn clamped_rect(original: &PixelRect, left: f32, top: f32, right: f32, bottom: f32) -> PixelRect {
    PixelRect::from_coords(
        (left.round_ties_even() as i32).max(original.min.x),
        (top.round_ties_even() as i32).max(original.min.y),
        (right.round_ties_even() as i32).min(original.max.x),
        (bottom.round_ties_even() as i32).min(original.max.y),
    )
}

impl LensMatchedConfig {
    /// Compute the viewport and scissor rectangles for this configuration.
    pub fn viewports(&self, original: &PixelRect) -> LensMatchedViewports {
        self.viewports_inner(original, false)
    }

    /// Stereo variant: additionally shrinks the bounding rect so its extent
    /// equals the rounded sum of the quadrant sizes, compensating the
    /// floor/ceil asymmetry of the clamped edges. Required so the two eyes'
    /// render-target allocations tile exactly.
    fn viewports_for_stereo(&self, original: &PixelRect) -> LensMatchedViewports {
        self.viewports_inner(original, true)
    }

    fn viewports_inner(&self, original: &PixelRect, rescale_rt: bool) -> LensMatchedViewports {
        let width = original.width() as f32;
        let height = original.height() as f32;

        // Quadrant boundary point, rounded half to even.
        let center = Vec2::new(
            (original.min.x as f32 + width * self.size_left / (self.size_left + self.size_right))
                .round_ties_even(),
            (original.min.y as f32 + height * self.size_up / (self.size_up + self.size_down))
                .round_ties_even(),
        );

        let left_px = self.size_left * width;
        let right_px = self.size_right * width;
        let up_px = self.size_up * height;
        let down_px = self.size_down * height;

        // Render viewports over-scan the quadrant by the warp factor.
        let view_left = left_px * (1.0 + self.warp_left);
        let view_right = right_px * (1.0 + self.warp_right);
        let view_up = up_px * (1.0 + self.warp_up);
        let view_down = down_px * (1.0 + self.warp_down);

        let views = [
            Viewport::new(
                center.x - view_left,
                center.y - view_up,
                view_left * 2.0,
                view_up * 2.0,
            ),
            Viewport::new(
                center.x - view_right,
                center.y - view_up,
                view_right * 2.0,
                view_up * 2.0,
            ),
            Viewport::new(
                center.x - view_left,
                center.y - view_down,
                view_left * 2.0,
                view_down * 2.0,
            ),
            Viewport::new(
                center.x - view_right,
                center.y - view_down,
                view_right * 2.0,
                view_down * 2.0,
            ),
        ];

        // Scissors are exactly the quadrant sizes from the center, clamped
        // to the original rect.
        let scissors = [
            clamped_rect(original, center.x - left_px, center.y - up_px, center.x, center.y),
            clamped_rect(
                original,
                center.x,
                center.y - up_px,
                center.x + right_px,
                center.y,
            ),
            clamped_rect(
                original,
                center.x - left_px,
                center.y,
                center.x,
                center.y + down_px,
            ),
            clamped_rect(original, center.x, center.y, center.x + right_px, center.y + down_px),
        ];

        let mut bounding_rect = scissors[0]
            .union(&scissors[1])
            .union(&scissors[2])
            .union(&scissors[3]);

        if rescale_rt {
            // Snap the allocation to the rounded size sums; the clamped
            // quadrant edges can come out one pixel long.
            let want_w = (left_px + right_px).round_ties_even() as i32;
            let want_h = (up_px + down_px).round_ties_even() as i32;
            bounding_rect.max.x -= bounding_rect.width() - want_w;
            bounding_rect.max.y -= bounding_rect.height() - want_h;
        }

        LensMatchedViewports {
            views,
            scissors,
            bounding_rect,
        }
    }

    /// A configuration mirrored left-to-right; used for the other eye.
    pub fn mirrored(&self) -> Self {
        Self {
            warp_left: self.warp_right,
            warp_right: self.warp_left,
            size_left: self.size_right,
            size_right: self.size_left,
            ..*self
        }
    }

    /// Build a stereo configuration from this eye config and its mirror.
    pub fn to_stereo(&self) -> LensMatchedStereoConfig {
        LensMatchedStereoConfig {
            left: *self,
            right: self.mirrored(),
        }
    }
}

impl LensMatchedStereoConfig {
    /// Compute the eight viewport and scissor rectangles for this
    /// configuration.
    ///
    /// The original rect is split into two `round((w - gap) / 2)`-wide
    /// halves separated by `viewport_gap` pixels; each eye is computed
    /// independently and the results are concatenated.
    pub fn viewports(
        &self,
        original: &PixelRect,
        viewport_gap: i32,
    ) -> LensMatchedStereoViewports {
        let scaled_width =
            ((original.width() - viewport_gap) as f32 * 0.5).round_ties_even() as i32;

        let left_rect = PixelRect::from_coords(
            original.min.x,
            original.min.y,
            original.min.x + scaled_width,
            original.max.y,
        );
        let right_rect = PixelRect::from_coords(
            original.max.x - scaled_width,
            original.min.y,
            original.max.x,
            original.max.y,
        );

        let left = self.left.viewports_for_stereo(&left_rect);
        let right = self.right.viewports_for_stereo(&right_rect);
        LensMatchedViewports::merge(&left, &right)
    }
}

impl LensMatchedViewports {
    /// Concatenate two single-eye viewport sets and union their bounding
    /// rects. Unlike the split-grid merge, no cells are shared between eyes.
    pub fn merge(left: &Self, right: &Self) -> LensMatchedStereoViewports {
        let mut views = [Viewport::new(0.0, 0.0, 0.0, 0.0); STEREO_CELL_COUNT];
        let mut scissors = [PixelRect::from_coords(0, 0, 0, 0); STEREO_CELL_COUNT];

        views[..CELL_COUNT].copy_from_slice(&left.views);
        views[CELL_COUNT..].copy_from_slice(&right.views);
        scissors[..CELL_COUNT].copy_from_slice(&left.scissors);
        scissors[CELL_COUNT..].copy_from_slice(&right.scissors);

        LensMatchedStereoViewports {
            views,
            scissors,
            bounding_rect: left.bounding_rect.union(&right.bounding_rect),
        }
    }
}
