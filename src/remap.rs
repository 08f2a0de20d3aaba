//! UV remapping between linear and partitioned space.
//!
//! From a computed grid this module derives compact per-axis scale/bias
//! tables that map any UV in [0, 1] either direction in O(1) with at most two
//! threshold comparisons per axis. The tables are flat `#[repr(C)]` POD
//! structs so a renderer can upload them verbatim as a constant buffer.

use crate::lens_matched::{LensMatchedConfig, LensMatchedViewports};
use crate::multires::{MultiResConfig, MultiResViewports, GRID_HEIGHT, GRID_WIDTH};
use crate::rect::PixelRect;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// An affine map `y = x * scale + bias`.
///
/// Every remap segment has positive measure, so `scale` is never zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ScaleBias {
    pub scale: f32,
    pub bias: f32,
}

impl ScaleBias {
    #[inline]
    pub const fn new(scale: f32, bias: f32) -> Self {
        Self { scale, bias }
    }

    /// Apply the affine map.
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        x * self.scale + self.bias
    }

    /// The algebraic inverse map.
    #[inline]
    pub fn inverse(&self) -> ScaleBias {
        debug_assert!(self.scale != 0.0);
        let inv_scale = 1.0 / self.scale;
        ScaleBias {
            scale: inv_scale,
            bias: -self.bias * inv_scale,
        }
    }
}

/// Constant-buffer payload for UV remapping.
///
/// Flat struct of floats, 160 bytes (a multiple of 16 for constant-buffer
/// placement), no pointers. Unused third segments on two-cell axes duplicate
/// the second segment so the branch structure is uniform across schemes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UvRemap {
    pub linear_to_foveated_splits_x: [f32; 2],
    pub linear_to_foveated_splits_y: [f32; 2],
    pub linear_to_foveated_x: [ScaleBias; 3],
    pub linear_to_foveated_y: [ScaleBias; 3],

    pub foveated_to_linear_splits_x: [f32; 2],
    pub foveated_to_linear_splits_y: [f32; 2],
    pub foveated_to_linear_x: [ScaleBias; 3],
    pub foveated_to_linear_y: [ScaleBias; 3],

    pub bounding_rect_origin: [f32; 2],
    pub bounding_rect_size: [f32; 2],
    pub bounding_rect_size_inv: [f32; 2],

    /// Explicit tail padding to a 16-byte boundary.
    _pad: [f32; 2],
}

/// Split positions in NDC space (Y-up, [-1, 1]), for geometry-shader
/// per-viewport primitive culling. 16-byte-aligned when placed in a constant
/// buffer; unused lanes are zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NdcSplits {
    pub x: [f32; 4],
    pub y: [f32; 4],
}

/// Convert UV-space splits (Y-down, [0, 1]) to NDC space (Y-up, [-1, 1]).
pub fn ndc_splits(splits_x: &[f32], splits_y: &[f32]) -> NdcSplits {
    debug_assert!(splits_x.len() <= 4 && splits_y.len() <= 4);
    let mut out = NdcSplits {
        x: [0.0; 4],
        y: [0.0; 4],
    };
    for (lane, s) in out.x.iter_mut().zip(splits_x) {
        *lane = s * 2.0 - 1.0;
    }
    for (lane, s) in out.y.iter_mut().zip(splits_y) {
        *lane = s * -2.0 + 1.0;
    }
    out
}

/// Forward table for one axis: walk the cells left to right accumulating the
/// destination fraction each cell occupies of the bounding extent.
///
/// `splits` has one entry fewer than `dest_fractions` (2 or 3 cells). Unused
/// segment slots repeat the last segment and unused thresholds pad with 1.0,
/// so segment selection never reads uninitialized coefficients.
fn axis_forward(splits: &[f32], dest_fractions: &[f32]) -> ([f32; 2], [ScaleBias; 3]) {
    let cells = dest_fractions.len();
    debug_assert_eq!(splits.len() + 1, cells);
    debug_assert!(cells == 2 || cells == 3);

    let mut segments = [ScaleBias::new(1.0, 0.0); 3];
    let mut dest_min = 0.0;
    for i in 0..cells {
        let lo = if i == 0 { 0.0 } else { splits[i - 1] };
        let hi = if i == cells - 1 { 1.0 } else { splits[i] };
        let scale = dest_fractions[i] / (hi - lo);
        segments[i] = ScaleBias::new(scale, -lo * scale + dest_min);
        dest_min += dest_fractions[i];
    }
    for i in cells..3 {
        segments[i] = segments[cells - 1];
    }

    let mut out_splits = [1.0f32; 2];
    for (out, s) in out_splits.iter_mut().zip(splits) {
        *out = *s;
    }
    (out_splits, segments)
}

/// Inverse table for one axis: per-segment algebraic inverses, with the
/// thresholds pushed through the forward transform into partitioned space.
fn axis_inverse(
    splits: &[f32],
    forward: &[ScaleBias; 3],
) -> ([f32; 2], [ScaleBias; 3]) {
    let mut out_splits = [1.0f32; 2];
    for (i, s) in splits.iter().enumerate() {
        out_splits[i] = forward[i].apply(*s);
    }
    let inverse = [forward[0].inverse(), forward[1].inverse(), forward[2].inverse()];
    (out_splits, inverse)
}

/// Select a segment by at most two ordered threshold comparisons.
#[inline]
fn apply_axis(splits: &[f32; 2], segments: &[ScaleBias; 3], x: f32) -> f32 {
    if x < splits[0] {
        segments[0].apply(x)
    } else if x < splits[1] {
        segments[1].apply(x)
    } else {
        segments[2].apply(x)
    }
}

fn build(
    splits_x: &[f32],
    splits_y: &[f32],
    dest_x: &[f32],
    dest_y: &[f32],
    bounding_rect: &PixelRect,
) -> UvRemap {
    let (lin_splits_x, lin_x) = axis_forward(splits_x, dest_x);
    let (lin_splits_y, lin_y) = axis_forward(splits_y, dest_y);
    let (fov_splits_x, fov_x) = axis_inverse(splits_x, &lin_x);
    let (fov_splits_y, fov_y) = axis_inverse(splits_y, &lin_y);

    let size = [
        bounding_rect.width() as f32,
        bounding_rect.height() as f32,
    ];

    UvRemap {
        linear_to_foveated_splits_x: lin_splits_x,
        linear_to_foveated_splits_y: lin_splits_y,
        linear_to_foveated_x: lin_x,
        linear_to_foveated_y: lin_y,
        foveated_to_linear_splits_x: fov_splits_x,
        foveated_to_linear_splits_y: fov_splits_y,
        foveated_to_linear_x: fov_x,
        foveated_to_linear_y: fov_y,
        bounding_rect_origin: [bounding_rect.min.x as f32, bounding_rect.min.y as f32],
        bounding_rect_size: size,
        bounding_rect_size_inv: [1.0 / size[0], 1.0 / size[1]],
        _pad: [0.0; 2],
    }
}

impl UvRemap {
    /// Build the remap table for a computed multi-res grid.
    pub fn for_multires(conf: &MultiResConfig, viewports: &MultiResViewports) -> Self {
        let bounding = &viewports.bounding_rect;
        let inv_w = 1.0 / bounding.width() as f32;
        let inv_h = 1.0 / bounding.height() as f32;

        // Destination fraction of each column / row within the bounding rect.
        let mut dest_x = [0.0f32; GRID_WIDTH];
        for (col, dest) in dest_x.iter_mut().enumerate() {
            *dest = viewports.scissors[col].width() as f32 * inv_w;
        }
        let mut dest_y = [0.0f32; GRID_HEIGHT];
        for (row, dest) in dest_y.iter_mut().enumerate() {
            *dest = viewports.scissors[row * GRID_WIDTH].height() as f32 * inv_h;
        }

        build(&conf.splits_x, &conf.splits_y, &dest_x, &dest_y, bounding)
    }

    /// Build the remap table for a computed lens-matched grid.
    ///
    /// Two cells per axis: the quadrant boundary is the single split.
    pub fn for_lens_matched(conf: &LensMatchedConfig, viewports: &LensMatchedViewports) -> Self {
        let bounding = &viewports.bounding_rect;
        let inv_w = 1.0 / bounding.width() as f32;
        let inv_h = 1.0 / bounding.height() as f32;

        let splits_x = [conf.size_left / (conf.size_left + conf.size_right)];
        let splits_y = [conf.size_up / (conf.size_up + conf.size_down)];

        // Upper-left and upper-right quadrants give the column widths; the
        // upper/lower left quadrants give the row heights.
        let dest_x = [
            viewports.scissors[0].width() as f32 * inv_w,
            viewports.scissors[1].width() as f32 * inv_w,
        ];
        let dest_y = [
            viewports.scissors[0].height() as f32 * inv_h,
            viewports.scissors[2].height() as f32 * inv_h,
        ];

        build(&splits_x, &splits_y, &dest_x, &dest_y, bounding)
    }

    /// Map a UV from linear space to the partitioned render target's space.
    #[inline]
    pub fn to_foveated(&self, uv: Vec2) -> Vec2 {
        Vec2::new(
            apply_axis(
                &self.linear_to_foveated_splits_x,
                &self.linear_to_foveated_x,
                uv.x,
            ),
            apply_axis(
                &self.linear_to_foveated_splits_y,
                &self.linear_to_foveated_y,
                uv.y,
            ),
        )
    }

    /// Map a UV from the partitioned render target's space back to linear.
    #[inline]
    pub fn to_linear(&self, uv: Vec2) -> Vec2 {
        Vec2::new(
            apply_axis(
                &self.foveated_to_linear_splits_x,
                &self.foveated_to_linear_x,
                uv.x,
            ),
            apply_axis(
                &self.foveated_to_linear_splits_y,
                &self.foveated_to_linear_y,
                uv.y,
            ),
        )
    }
}

impl MultiResConfig {
    /// NDC split payload for geometry-shader viewport culling.
    pub fn ndc_splits(&self) -> NdcSplits {
        ndc_splits(&self.splits_x, &self.splits_y)
    }
}

impl crate::multires::MultiResStereoConfig {
    /// NDC split payload for geometry-shader viewport culling.
    pub fn ndc_splits(&self) -> NdcSplits {
        ndc_splits(&self.splits_x, &self.splits_y)
    }
}

impl LensMatchedConfig {
    /// NDC split payload; the quadrant boundary is always the 0.5 split in
    /// UV space.
    pub fn ndc_splits(&self) -> NdcSplits {
        ndc_splits(&[0.5], &[0.5])
    }
}
