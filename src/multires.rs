//! Split-Grid partitioning ("multi-res").
//!
//! A 3×3 grid (mono) or 5×3 grid (stereo-mirrored) whose cell widths come
//! from density-scaled fractions of the source rectangle. Two split fractions
//! per axis bound the full-density center cell; the outer rows and columns
//! render at reduced density to save pixel-shading cost.

use crate::grid::{
    partition_axis, pixel_fraction_axis, round_splits_to_pixels, round_to_int, AxisSpan,
};
use crate::rect::{PixelRect, Viewport};
use glam::IVec2;

/// Columns in the mono grid.
pub const GRID_WIDTH: usize = 3;
/// Rows in the mono grid.
pub const GRID_HEIGHT: usize = 3;
/// Cells in the mono grid.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Columns in the stereo grid. The middle column is the inter-eye region;
/// the two eye centers flank it.
pub const STEREO_GRID_WIDTH: usize = 5;
/// Cells in the stereo grid.
pub const STEREO_CELL_COUNT: usize = STEREO_GRID_WIDTH * GRID_HEIGHT;

/// A single-eye 3×3 multi-res configuration.
///
/// The center size/location fields are authored; the splits are derived by
/// [`MultiResConfig::calculate_splits`] and may then be snapped to pixel
/// boundaries with [`MultiResConfig::round_splits_to_nearest_pixel`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiResConfig {
    /// Size of the central viewport as a fraction of each axis, 0.01..=1.
    pub center_width: f32,
    pub center_height: f32,

    /// Location of the central viewport, 0..=1, where 0.5 is screen center.
    pub center_x: f32,
    pub center_y: f32,

    /// Interior split positions per axis as fractions in (0, 1), measured
    /// from the top left. Derived, monotonically increasing.
    pub splits_x: [f32; 2],
    pub splits_y: [f32; 2],

    /// Linear pixel density scale per column / row (1.0 = full density).
    pub density_scale_x: [f32; GRID_WIDTH],
    pub density_scale_y: [f32; GRID_HEIGHT],
}

/// A combined two-eye 5×3 multi-res configuration, mirrored on the centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiResStereoConfig {
    /// Per-eye central viewport size fractions (left, right).
    pub center_width: [f32; 2],
    pub center_height: f32,

    /// Per-eye central viewport locations (left, right).
    pub center_x: [f32; 2],
    pub center_y: f32,

    pub splits_x: [f32; STEREO_GRID_WIDTH - 1],
    pub splits_y: [f32; GRID_HEIGHT - 1],

    pub density_scale_x: [f32; STEREO_GRID_WIDTH],
    pub density_scale_y: [f32; GRID_HEIGHT],
}

/// Viewport and scissor rectangles for a mono multi-res configuration,
/// row-major, ready to hand to the graphics API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiResViewports {
    pub views: [Viewport; CELL_COUNT],
    pub scissors: [PixelRect; CELL_COUNT],

    /// Rectangle enclosing all scissors; sizes the backing render target.
    pub bounding_rect: PixelRect,
}

/// Viewport and scissor rectangles for a stereo multi-res configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiResStereoViewports {
    pub views: [Viewport; STEREO_CELL_COUNT],
    pub scissors: [PixelRect; STEREO_CELL_COUNT],

    /// Pixel gap between the two eyes.
    pub viewport_gap: i32,

    /// Rectangle enclosing all scissors; sizes the backing render target.
    pub bounding_rect: PixelRect,
}

/// Derive integer-pixel splits for one axis from a clamped center size and
/// location. The `max(1, ..)` / `min(extent - 1, ..)` guards keep the
/// boundary splits off the rectangle edges so no downstream cell collapses
/// to zero area.
fn axis_splits(extent: i32, center_fraction: f32, location_fraction: f32) -> [i32; 2] {
    let center = round_to_int(center_fraction.clamp(0.01, 1.0) * extent as f32);
    let half = center / 2;
    let location =
        round_to_int(location_fraction.clamp(0.0, 1.0) * extent as f32).clamp(half, extent - half);

    let lo = (location - half).max(1);
    let hi = (lo + center).min(extent - 1);
    [lo, hi]
}

/// Combine per-axis spans into row-major viewport/scissor arrays plus the
/// bounding rect of the accumulated scissors.
fn assemble_grid<const W: usize, const H: usize, const N: usize>(
    original: &PixelRect,
    spans_x: &[AxisSpan; W],
    spans_y: &[AxisSpan; H],
) -> ([Viewport; N], [PixelRect; N], PixelRect) {
    debug_assert_eq!(N, W * H);

    let mut views = [Viewport::new(0.0, 0.0, 0.0, 0.0); N];
    let mut scissors = [PixelRect::from_coords(0, 0, 0, 0); N];

    for (row, sy) in spans_y.iter().enumerate() {
        for (col, sx) in spans_x.iter().enumerate() {
            let i = row * W + col;
            views[i] = Viewport::new(sx.view_min, sy.view_min, sx.view_extent, sy.view_extent);
            scissors[i] = PixelRect::from_coords(
                sx.scissor_min,
                sy.scissor_min,
                sx.scissor_min + sx.scissor_extent,
                sy.scissor_min + sy.scissor_extent,
            );
        }
    }

    let last_x = spans_x[W - 1];
    let last_y = spans_y[H - 1];
    let bounding_rect = PixelRect::new(
        original.min,
        IVec2::new(
            last_x.scissor_min + last_x.scissor_extent,
            last_y.scissor_min + last_y.scissor_extent,
        ),
    );

    (views, scissors, bounding_rect)
}

impl MultiResConfig {
    /// Derive the split positions from the authored center size and location.
    ///
    /// The center size is clamped to at least 1% of each axis and the center
    /// location is clamped so the center region never runs off an edge.
    pub fn calculate_splits(&mut self, original: &PixelRect) {
        let [x0, x1] = axis_splits(original.width(), self.center_width, self.center_x);
        let [y0, y1] = axis_splits(original.height(), self.center_height, self.center_y);

        let inv_w = 1.0 / original.width() as f32;
        let inv_h = 1.0 / original.height() as f32;
        self.splits_x = [x0 as f32 * inv_w, x1 as f32 * inv_w];
        self.splits_y = [y0 as f32 * inv_h, y1 as f32 * inv_h];
    }

    /// Round the split positions to the nearest pixel boundary (ties to even)
    /// so the center viewport is exactly 1:1 with ordinary rendering.
    pub fn round_splits_to_nearest_pixel(&mut self, original: &PixelRect) {
        round_splits_to_pixels(&mut self.splits_x, original.width());
        round_splits_to_pixels(&mut self.splits_y, original.height());
    }

    /// Compute the viewport and scissor rectangles for this configuration.
    pub fn viewports(&self, original: &PixelRect) -> MultiResViewports {
        let spans_x = partition_axis::<GRID_WIDTH>(
            original.min.x,
            original.width(),
            &self.splits_x,
            &self.density_scale_x,
        );
        let spans_y = partition_axis::<GRID_HEIGHT>(
            original.min.y,
            original.height(),
            &self.splits_y,
            &self.density_scale_y,
        );
        let (views, scissors, bounding_rect) =
            assemble_grid::<GRID_WIDTH, GRID_HEIGHT, CELL_COUNT>(original, &spans_x, &spans_y);

        MultiResViewports {
            views,
            scissors,
            bounding_rect,
        }
    }

    /// A configuration mirrored left-to-right; used to derive the other eye's
    /// configuration from one authored config. Mirroring twice returns the
    /// original (within float rounding of the complemented fractions).
    pub fn mirrored(&self) -> Self {
        Self {
            center_width: self.center_width,
            center_height: self.center_height,
            center_x: 1.0 - self.center_x,
            center_y: self.center_y,
            splits_x: [1.0 - self.splits_x[1], 1.0 - self.splits_x[0]],
            splits_y: self.splits_y,
            density_scale_x: [
                self.density_scale_x[2],
                self.density_scale_x[1],
                self.density_scale_x[0],
            ],
            density_scale_y: self.density_scale_y,
        }
    }

    /// Build a combined 5-column stereo configuration from this eye config
    /// and its mirror.
    ///
    /// The X axis is compressed by `w / (gap / d + 2w)` where `d` is the
    /// innermost column's density: the inter-eye gap is budgeted as if it
    /// were rendered at that density, so two eyes plus the gap fill the
    /// original width.
    pub fn to_stereo(&self, original: &PixelRect, viewport_gap: i32) -> MultiResStereoConfig {
        let w = original.width() as f32;
        let x_scale = w / (viewport_gap as f32 / self.density_scale_x[2] + 2.0 * w);

        let [s0, s1] = self.splits_x;
        let [d0, d1, d2] = self.density_scale_x;

        MultiResStereoConfig {
            center_width: [self.center_width * x_scale, self.center_width * x_scale],
            center_height: self.center_height,
            center_x: [self.center_x * x_scale, 1.0 - self.center_x * x_scale],
            center_y: self.center_y,
            splits_x: [
                s0 * x_scale,
                s1 * x_scale,
                1.0 - s1 * x_scale,
                1.0 - s0 * x_scale,
            ],
            splits_y: self.splits_y,
            density_scale_x: [d0, d1, d2, d1, d0],
            density_scale_y: self.density_scale_y,
        }
    }

    /// Fraction of pixels this configuration renders relative to ordinary
    /// non-partitioned rendering. Pure diagnostic; 1.0 for all-1.0 densities.
    pub fn pixel_count_fraction(&self) -> f32 {
        pixel_fraction_axis::<GRID_WIDTH>(&self.splits_x, &self.density_scale_x)
            * pixel_fraction_axis::<GRID_HEIGHT>(&self.splits_y, &self.density_scale_y)
    }
}

impl MultiResStereoConfig {
    /// Derive the four X splits and two Y splits from the per-eye center
    /// sizes and locations, with the same edge guards as the mono path.
    pub fn calculate_splits(&mut self, original: &PixelRect) {
        let w = original.width();
        let h = original.height();

        let [lx0, lx1] = axis_splits(w, self.center_width[0], self.center_x[0]);
        let [rx0, rx1] = axis_splits(w, self.center_width[1], self.center_x[1]);
        let [y0, y1] = axis_splits(h, self.center_height, self.center_y);

        let inv_w = 1.0 / w as f32;
        let inv_h = 1.0 / h as f32;
        self.splits_x = [
            lx0 as f32 * inv_w,
            lx1 as f32 * inv_w,
            rx0 as f32 * inv_w,
            rx1 as f32 * inv_w,
        ];
        self.splits_y = [y0 as f32 * inv_h, y1 as f32 * inv_h];
    }

    /// Round the split positions to the nearest pixel boundary, ties to even.
    pub fn round_splits_to_nearest_pixel(&mut self, original: &PixelRect) {
        round_splits_to_pixels(&mut self.splits_x, original.width());
        round_splits_to_pixels(&mut self.splits_y, original.height());
    }

    /// Compute the 15 viewport and scissor rectangles for this configuration.
    pub fn viewports(&self, original: &PixelRect, viewport_gap: i32) -> MultiResStereoViewports {
        let spans_x = partition_axis::<STEREO_GRID_WIDTH>(
            original.min.x,
            original.width(),
            &self.splits_x,
            &self.density_scale_x,
        );
        let spans_y = partition_axis::<GRID_HEIGHT>(
            original.min.y,
            original.height(),
            &self.splits_y,
            &self.density_scale_y,
        );
        let (views, scissors, bounding_rect) = assemble_grid::<
            STEREO_GRID_WIDTH,
            GRID_HEIGHT,
            STEREO_CELL_COUNT,
        >(original, &spans_x, &spans_y);

        MultiResStereoViewports {
            views,
            scissors,
            viewport_gap,
            bounding_rect,
        }
    }
}

impl MultiResViewports {
    /// Merge two independently computed single-eye grids into one combined
    /// 5×3 set.
    ///
    /// The right grid is shifted so its innermost column begins `viewport_gap`
    /// pixels after the left grid's innermost column begins; the two innermost
    /// columns then merge pairwise per row (`min` origin, `max` extent) into
    /// the shared centerline cells, and the merged cells' viewports are
    /// rescaled to the merged column width. Outer columns concatenate
    /// unchanged. With identical eyes and a zero gap the combined bounding
    /// width is twice the eye bounding width minus one shared column.
    pub fn merge(left: &Self, right: &Self, viewport_gap: i32) -> MultiResStereoViewports {
        let shift = IVec2::new(
            left.scissors[GRID_WIDTH - 1].min.x + viewport_gap - right.scissors[0].min.x,
            0,
        );
        let shift_x = shift.x as f32;

        let mut views = [Viewport::new(0.0, 0.0, 0.0, 0.0); STEREO_CELL_COUNT];
        let mut scissors = [PixelRect::from_coords(0, 0, 0, 0); STEREO_CELL_COUNT];

        for row in 0..GRID_HEIGHT {
            let eye = row * GRID_WIDTH;
            let out = row * STEREO_GRID_WIDTH;

            // Left eye outer columns, unchanged.
            views[out] = left.views[eye];
            views[out + 1] = left.views[eye + 1];
            scissors[out] = left.scissors[eye];
            scissors[out + 1] = left.scissors[eye + 1];

            // Shared centerline cell: union of the left eye's innermost
            // column and the shifted right eye's innermost column.
            let left_inner = left.scissors[eye + 2];
            let right_inner = right.scissors[eye].offset(shift);
            let merged = left_inner.union(&right_inner);
            scissors[out + 2] = merged;

            let left_view = left.views[eye + 2];
            let right_view_x = right.views[eye].top_left_x + shift_x;
            let width_scale = merged.width() as f32 / left_inner.width() as f32;
            views[out + 2] = Viewport::new(
                left_view.top_left_x.min(right_view_x),
                left_view.top_left_y,
                left_view.width * width_scale,
                left_view.height,
            );

            // Right eye outer columns, shifted into place.
            for col in 0..2 {
                let mut view = right.views[eye + 1 + col];
                view.top_left_x += shift_x;
                views[out + 3 + col] = view;
                scissors[out + 3 + col] = right.scissors[eye + 1 + col].offset(shift);
            }
        }

        let bounding_rect = left
            .bounding_rect
            .union(&right.bounding_rect.offset(shift));

        MultiResStereoViewports {
            views,
            scissors,
            viewport_gap,
            bounding_rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> MultiResConfig {
        let mut conf = MultiResConfig {
            center_width: 0.5,
            center_height: 0.5,
            center_x: 0.5,
            center_y: 0.5,
            splits_x: [0.0; 2],
            splits_y: [0.0; 2],
            density_scale_x: [0.7, 1.0, 0.7],
            density_scale_y: [0.7, 1.0, 0.7],
        };
        conf.calculate_splits(&PixelRect::from_coords(0, 0, 1920, 1080));
        conf
    }

    #[test]
    fn test_splits_are_interior_and_increasing() {
        let conf = base_config();
        assert!(conf.splits_x[0] > 0.0 && conf.splits_x[1] < 1.0);
        assert!(conf.splits_x[0] < conf.splits_x[1]);
        assert_eq!(conf.splits_x, [0.25, 0.75]);
        assert_eq!(conf.splits_y, [0.25, 0.75]);
    }

    #[test]
    fn test_splits_clamped_off_edges() {
        // A center pushed fully into a corner must still leave a one-pixel
        // outer cell on each side.
        let rect = PixelRect::from_coords(0, 0, 800, 600);
        let mut conf = base_config();
        conf.center_x = 0.0;
        conf.center_y = 1.0;
        conf.calculate_splits(&rect);
        assert!(conf.splits_x[0] >= 1.0 / 800.0);
        assert!(conf.splits_y[1] <= 599.0 / 600.0);
        assert!(conf.splits_x[0] < conf.splits_x[1]);
        assert!(conf.splits_y[0] < conf.splits_y[1]);
    }

    #[test]
    fn test_center_scissor_is_pixel_exact() {
        let conf = base_config();
        let vp = conf.viewports(&PixelRect::from_coords(0, 0, 1920, 1080));

        // Center cell is index 4 (row 1, col 1).
        let center = vp.scissors[4];
        assert_eq!(center.width(), 960);
        assert_eq!(center.height(), 540);

        // Outer columns shrink to 70% density: 0.25 * 0.7 * 1920 = 336.
        assert_eq!(vp.scissors[0].width(), 336);
        assert_eq!(vp.bounding_rect.width(), 336 + 960 + 336);
        assert_eq!(vp.bounding_rect.height(), 189 + 540 + 189);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let conf = base_config();
        let twice = conf.mirrored().mirrored();
        assert_eq!(twice.density_scale_x, conf.density_scale_x);
        assert!((twice.center_x - conf.center_x).abs() < 1e-6);
        for i in 0..2 {
            assert!((twice.splits_x[i] - conf.splits_x[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_stereo_config_is_mirrored_and_monotone() {
        let conf = base_config();
        let rect = PixelRect::from_coords(0, 0, 1920, 1080);
        let stereo = conf.to_stereo(&rect, 16);

        assert!(stereo
            .splits_x
            .windows(2)
            .all(|w| w[0] < w[1]));
        // Densities are symmetric about the middle column.
        assert_eq!(stereo.density_scale_x[0], stereo.density_scale_x[4]);
        assert_eq!(stereo.density_scale_x[1], stereo.density_scale_x[3]);
        // Splits mirror around 0.5.
        for i in 0..2 {
            let complement = 1.0 - stereo.splits_x[3 - i];
            assert!((stereo.splits_x[i] - complement).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_gap_merge_shares_one_column() {
        let conf = base_config();
        let rect = PixelRect::from_coords(0, 0, 1920, 1080);
        let eye = conf.viewports(&rect);

        let merged = MultiResViewports::merge(&eye, &eye, 0);

        let eye_width = eye.bounding_rect.width();
        let shared = eye.scissors[2].width();
        assert_eq!(merged.bounding_rect.width(), 2 * eye_width - shared);
        assert_eq!(merged.bounding_rect.height(), eye.bounding_rect.height());

        // Centerline cells are merged, not duplicated: exactly 5 columns.
        for row in 0..GRID_HEIGHT {
            let middle = merged.scissors[row * STEREO_GRID_WIDTH + 2];
            assert_eq!(middle.width(), shared);
        }
    }

    #[test]
    fn test_pixel_count_fraction_reports_savings() {
        let conf = base_config();
        let fraction = conf.pixel_count_fraction();
        assert!(fraction < 1.0);
        // 0.25*0.7 + 0.5*1.0 + 0.25*0.7 = 0.85 per axis.
        assert!((fraction - 0.85 * 0.85).abs() < 1e-5);
    }
}
