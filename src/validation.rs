//! Geometric validation for computed viewport grids.
//!
//! Provides functions to verify that a grid's scissors exactly tile its
//! bounding rectangle and that a remap table round-trips. Useful for
//! debugging, testing, and catching configuration bugs upstream.

use crate::rect::PixelRect;
use crate::remap::UvRemap;
use glam::Vec2;

/// Detailed validation report for a set of scissor rectangles.
#[derive(Debug, Clone)]
pub struct GridReport {
    /// Number of cells checked.
    pub num_cells: usize,
    /// Sum of cell areas in pixels.
    pub covered_area: i64,
    /// Area of the bounding rectangle.
    pub bounding_area: i64,
    /// Total pairwise overlap area (0 for a proper partition).
    pub overlap_area: i64,
    /// Cells with zero or negative extent.
    pub degenerate_cells: usize,
    /// Cells not contained in the bounding rectangle.
    pub out_of_bounds_cells: usize,
}

impl GridReport {
    /// True if the scissors partition the bounding rect exactly: full
    /// coverage, no overlap, no degenerate or stray cells.
    pub fn is_partition(&self) -> bool {
        self.covered_area == self.bounding_area
            && self.overlap_area == 0
            && self.degenerate_cells == 0
            && self.out_of_bounds_cells == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_partition() {
            return "exact partition".to_string();
        }

        let mut issues = Vec::new();
        if self.covered_area != self.bounding_area {
            issues.push(format!(
                "covered {} of {} px",
                self.covered_area, self.bounding_area
            ));
        }
        if self.overlap_area != 0 {
            issues.push(format!("{} px of overlap", self.overlap_area));
        }
        if self.degenerate_cells != 0 {
            issues.push(format!("{} degenerate cells", self.degenerate_cells));
        }
        if self.out_of_bounds_cells != 0 {
            issues.push(format!(
                "{} cells outside bounding rect",
                self.out_of_bounds_cells
            ));
        }
        issues.join(", ")
    }
}

/// Check a grid's scissors against its bounding rectangle.
///
/// For both schemes the scissors must tile the bounding rect exactly;
/// [`GridReport::is_partition`] reports this.
pub fn validate_grid(scissors: &[PixelRect], bounding_rect: &PixelRect) -> GridReport {
    let mut covered_area = 0;
    let mut degenerate_cells = 0;
    let mut out_of_bounds_cells = 0;

    for s in scissors {
        covered_area += s.area();
        if s.width() <= 0 || s.height() <= 0 {
            degenerate_cells += 1;
        }
        if !bounding_rect.contains_rect(s) {
            out_of_bounds_cells += 1;
        }
    }

    let mut overlap_area = 0;
    for (i, a) in scissors.iter().enumerate() {
        for b in &scissors[i + 1..] {
            if let Some(overlap) = a.intersection(b) {
                overlap_area += overlap.area();
            }
        }
    }

    GridReport {
        num_cells: scissors.len(),
        covered_area,
        bounding_area: bounding_rect.area(),
        overlap_area,
        degenerate_cells,
        out_of_bounds_cells,
    }
}

/// Maximum UV round-trip error of a remap table over a regular sample grid.
///
/// Maps each sample linear → foveated → linear and returns the largest
/// componentwise deviation. Should be within a few float ulps for any table
/// built from a valid configuration.
pub fn max_round_trip_error(remap: &UvRemap, samples_per_axis: usize) -> f32 {
    debug_assert!(samples_per_axis >= 2);
    let step = 1.0 / (samples_per_axis - 1) as f32;

    let mut max_error = 0.0f32;
    for i in 0..samples_per_axis {
        for j in 0..samples_per_axis {
            let uv = Vec2::new(i as f32 * step, j as f32 * step);
            let back = remap.to_linear(remap.to_foveated(uv));
            let error = (back - uv).abs();
            max_error = max_error.max(error.x).max(error.y);
        }
    }
    max_error
}
