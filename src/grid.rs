//! Shared per-axis partition math.
//!
//! Both grid schemes reduce to the same one-dimensional problem: split an
//! integer pixel span into contiguous cells whose rendered widths are
//! density-scaled fractions of the span, and derive for each cell the
//! floating-point viewport that lands the cell's UV range exactly on its
//! scissor pixels.

/// One cell of a single-axis partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisSpan {
    /// Scissor start in pixels.
    pub scissor_min: i32,
    /// Scissor extent in pixels. Always >= 1.
    pub scissor_extent: i32,
    /// Viewport start, in the same pixel space but fractional.
    pub view_min: f32,
    /// Viewport extent. Always > 0.
    pub view_extent: f32,
}

/// Round to nearest integer, ties away from zero.
#[inline]
pub(crate) fn round_to_int(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

/// Partition a pixel span of `extent` pixels starting at `origin` into `N`
/// contiguous cells.
///
/// `splits` holds the `N - 1` interior split positions as fractions in (0, 1),
/// monotonically increasing; `density` holds one pixel-density scale per cell.
/// Scissors accumulate left to right, so cells are contiguous with no gaps or
/// overlaps by construction.
pub(crate) fn partition_axis<const N: usize>(
    origin: i32,
    extent: i32,
    splits: &[f32],
    density: &[f32; N],
) -> [AxisSpan; N] {
    debug_assert_eq!(splits.len(), N - 1);
    debug_assert!(extent > 0);
    debug_assert!(splits.windows(2).all(|w| w[0] <= w[1]));

    let mut spans = [AxisSpan {
        scissor_min: 0,
        scissor_extent: 0,
        view_min: 0.0,
        view_extent: 0.0,
    }; N];

    let mut scissor_min = origin;
    for i in 0..N {
        let lo = if i == 0 { 0.0 } else { splits[i - 1] };
        let hi = if i == N - 1 { 1.0 } else { splits[i] };

        // Rendered pixel footprint of this cell: its fractional screen
        // coverage scaled by the density factor. Every cell keeps at least
        // one pixel.
        let scissor_extent =
            (((hi - lo) * density[i] * extent as f32).round_ties_even() as i32).max(1);

        // The unscaled viewport extent that maps [lo, hi] onto exactly
        // `scissor_extent` pixels after viewport-to-NDC scaling.
        let view_extent = scissor_extent as f32 / (hi - lo);
        let view_min = if i < N - 1 {
            scissor_min as f32 - view_extent * lo
        } else {
            // The last cell derives its viewport origin from the scissor end
            // instead, so round-off error cannot clip the final pixel.
            (scissor_min + scissor_extent) as f32 - view_extent
        };

        spans[i] = AxisSpan {
            scissor_min,
            scissor_extent,
            view_min,
            view_extent,
        };
        scissor_min += scissor_extent;
    }

    spans
}

/// Fraction of pixels rendered along one axis relative to full density.
pub(crate) fn pixel_fraction_axis<const N: usize>(splits: &[f32], density: &[f32; N]) -> f32 {
    let mut fraction = 0.0;
    for i in 0..N {
        let lo = if i == 0 { 0.0 } else { splits[i - 1] };
        let hi = if i == N - 1 { 1.0 } else { splits[i] };
        fraction += (hi - lo) * density[i];
    }
    fraction
}

/// Round each split fraction to the nearest pixel boundary of an axis of
/// `extent` pixels, ties to even.
///
/// Keeps the center cell pixel-identical to ordinary rendering: without this,
/// accumulated sub-pixel drift in the outer cells would shift the center
/// scissor by a pixel.
pub(crate) fn round_splits_to_pixels(splits: &mut [f32], extent: i32) {
    for s in splits.iter_mut() {
        *s = (*s * extent as f32).round_ties_even() / extent as f32;
    }
}
