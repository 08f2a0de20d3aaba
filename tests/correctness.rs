//! Geometric correctness tests for vr-multires.
//!
//! These tests verify the invariants that must hold for any valid
//! configuration: exact partitioning, no degenerate cells, pixel-exact
//! centers, and UV round-trip identity.

mod support;

use support::configs::{random_lens_matched_configs, random_multires_configs, sample_rects};
use vr_multires::validation::{max_round_trip_error, validate_grid};
use vr_multires::{PixelRect, UvRemap};

#[test]
fn test_scissors_partition_bounding_rect() {
    for rect in sample_rects() {
        for conf in random_multires_configs(50, 12345, &rect) {
            let vp = conf.viewports(&rect);
            let report = validate_grid(&vp.scissors, &vp.bounding_rect);
            assert!(
                report.is_partition(),
                "rect {:?}, conf {:?}: {}",
                rect,
                conf,
                report.summary()
            );
        }
    }
}

#[test]
fn test_no_degenerate_cells() {
    for rect in sample_rects() {
        for conf in random_multires_configs(50, 54321, &rect) {
            let vp = conf.viewports(&rect);
            for (i, view) in vp.views.iter().enumerate() {
                assert!(view.width > 0.0, "cell {} has degenerate viewport", i);
                assert!(view.height > 0.0, "cell {} has degenerate viewport", i);
            }
            for (i, scissor) in vp.scissors.iter().enumerate() {
                assert!(scissor.width() >= 1, "cell {} has empty scissor", i);
                assert!(scissor.height() >= 1, "cell {} has empty scissor", i);
            }
        }
    }
}

#[test]
fn test_uv_round_trip_multires() {
    let rect = PixelRect::from_coords(0, 0, 1920, 1080);
    for conf in random_multires_configs(100, 99999, &rect) {
        let vp = conf.viewports(&rect);
        let remap = UvRemap::for_multires(&conf, &vp);
        let error = max_round_trip_error(&remap, 33);
        assert!(
            error < 1e-4,
            "round-trip error {} too large for {:?}",
            error,
            conf
        );
    }
}

#[test]
fn test_uv_round_trip_lens_matched() {
    let rect = PixelRect::from_coords(0, 0, 1288, 1432);
    for conf in random_lens_matched_configs(100, 424242) {
        let vp = conf.viewports(&rect);
        let remap = UvRemap::for_lens_matched(&conf, &vp);
        let error = max_round_trip_error(&remap, 33);
        assert!(
            error < 1e-4,
            "round-trip error {} too large for {:?}",
            error,
            conf
        );
    }
}

#[test]
fn test_unit_density_is_identity() {
    // With every density at 1.0 the partitioned target is the source target.
    for rect in sample_rects() {
        for mut conf in random_multires_configs(20, 7777, &rect) {
            conf.density_scale_x = [1.0; 3];
            conf.density_scale_y = [1.0; 3];

            assert!((conf.pixel_count_fraction() - 1.0).abs() < 1e-5);

            let vp = conf.viewports(&rect);
            assert_eq!(
                vp.bounding_rect, rect,
                "unit density must not shrink the target"
            );

            // Every scissor covers exactly its fractional share.
            let w = rect.width() as f32;
            for col in 0..3 {
                let lo = if col == 0 { 0.0 } else { conf.splits_x[col - 1] };
                let hi = if col == 2 { 1.0 } else { conf.splits_x[col] };
                let expected = ((hi - lo) * w).round_ties_even() as i32;
                assert_eq!(vp.scissors[col].width(), expected);
            }
        }
    }
}

#[test]
fn test_double_mirror_is_identity() {
    let rect = PixelRect::from_coords(0, 0, 1920, 1080);
    for conf in random_multires_configs(100, 31337, &rect) {
        let twice = conf.mirrored().mirrored();

        assert_eq!(twice.density_scale_x, conf.density_scale_x);
        assert_eq!(twice.density_scale_y, conf.density_scale_y);
        assert_eq!(twice.splits_y, conf.splits_y);
        assert!((twice.center_x - conf.center_x).abs() < 1e-6);
        for i in 0..2 {
            assert!(
                (twice.splits_x[i] - conf.splits_x[i]).abs() < 1e-6,
                "split {} drifted: {} vs {}",
                i,
                twice.splits_x[i],
                conf.splits_x[i]
            );
        }
    }
}

#[test]
fn test_center_cell_is_pixel_exact() {
    // After rounding splits to pixel boundaries, the center scissor extent
    // must equal the rounded center fraction exactly, with no off-by-one
    // from the neighbouring cells' rounding.
    for rect in sample_rects() {
        for mut conf in random_multires_configs(50, 2024, &rect) {
            // Pixel-exactness is a property of the full-density center.
            conf.density_scale_x[1] = 1.0;
            conf.density_scale_y[1] = 1.0;

            let vp = conf.viewports(&rect);
            let center = vp.scissors[4];

            let w = rect.width() as f32;
            let h = rect.height() as f32;
            let expected_w =
                ((conf.splits_x[1] - conf.splits_x[0]) * w).round_ties_even() as i32;
            let expected_h =
                ((conf.splits_y[1] - conf.splits_y[0]) * h).round_ties_even() as i32;

            assert_eq!(center.width(), expected_w);
            assert_eq!(center.height(), expected_h);
        }
    }
}

#[test]
fn test_lens_matched_quadrants_cover_bounding_rect() {
    let rect = PixelRect::from_coords(0, 0, 1288, 1432);
    for conf in random_lens_matched_configs(50, 606060) {
        let vp = conf.viewports(&rect);
        let report = validate_grid(&vp.scissors, &vp.bounding_rect);
        assert!(
            report.is_partition(),
            "conf {:?}: {}",
            conf,
            report.summary()
        );
    }
}
