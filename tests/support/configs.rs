#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vr_multires::{LensMatchedConfig, MultiResConfig, PixelRect};

/// Generate random valid multi-res configurations with splits derived and
/// rounded against `rect`.
pub fn random_multires_configs(n: usize, seed: u64, rect: &PixelRect) -> Vec<MultiResConfig> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut conf = MultiResConfig {
                center_width: rng.gen_range(0.2..0.8),
                center_height: rng.gen_range(0.2..0.8),
                center_x: rng.gen_range(0.25..0.75),
                center_y: rng.gen_range(0.25..0.75),
                splits_x: [0.0; 2],
                splits_y: [0.0; 2],
                density_scale_x: [
                    rng.gen_range(0.4..1.0),
                    rng.gen_range(0.9..1.1),
                    rng.gen_range(0.4..1.0),
                ],
                density_scale_y: [
                    rng.gen_range(0.4..1.0),
                    rng.gen_range(0.9..1.1),
                    rng.gen_range(0.4..1.0),
                ],
            };
            conf.calculate_splits(rect);
            conf.round_splits_to_nearest_pixel(rect);
            conf
        })
        .collect()
}

/// Generate random valid lens-matched configurations. Size fractions sum to
/// 1.0 per axis so the quadrants cover the full eye viewport.
pub fn random_lens_matched_configs(n: usize, seed: u64) -> Vec<LensMatchedConfig> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let size_left = rng.gen_range(0.35..0.65);
            let size_up = rng.gen_range(0.35..0.65);
            LensMatchedConfig {
                warp_left: rng.gen_range(0.1..0.6),
                warp_right: rng.gen_range(0.1..0.6),
                warp_up: rng.gen_range(0.1..0.6),
                warp_down: rng.gen_range(0.1..0.6),
                size_left,
                size_right: 1.0 - size_left,
                size_up,
                size_down: 1.0 - size_up,
            }
        })
        .collect()
}

/// A spread of realistic render-target rectangles, including offset origins
/// and odd extents.
pub fn sample_rects() -> Vec<PixelRect> {
    vec![
        PixelRect::from_coords(0, 0, 1920, 1080),
        PixelRect::from_coords(0, 0, 1512, 1680),
        PixelRect::from_coords(64, 32, 1344, 1472),
        PixelRect::from_coords(0, 0, 1111, 999),
        PixelRect::from_coords(0, 0, 320, 240),
    ]
}
