//! Authored preset configurations.
//!
//! Tuned constant tables, looked up by snake_case name. Presets carry zeroed
//! split positions; call `calculate_splits` before computing viewports.

use crate::lens_matched::LensMatchedConfig;
use crate::multires::MultiResConfig;

/// Splits 25% in from each edge, outer cells at ~70% density.
/// Reduces pixel count by roughly 28%.
pub const MULTIRES_CONSERVATIVE: MultiResConfig = MultiResConfig {
    center_width: 0.63,
    center_height: 0.62,
    center_x: 0.53,
    center_y: 0.45,
    splits_x: [0.0; 2],
    splits_y: [0.0; 2],
    density_scale_x: [0.71, 1.02, 0.83],
    density_scale_y: [0.77, 1.05, 0.59],
};

/// Splits 30% in from each edge, outer cells at 60% density.
/// Reduces pixel count by roughly 42%.
pub const MULTIRES_AGGRESSIVE: MultiResConfig = MultiResConfig {
    center_width: 0.4,
    center_height: 0.4,
    center_x: 0.5,
    center_y: 0.5,
    splits_x: [0.0; 2],
    splits_y: [0.0; 2],
    density_scale_x: [0.6, 1.0, 0.6],
    density_scale_y: [0.6, 1.0, 0.6],
};

/// Quadrant sizes and warp factors tuned for the Crescent Bay prototype's
/// optics, converted to viewport-extent fractions.
pub const LENS_MATCHED_CRESCENT_BAY: LensMatchedConfig = LensMatchedConfig {
    warp_left: 0.471,
    warp_right: 0.471,
    warp_up: 0.471,
    warp_down: 0.471,
    size_left: 0.4287,
    size_right: 0.5713,
    size_up: 0.5917,
    size_down: 0.4083,
};

/// Look up a multi-res preset by name.
pub fn multires_preset(name: &str) -> Option<MultiResConfig> {
    match name {
        "conservative" => Some(MULTIRES_CONSERVATIVE),
        "aggressive" => Some(MULTIRES_AGGRESSIVE),
        _ => None,
    }
}

/// Look up a lens-matched preset by name.
pub fn lens_matched_preset(name: &str) -> Option<LensMatchedConfig> {
    match name {
        "crescent_bay" => Some(LENS_MATCHED_CRESCENT_BAY),
        _ => None,
    }
}
