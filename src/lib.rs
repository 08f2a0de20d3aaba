//! Multi-resolution viewport partitioning for VR rendering.
//!
//! This crate computes how to partition a rectangular render-target viewport
//! into a fixed grid of smaller viewports with non-uniform pixel density
//! (foveated rendering), and how to remap texture coordinates between the
//! original linear space and the partitioned space. Peripheral regions render
//! at lower density than the gaze-aligned center while the center stays
//! pixel-exact with ordinary rendering.
//!
//! Two schemes are provided:
//! - [`multires`] — a 3×3 (mono) / 5×3 (stereo) split grid with per-row and
//!   per-column density scales.
//! - [`lens_matched`] — a 2×2 (mono) / 4×2 (stereo) quad grid with
//!   per-quadrant sizes and warp factors, approximating a lens's barrel
//!   distortion.
//!
//! Everything is a pure function over value types: config → grid → remap
//! table, recomputed from scratch whenever the config or viewport changes.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use vr_multires::{multires_preset, PixelRect, UvRemap};
//!
//! let original = PixelRect::from_coords(0, 0, 1920, 1080);
//!
//! let mut config = multires_preset("aggressive").unwrap();
//! config.calculate_splits(&original);
//! config.round_splits_to_nearest_pixel(&original);
//!
//! let viewports = config.viewports(&original);
//! assert!(viewports.bounding_rect.width() < original.width());
//!
//! // Map a UV into the partitioned render target and back.
//! let remap = UvRemap::for_multires(&config, &viewports);
//! let uv = Vec2::new(0.3, 0.8);
//! let round_trip = remap.to_linear(remap.to_foveated(uv));
//! assert!((round_trip - uv).abs().max_element() < 1e-5);
//! ```

mod grid;
mod rect;

pub mod lens_matched;
pub mod multires;
pub mod presets;
pub mod remap;
pub mod validation;

pub use lens_matched::{
    LensMatchedConfig, LensMatchedStereoConfig, LensMatchedStereoViewports, LensMatchedViewports,
};
pub use multires::{
    MultiResConfig, MultiResStereoConfig, MultiResStereoViewports, MultiResViewports,
};
pub use presets::{
    lens_matched_preset, multires_preset, LENS_MATCHED_CRESCENT_BAY, MULTIRES_AGGRESSIVE,
    MULTIRES_CONSERVATIVE,
};
pub use rect::{PixelRect, Viewport};
pub use remap::{ndc_splits, NdcSplits, ScaleBias, UvRemap};
