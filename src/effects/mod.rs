//! Whole-image effects built on the color transforms
//!
//! This module contains:
//! - Black and white error-diffusion dithering
//! - Seed-based mosaic quantization

/// Error-diffusion dithering
pub mod dither;
/// Nearest-seed region quantization
pub mod mosaic;

pub use dither::{DIFFUSION_TAPS, DiffusionTap, dither, threshold};
pub use mosaic::{
    RegionMap, Seed, assign_regions, generate_seeds, mosaic, mosaic_with_seeds, region_means,
};
