//! Deterministic pixel filters for in-memory 8-bit RGB images
//!
//! The filters rewrite a caller-owned [`PixelBuffer`] in place: color matrix
//! presets (grayscale, sepia), black and white error-diffusion dithering, and
//! nearest-seed mosaics with an injectable random source.

#![forbid(unsafe_code)]

/// Color matrix engine and its grayscale/sepia presets
pub mod color;
/// Dithering and mosaic effects
pub mod effects;
/// Errors, configuration, image loading/saving and the editing session
pub mod io;
/// Pixel buffer capability and in-memory raster
pub mod raster;

pub use color::{ColorMatrix, Preset, apply_color_matrix, apply_grayscale, apply_sepia};
pub use effects::{Seed, dither, mosaic, mosaic_with_seeds};
pub use io::error::{FilterError, Result};
pub use io::session::ImageSession;
pub use raster::{PixelBuffer, Rgb, RgbBuffer};
