//! Raster storage shared by every filter
//!
//! This module contains:
//! - The `PixelBuffer` capability trait filters operate on
//! - The owned `RgbBuffer` implementation and its construction helpers

/// Pixel buffer trait and in-memory raster
pub mod buffer;

pub use buffer::{PixelBuffer, Rgb, RgbBuffer, ensure_loaded};
