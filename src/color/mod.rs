//! Per-pixel linear color transforms
//!
//! This module contains:
//! - The generic 3x3 color matrix engine
//! - The grayscale and sepia presets built on it

/// Color matrix type and per-pixel application
pub mod matrix;
/// Grayscale and sepia presets
pub mod presets;

pub use matrix::{ColorMatrix, apply_color_matrix, clamp_channel};
pub use presets::{GRAYSCALE, Preset, SEPIA, apply_grayscale, apply_sepia};
