//! 3x3 linear color transforms applied per pixel
//!
//! Each output channel is the dot product of one matrix row with the input
//! `[R, G, B]`, computed in `f64`. The result is clamped to [0, 255] and
//! rounded to the nearest integer (halves away from zero) before storage.

use num_traits::clamp;

use crate::io::configuration::MAX_CHANNEL;
use crate::io::error::Result;
use crate::raster::{PixelBuffer, Rgb, ensure_loaded};

/// Immutable 3x3 matrix mapping an RGB vector to a new RGB vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Build a matrix from its rows (output red, green, blue)
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Matrix coefficients, row-major
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Apply the matrix to a single pixel
    pub fn transform(&self, rgb: Rgb) -> Rgb {
        let input = rgb.map(f64::from);
        self.rows.map(|row| {
            let value = row
                .iter()
                .zip(input.iter())
                .fold(0.0, |acc, (coefficient, channel)| {
                    coefficient.mul_add(*channel, acc)
                });
            clamp_channel(value)
        })
    }
}

/// Clamp a real channel value to [0, 255] and round it to the nearest integer
pub fn clamp_channel(value: f64) -> u8 {
    clamp(value, 0.0, f64::from(MAX_CHANNEL)).round() as u8
}

/// Rewrite every pixel of `buffer` with `matrix` applied to it
///
/// Pixels are independent; the scan is row-major.
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty; no pixel is written
pub fn apply_color_matrix<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    matrix: &ColorMatrix,
) -> Result<()> {
    ensure_loaded(buffer)?;

    let (width, height) = (buffer.width(), buffer.height());
    for y in 0..height {
        for x in 0..width {
            let rgb = buffer.get_pixel(x, y);
            buffer.set_pixel(x, y, matrix.transform(rgb));
        }
    }

    tracing::trace!(width, height, "Applied color matrix");
    Ok(())
}
