//! Two-level error-diffusion dithering on the luma channel
//!
//! The image is reduced to grayscale, then scanned row by row, left to right.
//! Each pixel is snapped to black or white and the quantization error is
//! pushed into four neighbors through [`DIFFUSION_TAPS`].
//!
//! The taps do not follow the usual Floyd-Steinberg layout: the 3/16 share
//! goes to `(x + 1, y - 1)`, a pixel in the row that was already scanned.
//! That pixel is rewritten with a gray value and is never thresholded again.
//! Reproducing reference output depends on keeping this tap as it is.

use crate::color::matrix::clamp_channel;
use crate::color::presets::apply_grayscale;
use crate::io::configuration::{
    DIFFUSION_ABOVE_RIGHT, DIFFUSION_BELOW, DIFFUSION_BELOW_RIGHT, DIFFUSION_DENOMINATOR,
    DIFFUSION_RIGHT, MAX_CHANNEL,
};
use crate::io::error::Result;
use crate::raster::PixelBuffer;

/// One error diffusion target relative to the current pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionTap {
    /// Column offset
    pub dx: i64,
    /// Row offset
    pub dy: i64,
    /// Fraction of the error delivered to the target
    pub weight: f64,
}

/// Diffusion targets in the order they are applied
pub const DIFFUSION_TAPS: [DiffusionTap; 4] = [
    DiffusionTap {
        dx: 0,
        dy: 1,
        weight: DIFFUSION_BELOW / DIFFUSION_DENOMINATOR,
    },
    DiffusionTap {
        dx: 1,
        dy: -1,
        weight: DIFFUSION_ABOVE_RIGHT / DIFFUSION_DENOMINATOR,
    },
    DiffusionTap {
        dx: 1,
        dy: 0,
        weight: DIFFUSION_RIGHT / DIFFUSION_DENOMINATOR,
    },
    DiffusionTap {
        dx: 1,
        dy: 1,
        weight: DIFFUSION_BELOW_RIGHT / DIFFUSION_DENOMINATOR,
    },
];

/// Snap a gray level to black or white
///
/// Values strictly closer to white than to black (above 127.5) become 255.
pub const fn threshold(level: u8) -> u8 {
    if level > MAX_CHANNEL - level {
        MAX_CHANNEL
    } else {
        0
    }
}

/// Convert `buffer` to black and white in place
///
/// Pixels rewritten by the up-right tap after their own threshold step keep
/// that gray level. Diffused values are rounded to the nearest level.
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty (raised by the grayscale
/// pre-pass before any pixel is written)
pub fn dither<B: PixelBuffer + ?Sized>(buffer: &mut B) -> Result<()> {
    apply_grayscale(buffer)?;

    let (width, height) = (buffer.width(), buffer.height());
    for y in 0..height {
        for x in 0..width {
            // Red carries the gray level, including error received so far
            let [level, _, _] = buffer.get_pixel(x, y);
            let quantized = threshold(level);
            buffer.set_pixel(x, y, [quantized; 3]);

            let error = i32::from(level) - i32::from(quantized);
            if error == 0 {
                continue;
            }
            for tap in &DIFFUSION_TAPS {
                diffuse(
                    buffer,
                    i64::from(x) + tap.dx,
                    i64::from(y) + tap.dy,
                    tap.weight,
                    error,
                );
            }
        }
    }

    tracing::debug!(width, height, "Dithered image to black and white");
    Ok(())
}

fn diffuse<B: PixelBuffer + ?Sized>(buffer: &mut B, x: i64, y: i64, weight: f64, error: i32) {
    if !buffer.contains(x, y) {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let [current, _, _] = buffer.get_pixel(x, y);
    let level = clamp_channel(weight.mul_add(f64::from(error), f64::from(current)));
    buffer.set_pixel(x, y, [level; 3]);
}
