//! Pixel buffer capability and the in-memory RGB raster
//!
//! Filters never own an image. They borrow anything implementing
//! [`PixelBuffer`] and rewrite it in place through `get_pixel`/`set_pixel`.
//! [`RgbBuffer`] is the owned implementation used by the session and tests.

use std::ops::Range;

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter, not_loaded};

/// An 8-bit RGB triple; the storage type keeps every channel in [0, 255]
pub type Rgb = [u8; 3];

/// Mutable 2D grid of RGB pixels addressed by `(x, y)`
///
/// Callers keep coordinates inside `[0, width) x [0, height)`. Out-of-range
/// reads return black and out-of-range writes are ignored.
pub trait PixelBuffer {
    /// Number of columns
    fn width(&self) -> u32;

    /// Number of rows
    fn height(&self) -> u32;

    /// Read the pixel at column `x`, row `y`
    fn get_pixel(&self, x: u32, y: u32) -> Rgb;

    /// Overwrite the pixel at column `x`, row `y`
    fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb);

    /// Whether the buffer holds no pixels at all
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether a signed coordinate lies inside the buffer
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }
}

/// Reject buffers that carry no image
///
/// # Errors
///
/// Returns `InvalidState` if the buffer has zero width or height
pub fn ensure_loaded<B: PixelBuffer + ?Sized>(buffer: &B) -> Result<()> {
    if buffer.is_empty() {
        return Err(not_loaded());
    }
    Ok(())
}

/// Owned row-major RGB raster
///
/// Pixels live in an `Array2` indexed `(row, col)`, so `(y, x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    pixels: Array2<Rgb>,
}

impl RgbBuffer {
    /// Create a black buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Create a buffer with every pixel set to `color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_elem((height as usize, width as usize), color),
        })
    }

    /// Create a buffer whose pixel at `(x, y)` is `f(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        validate_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
                f(x as u32, y as u32)
            }),
        })
    }

    /// Paint the rectangle `xs x ys` with a solid color
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the rectangle reaches outside the buffer;
    /// nothing is painted in that case
    pub fn fill_rect(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgb) -> Result<()> {
        if xs.end > self.width() || ys.end > self.height() {
            return Err(invalid_parameter(
                "rect",
                &format!("{xs:?} x {ys:?}"),
                &format!(
                    "must lie within the {}x{} image",
                    self.width(),
                    self.height()
                ),
            ));
        }

        for y in ys {
            for x in xs.clone() {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    /// Width and height as a pair
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Raw pixel grid, indexed `(y, x)`
    pub const fn pixels(&self) -> &Array2<Rgb> {
        &self.pixels
    }
}

impl PixelBuffer for RgbBuffer {
    fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or_default()
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        if let Some(pixel) = self.pixels.get_mut((y as usize, x as usize)) {
            *pixel = rgb;
        }
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"width and height must be positive",
        ));
    }
    Ok(())
}
