//! Bridge between the filters and the `image` crate
//!
//! Decoding and encoding are left entirely to `image`; this module only
//! moves pixels between its `RgbImage` and [`RgbBuffer`].

use std::path::Path;

use image::RgbImage;

use crate::io::error::{FilterError, Result};
use crate::raster::{PixelBuffer, Rgb, RgbBuffer};

impl PixelBuffer for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        self.get_pixel_checked(x, y)
            .map(|pixel| pixel.0)
            .unwrap_or_default()
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            *pixel = image::Rgb(rgb);
        }
    }
}

impl RgbBuffer {
    /// Copy the pixels of an `RgbImage`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the image has a zero dimension
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_fn(width, height, |x, y| PixelBuffer::get_pixel(image, x, y))
    }

    /// Copy the pixels into a new `RgbImage`
    pub fn to_rgb_image(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        RgbImage::from_fn(width, height, |x, y| image::Rgb(self.get_pixel(x, y)))
    }
}

/// Load an image file as 8-bit RGB
///
/// Alpha is discarded and other depths are converted by `image`.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded image has no pixels
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbBuffer> {
    let path_buf = path.as_ref().to_path_buf();
    tracing::trace!(path = %path_buf.display(), "Loading image");

    let img = image::open(&path_buf).map_err(|e| FilterError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    let buffer = RgbBuffer::from_rgb_image(&img.to_rgb8())?;

    let (width, height) = buffer.dimensions();
    tracing::debug!(path = %path_buf.display(), width, height, "Loaded image");
    Ok(buffer)
}

/// Save a buffer; the file format follows the path extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_rgb<P: AsRef<Path>>(buffer: &RgbBuffer, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FilterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .to_rgb_image()
        .save(path)
        .map_err(|e| FilterError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), "Saved image");
    Ok(())
}
