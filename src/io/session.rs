//! Image model owned by the editing application
//!
//! The session holds at most one image. Every filter entry point checks that
//! an image is present first and fails with "Must load an image first"
//! otherwise.

use std::path::Path;

use rand::Rng;

use crate::color::presets::{Preset, apply_grayscale, apply_sepia};
use crate::effects::dither::dither;
use crate::effects::mosaic::{Seed, mosaic};
use crate::io::error::{Result, not_loaded};
use crate::io::image::{load_rgb, save_rgb};
use crate::raster::RgbBuffer;

/// Current image of an editing session, if one was loaded
#[derive(Debug, Clone, Default)]
pub struct ImageSession {
    image: Option<RgbBuffer>,
}

impl ImageSession {
    /// Create a session with no image
    pub const fn new() -> Self {
        Self { image: None }
    }

    /// Create a session already holding `image`
    pub const fn with_image(image: RgbBuffer) -> Self {
        Self { image: Some(image) }
    }

    /// Load an image file, replacing the current image
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded; the current
    /// image is kept in that case
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.image = Some(load_rgb(path)?);
        Ok(())
    }

    /// Save the current image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded, or an I/O error from the
    /// image collaborator
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_rgb(self.require_image()?, path)
    }

    /// Replace the current image
    pub fn set_image(&mut self, image: RgbBuffer) {
        self.image = Some(image);
    }

    /// Current image, if any
    pub const fn image(&self) -> Option<&RgbBuffer> {
        self.image.as_ref()
    }

    /// Whether an image is loaded
    pub const fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Remove and return the current image
    pub const fn take_image(&mut self) -> Option<RgbBuffer> {
        self.image.take()
    }

    /// Current image, or the not-loaded error
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn require_image(&self) -> Result<&RgbBuffer> {
        self.image.as_ref().ok_or_else(not_loaded)
    }

    /// Current image for mutation, or the not-loaded error
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn require_image_mut(&mut self) -> Result<&mut RgbBuffer> {
        self.image.as_mut().ok_or_else(not_loaded)
    }

    /// Convert the current image to grayscale
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn grayscale(&mut self) -> Result<()> {
        apply_grayscale(self.require_image_mut()?)
    }

    /// Tone the current image sepia
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn sepia(&mut self) -> Result<()> {
        apply_sepia(self.require_image_mut()?)
    }

    /// Apply a named color preset
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn apply_preset(&mut self, preset: Preset) -> Result<()> {
        preset.apply(self.require_image_mut()?)
    }

    /// Dither the current image to black and white
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn dither(&mut self) -> Result<()> {
        dither(self.require_image_mut()?)
    }

    /// Mosaic the current image into `seed_count` regions
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded, or `InvalidParameter`
    /// for a seed count outside `1..=pixels`
    pub fn mosaic<R: Rng>(&mut self, seed_count: usize, rng: &mut R) -> Result<Vec<Seed>> {
        mosaic(self.require_image_mut()?, seed_count, rng)
    }
}
