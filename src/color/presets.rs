//! Named color matrices: BT.709 grayscale and sepia toning

use std::fmt;
use std::str::FromStr;

use crate::color::matrix::{ColorMatrix, apply_color_matrix};
use crate::io::configuration::{LUMA_WEIGHTS, SEPIA_ROWS};
use crate::io::error::{FilterError, Result, invalid_parameter};
use crate::raster::PixelBuffer;

/// Every output channel receives the luma of the input, so R = G = B
pub const GRAYSCALE: ColorMatrix = ColorMatrix::new([LUMA_WEIGHTS; 3]);

/// Warm brown toning; saturates bright inputs to white
pub const SEPIA: ColorMatrix = ColorMatrix::new(SEPIA_ROWS);

/// Color matrix presets selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// BT.709 luma on all three channels
    Grayscale,
    /// Sepia toning
    Sepia,
}

impl Preset {
    /// All presets in menu order
    pub const ALL: [Self; 2] = [Self::Grayscale, Self::Sepia];

    /// The matrix this preset applies
    pub const fn matrix(self) -> ColorMatrix {
        match self {
            Self::Grayscale => GRAYSCALE,
            Self::Sepia => SEPIA,
        }
    }

    /// Lowercase name used by [`FromStr`] and [`fmt::Display`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
        }
    }

    /// Apply the preset to every pixel of `buffer`
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the buffer is empty
    pub fn apply<B: PixelBuffer + ?Sized>(self, buffer: &mut B) -> Result<()> {
        tracing::debug!(preset = self.name(), "Applying color preset");
        apply_color_matrix(buffer, &self.matrix())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("preset", &s, &"expected 'grayscale' or 'sepia'"))
    }
}

/// Replace every pixel with its BT.709 luma
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty
pub fn apply_grayscale<B: PixelBuffer + ?Sized>(buffer: &mut B) -> Result<()> {
    Preset::Grayscale.apply(buffer)
}

/// Tone every pixel sepia
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty
pub fn apply_sepia<B: PixelBuffer + ?Sized>(buffer: &mut B) -> Result<()> {
    Preset::Sepia.apply(buffer)
}
