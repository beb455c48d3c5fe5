//! Seed-based region quantization ("stained glass")
//!
//! Random seed points partition the image into Voronoi-style regions: every
//! pixel joins its nearest seed by squared Euclidean distance. Each region is
//! then repainted with the mean color of its original pixels.
//!
//! The three phases are separated by full barriers. All pixels are assigned
//! before any mean is computed, and all means are computed before any pixel
//! is rewritten, so no partially averaged color is ever read back.

use ndarray::Array2;
use rand::Rng;

use crate::io::error::{Result, invalid_parameter};
use crate::raster::{PixelBuffer, Rgb, ensure_loaded};

/// A region anchor inside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Seed {
    /// Create a seed at `(x, y)`
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Exact squared Euclidean distance to the pixel `(x, y)`
    pub const fn squared_distance(self, x: u32, y: u32) -> u64 {
        let dx = self.x.abs_diff(x) as u64;
        let dy = self.y.abs_diff(y) as u64;
        (dx * dx).saturating_add(dy * dy)
    }
}

/// Seed index owning each pixel, indexed `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    assignments: Array2<usize>,
    seed_count: usize,
}

impl RegionMap {
    /// Seed index of the pixel at `(x, y)`, or `None` outside the image
    pub fn seed_index(&self, x: u32, y: u32) -> Option<usize> {
        self.assignments.get((y as usize, x as usize)).copied()
    }

    /// Number of seeds the map was built from (including empty regions)
    pub const fn seed_count(&self) -> usize {
        self.seed_count
    }

    /// Pixel count of every region, by seed index
    pub fn region_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.seed_count];
        for &index in &self.assignments {
            if let Some(size) = sizes.get_mut(index) {
                *size += 1;
            }
        }
        sizes
    }

    /// Raw assignment grid
    pub const fn assignments(&self) -> &Array2<usize> {
        &self.assignments
    }
}

/// Running channel totals for one region
#[derive(Debug, Clone, Copy, Default)]
struct RegionSum {
    channels: [u64; 3],
    count: u64,
}

impl RegionSum {
    fn add(&mut self, rgb: Rgb) {
        for (total, channel) in self.channels.iter_mut().zip(rgb) {
            *total += u64::from(channel);
        }
        self.count += 1;
    }

    // Integer division truncates toward zero
    fn mean(&self) -> Option<Rgb> {
        (self.count > 0).then(|| self.channels.map(|total| (total / self.count) as u8))
    }
}

/// Draw `seed_count` seeds uniformly over a `width x height` image
///
/// Each seed draws its column, then its row. Duplicates are kept.
///
/// # Errors
///
/// Returns `InvalidParameter` if either dimension is zero
pub fn generate_seeds<R: Rng>(
    width: u32,
    height: u32,
    seed_count: usize,
    rng: &mut R,
) -> Result<Vec<Seed>> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"seeds need a non-empty image",
        ));
    }

    Ok((0..seed_count)
        .map(|_| {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            Seed::new(x, y)
        })
        .collect())
}

/// Assign every pixel of a `width x height` image to its nearest seed
///
/// Ties go to the lowest seed index: a later seed only wins with a strictly
/// smaller distance.
///
/// # Errors
///
/// Returns `InvalidParameter` if `seeds` is empty
pub fn assign_regions(width: u32, height: u32, seeds: &[Seed]) -> Result<RegionMap> {
    if seeds.is_empty() {
        return Err(invalid_parameter(
            "seeds",
            &0,
            &"at least one seed is required",
        ));
    }

    let assignments = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        nearest_seed(seeds, x as u32, y as u32)
    });

    Ok(RegionMap {
        assignments,
        seed_count: seeds.len(),
    })
}

fn nearest_seed(seeds: &[Seed], x: u32, y: u32) -> usize {
    let mut best_index = 0;
    let mut best_distance = u64::MAX;
    for (index, seed) in seeds.iter().enumerate() {
        let distance = seed.squared_distance(x, y);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}

/// Mean color of every region, by seed index
///
/// Means are exact channel sums divided by member count, truncated toward
/// zero. Regions without pixels yield `None`.
pub fn region_means<B: PixelBuffer + ?Sized>(buffer: &B, regions: &RegionMap) -> Vec<Option<Rgb>> {
    let mut sums = vec![RegionSum::default(); regions.seed_count()];
    for ((y, x), &index) in regions.assignments().indexed_iter() {
        if let Some(sum) = sums.get_mut(index) {
            sum.add(buffer.get_pixel(x as u32, y as u32));
        }
    }
    sums.iter().map(RegionSum::mean).collect()
}

/// Repaint `buffer` as flat regions around the given seeds
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty, or `InvalidParameter` if
/// `seeds` is empty or a seed lies outside the image. The buffer is left
/// untouched on error.
pub fn mosaic_with_seeds<B: PixelBuffer + ?Sized>(buffer: &mut B, seeds: &[Seed]) -> Result<()> {
    ensure_loaded(buffer)?;

    let (width, height) = (buffer.width(), buffer.height());
    if let Some(seed) = seeds.iter().find(|seed| seed.x >= width || seed.y >= height) {
        return Err(invalid_parameter(
            "seeds",
            &format!("({}, {})", seed.x, seed.y),
            &format!("seed lies outside the {width}x{height} image"),
        ));
    }

    let regions = assign_regions(width, height, seeds)?;
    let means = region_means(buffer, &regions);

    for ((y, x), &index) in regions.assignments().indexed_iter() {
        if let Some(Some(mean)) = means.get(index) {
            buffer.set_pixel(x as u32, y as u32, *mean);
        }
    }

    tracing::debug!(
        width,
        height,
        seeds = seeds.len(),
        regions = means.iter().filter(|mean| mean.is_some()).count(),
        "Repainted mosaic regions"
    );
    Ok(())
}

/// Repaint `buffer` as `seed_count` flat regions around random seeds
///
/// Returns the seeds that were drawn, in generation order.
///
/// # Errors
///
/// Returns `InvalidState` if the buffer is empty, or `InvalidParameter` if
/// `seed_count` is zero or exceeds the pixel count. Validation happens before
/// any random draw or pixel write.
pub fn mosaic<B, R>(buffer: &mut B, seed_count: usize, rng: &mut R) -> Result<Vec<Seed>>
where
    B: PixelBuffer + ?Sized,
    R: Rng,
{
    ensure_loaded(buffer)?;

    let (width, height) = (buffer.width(), buffer.height());
    let pixel_count = u64::from(width) * u64::from(height);
    if seed_count == 0 || seed_count as u64 > pixel_count {
        return Err(invalid_parameter(
            "seed_count",
            &seed_count,
            &format!("must be between 1 and the pixel count ({pixel_count})"),
        ));
    }

    let seeds = generate_seeds(width, height, seed_count, rng)?;
    mosaic_with_seeds(buffer, &seeds)?;
    Ok(seeds)
}
