//! Uniform random sample point generation.
//!
//! Points are drawn independently and uniformly over the image's bounding
//! rectangle. Generation is generic over [`rand::Rng`]: production callers
//! go through [`crate::estimate::estimate_area`], which uses the OS-seeded
//! thread RNG (so repeated runs legitimately differ), while tests inject a
//! seeded [`rand::rngs::StdRng`] for reproducible statistics.

use crate::error::{Error, Result};
use rand::Rng;

/// A single Monte Carlo sample: integer pixel coordinates inside the
/// image's bounding rectangle. Generated, classified, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplePoint {
    /// X coordinate (column), `0 <= x < width`.
    pub x: u32,
    /// Y coordinate (row), `0 <= y < height`.
    pub y: u32,
}

impl SamplePoint {
    /// Creates a new sample point.
    #[inline]
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Generates exactly `n` sample points uniform over `[0, width) x [0, height)`.
///
/// Duplicate points are permitted and expected at typical sample sizes.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] if `n` is zero, or
/// [`Error::InvalidDimensions`] if either dimension is zero.
pub fn generate_sample_points<R: Rng + ?Sized>(
    rng: &mut R,
    n: u32,
    width: u32,
    height: u32,
) -> Result<Vec<SamplePoint>> {
    if n == 0 {
        return Err(Error::InvalidSampleCount);
    }
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let mut points = Vec::with_capacity(n as usize);
    for _ in 0..n {
        points.push(SamplePoint {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
        });
    }
    Ok(points)
}
