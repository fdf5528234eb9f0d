//! Monte Carlo area estimation pipeline.
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
//!
//! `estimated_area = width * height * inside / n`, with the ratio computed
//! in floating point. Integer division would truncate small ratios to zero
//! and is deliberately avoided.

use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::sample::{generate_sample_points, SamplePoint};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one estimation run. Immutable once assembled; the estimator
/// retains no reference to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// Number of sample points drawn.
    pub total_points: u32,
    /// Number of samples classified as inside the stain. Never exceeds
    /// `total_points`.
    pub inside_stain: u32,
    /// Estimated stain area in pixels. Always within
    /// `[0, image_width * image_height]`.
    pub estimated_area: f64,
    /// Width of the analyzed image in pixels.
    pub image_width: u32,
    /// Height of the analyzed image in pixels.
    pub image_height: u32,
    /// Opaque identifier of the image (filename, data URI, ...), passed
    /// through unchanged for downstream display.
    pub source: String,
}

impl AnalysisResult {
    /// Fraction of samples that fell inside the stain, in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn stain_fraction(&self) -> f64 {
        f64::from(self.inside_stain) / f64::from(self.total_points)
    }
}

/// Classifies an explicit set of sample points and assembles the result.
///
/// This is the counting-and-assembly tail of the pipeline, split out so
/// exact-count scenarios can bypass the RNG entirely.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] if `points` is empty; propagates
/// [`Error::OffsetOutOfRange`] from classification.
pub fn estimate_from_points(
    raster: &Raster<'_>,
    points: &[SamplePoint],
    source: impl Into<String>,
) -> Result<AnalysisResult> {
    if points.is_empty() {
        return Err(Error::InvalidSampleCount);
    }
    let mut inside_stain = 0u32;
    for p in points {
        if raster.is_stain(p.x, p.y)? {
            inside_stain += 1;
        }
    }
    let total_points = points.len() as u32;
    let estimated_area = raster.total_area() * (f64::from(inside_stain) / points.len() as f64);
    Ok(AnalysisResult {
        total_points,
        inside_stain,
        estimated_area,
        image_width: raster.width(),
        image_height: raster.height(),
        source: source.into(),
    })
}

/// Runs the full estimation pipeline with a caller-supplied RNG.
///
/// Generates `n` uniform points over the raster's bounding rectangle,
/// classifies each, and returns the assembled [`AnalysisResult`]. The
/// raster is only read; each invocation owns its own counters, so
/// concurrent calls over distinct (or shared) rasters are safe.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleCount`] if `n` is zero and propagates any
/// classification error.
pub fn estimate_area_with_rng<R: Rng + ?Sized>(
    raster: &Raster<'_>,
    n: u32,
    source: impl Into<String>,
    rng: &mut R,
) -> Result<AnalysisResult> {
    let points = generate_sample_points(rng, n, raster.width(), raster.height())?;
    estimate_from_points(raster, &points, source)
}

/// Runs the full estimation pipeline with the thread RNG.
///
/// The RNG is unseeded, so repeated estimates over the same input may
/// legitimately differ. That spread is a property of Monte Carlo
/// estimation, not a defect; use [`estimate_area_with_rng`] with a seeded
/// RNG when reproducibility matters.
///
/// # Errors
///
/// Same conditions as [`estimate_area_with_rng`].
pub fn estimate_area(
    raster: &Raster<'_>,
    n: u32,
    source: impl Into<String>,
) -> Result<AnalysisResult> {
    estimate_area_with_rng(raster, n, source, &mut rand::rng())
}
