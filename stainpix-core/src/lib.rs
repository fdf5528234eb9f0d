//! stainpix-core: Monte Carlo stain area estimation for binary raster images.
//!
//! Points are drawn uniformly over the image's bounding rectangle,
//! classified as stain/background by an exact-white pixel rule, and the
//! stain area is estimated as `width * height * inside / n`.
//!
//! The crate never decodes images: callers hand it an already-decoded
//! buffer through [`Raster`] and get back an immutable [`AnalysisResult`].
#![warn(missing_docs)]

pub mod error;
pub mod estimate;
pub mod raster;
pub mod sample;

pub use error::{Error, Result};
pub use estimate::{estimate_area, estimate_area_with_rng, estimate_from_points, AnalysisResult};
pub use raster::{ChannelLayout, Raster, MAX_CHANNEL};
pub use sample::{generate_sample_points, SamplePoint};
