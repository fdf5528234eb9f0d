//! Borrowed raster view and stain classification.
//!
//! The estimator never owns or decodes pixel data. Callers decode an image
//! however they like and hand the core a [`Raster`]: a borrowed row-major
//! byte buffer plus its dimensions and channel layout. The buffer invariant
//! (`len == width * height * channels`) is enforced once at construction so
//! per-pixel access stays cheap.
//!
//! Classification is an exact binary-mask rule: a pixel is part of the
//! stain iff all three color channels equal 255. Anti-aliased or near-white
//! pixels count as background. This is deliberately not a luminance
//! threshold; the input is assumed to be a strict black/white mask.

use crate::error::{Error, Result};

/// Maximum value of an 8-bit color channel.
pub const MAX_CHANNEL: u8 = 255;

/// Per-pixel channel layout of a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Three channels per pixel: red, green, blue.
    Rgb,
    /// Four channels per pixel: red, green, blue, alpha. Alpha is ignored
    /// by classification.
    Rgba,
}

impl ChannelLayout {
    /// Returns the number of channels per pixel.
    #[inline]
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// A read-only view over a decoded raster image.
///
/// Holds a borrow of the caller's pixel buffer; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    layout: ChannelLayout,
}

impl<'a> Raster<'a> {
    /// Creates a raster view over `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero,
    /// or [`Error::BufferSizeMismatch`] if `data.len()` differs from
    /// `width * height * channels`.
    pub fn new(data: &'a [u8], width: u32, height: u32, layout: ChannelLayout) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the channel layout.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Returns the bounding-rectangle area `width * height` in pixels.
    #[inline]
    #[must_use]
    pub fn total_area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// Reads the RGB channels of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetOutOfRange`] if the flat offset
    /// `(y * width + x) * channels` falls outside the buffer. With
    /// coordinates inside the declared dimensions this cannot happen; the
    /// check guards against callers passing coordinates from a different
    /// image.
    pub fn rgb(&self, x: u32, y: u32) -> Result<(u8, u8, u8)> {
        let offset = (y as usize * self.width as usize + x as usize) * self.layout.channels();
        if offset + 3 > self.data.len() {
            return Err(Error::OffsetOutOfRange {
                offset,
                len: self.data.len(),
            });
        }
        Ok((self.data[offset], self.data[offset + 1], self.data[offset + 2]))
    }

    /// Classifies the pixel at `(x, y)` as stain or background.
    ///
    /// A pixel is inside the stain iff `r == g == b == 255` exactly.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::OffsetOutOfRange`] from [`Raster::rgb`].
    pub fn is_stain(&self, x: u32, y: u32) -> Result<bool> {
        let (r, g, b) = self.rgb(x, y)?;
        Ok(r == MAX_CHANNEL && g == MAX_CHANNEL && b == MAX_CHANNEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 RGB image: white, black / black, white
    const DIAGONAL: [u8; 12] = [255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 255, 255];

    #[test]
    fn test_raster_construction() {
        let raster = Raster::new(&DIAGONAL, 2, 2, ChannelLayout::Rgb).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert!((raster.total_area() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Raster::new(&DIAGONAL, 0, 2, ChannelLayout::Rgb).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimensions {
                width: 0,
                height: 2
            }
        );
        let err = Raster::new(&DIAGONAL, 2, 0, ChannelLayout::Rgb).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimensions {
                width: 2,
                height: 0
            }
        );
    }

    #[test]
    fn test_buffer_mismatch_rejected() {
        let err = Raster::new(&DIAGONAL, 3, 2, ChannelLayout::Rgb).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSizeMismatch {
                expected: 18,
                actual: 12
            }
        );
    }

    #[test]
    fn test_classification_is_exact_white() {
        let raster = Raster::new(&DIAGONAL, 2, 2, ChannelLayout::Rgb).unwrap();
        assert!(raster.is_stain(0, 0).unwrap());
        assert!(!raster.is_stain(1, 0).unwrap());
        assert!(!raster.is_stain(0, 1).unwrap());
        assert!(raster.is_stain(1, 1).unwrap());
    }

    #[test]
    fn test_near_white_is_background() {
        let data = [254, 255, 255];
        let raster = Raster::new(&data, 1, 1, ChannelLayout::Rgb).unwrap();
        assert!(!raster.is_stain(0, 0).unwrap());
    }

    #[test]
    fn test_alpha_is_ignored() {
        let data = [255, 255, 255, 0];
        let raster = Raster::new(&data, 1, 1, ChannelLayout::Rgba).unwrap();
        assert!(raster.is_stain(0, 0).unwrap());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let raster = Raster::new(&DIAGONAL, 2, 2, ChannelLayout::Rgb).unwrap();
        let first = raster.is_stain(1, 1).unwrap();
        let second = raster.is_stain(1, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_offset() {
        let raster = Raster::new(&DIAGONAL, 2, 2, ChannelLayout::Rgb).unwrap();
        let err = raster.is_stain(0, 2).unwrap_err();
        assert_eq!(err, Error::OffsetOutOfRange { offset: 12, len: 12 });
    }
}
