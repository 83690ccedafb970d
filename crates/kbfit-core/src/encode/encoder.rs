//! The encode primitive the quality search drives.

use thiserror::Error;

use super::jpeg::encode_jpeg;
use crate::decode::SourceImage;

/// Errors that can occur while encoding an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec itself failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encodes an image at a normalized quality and returns the encoded bytes.
///
/// `quality` is in `[0, 1]`. Implementations are expected (not required) to
/// produce output that does not grow as quality decreases.
pub trait QualityEncoder {
    fn encode(&self, image: &SourceImage, quality: f32) -> Result<Vec<u8>, EncodeError>;
}

impl<F> QualityEncoder for F
where
    F: Fn(&SourceImage, f32) -> Result<Vec<u8>, EncodeError>,
{
    fn encode(&self, image: &SourceImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
        self(image, quality)
    }
}

/// Baseline JPEG at a normalized quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JpegQualityEncoder;

impl JpegQualityEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl QualityEncoder for JpegQualityEncoder {
    fn encode(&self, image: &SourceImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(
            &image.pixels,
            image.width,
            image.height,
            jpeg_quality(quality),
        )
    }
}

/// Map a normalized quality in `[0, 1]` onto the JPEG 1-100 scale.
///
/// NaN maps to the lowest quality.
pub fn jpeg_quality(quality: f32) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}
