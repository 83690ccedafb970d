//! Encoding for kbfit.
//!
//! This module provides:
//! - [`QualityEncoder`], the encode primitive the quality search calls once
//!   per attempt
//! - [`JpegQualityEncoder`], the deployed codec
//! - [`encode_jpeg`], JPEG encoding on the codec's native 1-100 scale
//!
//! All operations are synchronous and single-threaded; in the browser they run
//! inside a Web Worker through the WASM bindings.
//!
//! # Examples
//!
//! ```ignore
//! use kbfit_core::encode::{JpegQualityEncoder, QualityEncoder};
//! use kbfit_core::SourceImage;
//!
//! let image = SourceImage::new(100, 100, vec![128u8; 100 * 100 * 3]);
//! let jpeg = JpegQualityEncoder::new().encode(&image, 0.9).unwrap();
//! println!("Encoded {} bytes", jpeg.len());
//! ```

mod encoder;
mod jpeg;

pub use encoder::{jpeg_quality, EncodeError, JpegQualityEncoder, QualityEncoder};
pub use jpeg::encode_jpeg;
