//! Image decoding for kbfit.
//!
//! Turns an uploaded file (JPEG or PNG) into the RGB [`SourceImage`] that the
//! quality search encodes. EXIF orientation is applied during decoding.
//!
//! # Examples
//!
//! ```ignore
//! use kbfit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation, SourceImage};
