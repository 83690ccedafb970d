//! WASM-compatible wrapper types for image data.

use kbfit_core::SourceImage;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data stays in WASM memory and the search reads it in place.
/// `pixels()` copies it out as a `Uint8Array`, so only call it when the
/// pixels are actually needed on the JavaScript side.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            inner: SourceImage::new(width, height, pixels),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsSourceImage {
    pub(crate) fn from_source(inner: SourceImage) -> Self {
        Self { inner }
    }

    pub(crate) fn source(&self) -> &SourceImage {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_source_image_creation() {
        let img = JsSourceImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_from_source() {
        let source = SourceImage::new(2, 1, vec![255, 128, 64, 32, 16, 8]);
        let js_img = JsSourceImage::from_source(source.clone());

        assert_eq!(js_img.pixels(), source.pixels);
        assert_eq!(js_img.source(), &source);
    }
}
