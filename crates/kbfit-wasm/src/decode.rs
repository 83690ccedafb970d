//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@kbfit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsSourceImage;
use kbfit_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG file.
///
/// EXIF orientation is applied, so the returned image is upright.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsSourceImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
