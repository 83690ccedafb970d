//! Target-size compression WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, compress_to_target } from '@kbfit/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = compress_to_target(image, 50, { step: 0.05 });
//!
//! const blob = new Blob([result.data()], { type: 'image/jpeg' });
//! console.log(`${result.size_kb} KB at quality ${result.final_quality}`);
//! ```

use crate::types::JsSourceImage;
use kbfit_core::report::{download_file_name, format_kb, CompressionSummary};
use kbfit_core::search::{search_jpeg, SearchConfig, SearchError, SearchResult, TargetSpec};
use kbfit_core::SourceImage;
use wasm_bindgen::prelude::*;

/// Result of a target-size compression, accessible from JavaScript.
#[wasm_bindgen]
pub struct JsSearchResult {
    inner: SearchResult,
    target: TargetSpec,
    target_kb: u32,
}

#[wasm_bindgen]
impl JsSearchResult {
    /// Encoded JPEG bytes as Uint8Array (copied).
    pub fn data(&self) -> Vec<u8> {
        self.inner.data().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> f64 {
        self.inner.size_bytes() as f64
    }

    /// Encoded size in KB with two decimals, e.g. "48.73".
    #[wasm_bindgen(getter)]
    pub fn size_kb(&self) -> String {
        format_kb(self.inner.size_bytes())
    }

    #[wasm_bindgen(getter)]
    pub fn final_quality(&self) -> f32 {
        self.inner.final_quality
    }

    #[wasm_bindgen(getter)]
    pub fn attempts_tried(&self) -> u32 {
        self.inner.attempts_tried
    }

    /// False when even the lowest quality did not fit the target.
    #[wasm_bindgen(getter)]
    pub fn met_target(&self) -> bool {
        self.inner.met_target
    }

    /// Suggested download name, e.g. "compressed-50KB.jpg".
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        download_file_name(self.target_kb)
    }

    /// All attempts as `[{ quality, sizeBytes }, ...]`.
    pub fn trace(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.trace)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Before/after figures given the uploaded file's size in bytes.
    pub fn summary(&self, original_bytes: f64) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.summary_for(original_bytes as u64))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsSearchResult {
    fn summary_for(&self, original_bytes: u64) -> CompressionSummary {
        CompressionSummary::new(original_bytes, &self.target, &self.inner)
    }
}

/// Compress an image to at most `target_kb` kilobytes.
///
/// # Arguments
/// * `image` - Decoded source image
/// * `target_kb` - Size budget in KB (1 KB = 1024 bytes)
/// * `config` - `undefined`, `null`, or a partial
///   `{ startQuality, step, minQuality }` object; missing fields use the
///   defaults 0.9 / 0.05 / 0.05
///
/// # Returns
/// The last attempt. Check `met_target`: an unreachable target still returns
/// the lowest-quality encoding rather than an error.
///
/// # Errors
/// Returns an error for an empty image, a zero target, an invalid config, or
/// when JPEG encoding fails.
#[wasm_bindgen]
pub fn compress_to_target(
    image: &JsSourceImage,
    target_kb: u32,
    config: JsValue,
) -> Result<JsSearchResult, JsValue> {
    let config = parse_config(config)?;
    compress(image.source(), target_kb, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_config(config: JsValue) -> Result<SearchConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SearchConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid search config: {}", e)))
}

pub(crate) fn compress(
    image: &SourceImage,
    target_kb: u32,
    config: &SearchConfig,
) -> Result<JsSearchResult, SearchError> {
    let target = TargetSpec::from_kb(target_kb);
    let inner = search_jpeg(image, &target, config)?;
    Ok(JsSearchResult {
        inner,
        target,
        target_kb,
    })
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn gray(width: u32, height: u32) -> JsSourceImage {
        JsSourceImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    #[wasm_bindgen_test]
    fn test_compress_default_config() {
        let result = compress_to_target(&gray(50, 50), 50, JsValue::UNDEFINED).unwrap();
        assert!(result.met_target());
        assert_eq!(result.attempts_tried(), 1);
    }

    #[wasm_bindgen_test]
    fn test_compress_partial_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"startQuality".into(), &JsValue::from_f64(0.5)).unwrap();

        let result = compress_to_target(&gray(50, 50), 50, config.into()).unwrap();
        assert_eq!(result.final_quality(), 0.5);
    }

    #[wasm_bindgen_test]
    fn test_compress_invalid_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"step".into(), &JsValue::from_f64(0.0)).unwrap();

        assert!(compress_to_target(&gray(10, 10), 50, config.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_compress_zero_width() {
        let image = JsSourceImage::new(0, 10, vec![]);
        assert!(compress_to_target(&image, 50, JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_trace_is_array() {
        let result = compress_to_target(&gray(20, 20), 50, JsValue::NULL).unwrap();
        let trace = result.trace().unwrap();
        assert!(js_sys::Array::is_array(&trace));
    }
}
