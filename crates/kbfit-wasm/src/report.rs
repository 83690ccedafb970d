//! Size formatting and download naming for the UI.

use kbfit_core::report;
use wasm_bindgen::prelude::*;

/// Format a byte count as kilobytes with two decimals, e.g. "48.73".
#[wasm_bindgen]
pub fn format_kb(bytes: f64) -> String {
    report::format_kb(bytes.max(0.0) as u64)
}

/// Download name for a result compressed to `target_kb`, e.g. "compressed-50KB.jpg".
#[wasm_bindgen]
pub fn download_file_name(target_kb: u32) -> String {
    report::download_file_name(target_kb)
}

/// Target sizes offered in the size picker, in KB.
#[wasm_bindgen]
pub fn preset_targets_kb() -> Vec<u32> {
    report::PRESET_TARGETS_KB.to_vec()
}

#[wasm_bindgen]
pub fn default_target_kb() -> u32 {
    report::DEFAULT_TARGET_KB
}
