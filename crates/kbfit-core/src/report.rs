//! Figures shown to the user once a search finishes.
//!
//! Sizes are presented in kilobytes (1 KB = 1024 bytes) with two decimals,
//! and the download offered for a result is named after the chosen target.

use serde::{Deserialize, Serialize};

use crate::search::{SearchResult, TargetSpec, BYTES_PER_KB};

/// Target sizes offered in the size picker, in KB.
pub const PRESET_TARGETS_KB: [u32; 3] = [20, 50, 100];

/// Target preselected in the size picker, in KB.
pub const DEFAULT_TARGET_KB: u32 = 50;

/// Convert a byte count to kilobytes.
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB as f64
}

/// Format a byte count as kilobytes with two decimals, e.g. `"48.73"`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes_to_kb(bytes))
}

/// File name offered when downloading a result for the given target.
pub fn download_file_name(target_kb: u32) -> String {
    format!("compressed-{target_kb}KB.jpg")
}

/// Before/after numbers for one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionSummary {
    /// Size of the uploaded file
    pub original_bytes: u64,
    /// Size of the returned encoding
    pub compressed_bytes: u64,
    pub target_bytes: u64,
    pub quality: f32,
    pub attempts: u32,
    pub met_target: bool,
}

impl CompressionSummary {
    pub fn new(original_bytes: u64, target: &TargetSpec, result: &SearchResult) -> Self {
        Self {
            original_bytes,
            compressed_bytes: result.size_bytes(),
            target_bytes: target.target_bytes,
            quality: result.final_quality,
            attempts: result.attempts_tried,
            met_target: result.met_target,
        }
    }

    /// Percentage of the original size saved. Negative when the output grew.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    pub fn original_kb(&self) -> String {
        format_kb(self.original_bytes)
    }

    pub fn compressed_kb(&self) -> String {
        format_kb(self.compressed_bytes)
    }
}
