//! Attempt bookkeeping and search errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::EncodeError;

/// Errors that abort a quality search.
///
/// An unreachable size budget is not an error; it is reported through
/// [`SearchResult::met_target`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// The image, target or config is unusable. Nothing was encoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The encode primitive failed; the search stopped at this attempt.
    #[error("Encoding at quality {quality} failed: {source}")]
    EncodeFailure {
        quality: f32,
        #[source]
        source: EncodeError,
    },
}

/// One encode-and-measure trial.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingAttempt {
    /// Normalized quality the image was encoded at
    pub quality: f32,
    /// Encoded size in bytes
    pub size_bytes: u64,
    /// Encoded bytes
    pub data: Vec<u8>,
}

impl EncodingAttempt {
    pub fn new(quality: f32, data: Vec<u8>) -> Self {
        Self {
            quality,
            size_bytes: data.len() as u64,
            data,
        }
    }

    /// Quality and size of this attempt, without the payload.
    pub fn record(&self) -> AttemptRecord {
        AttemptRecord {
            quality: self.quality,
            size_bytes: self.size_bytes,
        }
    }
}

/// Quality and size of a past attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub quality: f32,
    pub size_bytes: u64,
}

/// Outcome of a quality search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The last attempt made; its bytes are the search output.
    pub attempt: EncodingAttempt,
    /// Number of encodes performed (at least 1).
    pub attempts_tried: u32,
    /// Whether `attempt.size_bytes` is within the target.
    pub met_target: bool,
    /// Quality of the returned attempt.
    pub final_quality: f32,
    /// Every attempt in order, ending with the returned one.
    pub trace: Vec<AttemptRecord>,
}

impl SearchResult {
    /// Encoded size of the returned attempt.
    pub fn size_bytes(&self) -> u64 {
        self.attempt.size_bytes
    }

    /// Borrow the encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.attempt.data
    }

    /// Take ownership of the encoded bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.attempt.data
    }
}
