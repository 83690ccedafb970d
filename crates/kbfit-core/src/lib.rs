//! kbfit core - target-size image compression
//!
//! Re-encodes an image as JPEG at decreasing quality until the output fits a
//! size budget given in kilobytes.
//!
//! - [`decode`] turns uploaded files into RGB [`SourceImage`]s
//! - [`encode`] holds the encode primitive and the JPEG codec
//! - [`search`] runs the quality search
//! - [`report`] formats sizes and names downloads for the UI

pub mod decode;
pub mod encode;
pub mod report;
pub mod search;

pub use decode::{decode_image, DecodeError, SourceImage};
pub use encode::{EncodeError, JpegQualityEncoder, QualityEncoder};
pub use report::{download_file_name, format_kb, CompressionSummary};
pub use search::{
    search, search_jpeg, AttemptRecord, EncodingAttempt, SearchConfig, SearchError, SearchResult,
    TargetSpec,
};
