//! Target-size quality search.
//!
//! Given a decoded image and a size budget, [`search`] re-encodes the image at
//! decreasing quality until the output fits or the quality floor is reached.
//!
//! # Progression
//!
//! Qualities follow a fixed arithmetic progression,
//! `start_quality, start_quality - step, ...`, clamped at `min_quality`.
//! For a deterministic encoder the whole search is reproducible.
//!
//! # Examples
//!
//! ```ignore
//! use kbfit_core::search::{search_jpeg, SearchConfig, TargetSpec};
//!
//! let result = search_jpeg(&image, &TargetSpec::from_kb(50), &SearchConfig::default())?;
//! if !result.met_target {
//!     println!("best effort: {} bytes", result.size_bytes());
//! }
//! ```

mod config;
mod quality;
mod types;

pub use config::{SearchConfig, TargetSpec, BYTES_PER_KB, QUALITY_RESOLUTION};
pub use quality::{search, search_jpeg};
pub use types::{AttemptRecord, EncodingAttempt, SearchError, SearchResult};
