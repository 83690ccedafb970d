//! kbfit WASM - WebAssembly bindings for kbfit
//!
//! Exposes target-size JPEG compression to the browser UI.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for decoded images
//! - `decode` - Decoding uploaded files
//! - `compress` - The target-size quality search
//! - `report` - Size formatting and download naming
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compress_to_target } from '@kbfit/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = compress_to_target(image, 50, undefined);
//! if (!result.met_target) {
//!   console.warn(`Could only reach ${result.size_kb} KB`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod logger;
mod report;
mod types;

// Re-export public types
pub use compress::{compress_to_target, JsSearchResult};
pub use decode::decode_image;
pub use report::{default_target_kb, download_file_name, format_kb, preset_targets_kb};
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::install(log::LevelFilter::Warn);
}

/// Change console log verbosity ("off", "error", "warn", "info", "debug", "trace").
///
/// Returns false for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::parse_level(level) {
        Some(filter) => {
            logger::install(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_is_repeatable() {
        init();
        init();
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        assert!(set_log_level("debug"));
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
