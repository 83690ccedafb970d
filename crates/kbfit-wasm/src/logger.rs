//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Native builds (tests, tooling) have no console object.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    eprintln!("{level}: {line}");
}

/// Install the console logger. Later calls only change the level.
pub(crate) fn install(level: LevelFilter) {
    // Already set on repeat calls
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name ("off", "error", "warn", "info", "debug", "trace").
pub(crate) fn parse_level(name: &str) -> Option<LevelFilter> {
    name.parse().ok()
}
