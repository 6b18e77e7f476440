// Console logging and display formatting helpers

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Routes the `log` macros to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

/// Two decimal places, the way results are shown to the user.
pub fn format_weight(weight: f64) -> String {
    format!("{:.2}", weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_has_two_decimals() {
        assert_eq!(format_weight(16.55), "16.55");
        assert_eq!(format_weight(180.0), "180.00");
        assert_eq!(format_weight(5021.999), "5022.00");
    }
}
