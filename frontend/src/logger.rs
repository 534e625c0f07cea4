use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console.
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

        let line: JsValue =
            format_line(record.level(), record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init(debug: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_filter(debug));
    }
}

fn level_filter(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_mode_lowers_the_level() {
        assert_eq!(level_filter(true), LevelFilter::Debug);
        assert_eq!(level_filter(false), LevelFilter::Info);
    }

    #[test]
    fn line_carries_level_and_target() {
        assert_eq!(
            format_line(Level::Warn, "gallery_frontend::clipboard", "denied"),
            "[WARN] gallery_frontend::clipboard: denied"
        );
    }
}
