use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Installs the logger; a second call only updates the level
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_err() {
            gloo::console::debug!("console logger already installed");
        }
        log::set_max_level(level);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes_target() {
        assert_eq!(format_line("host-bridge", "expand failed"), "[host-bridge] expand failed");
    }
}
