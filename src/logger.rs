use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable read for the log level.
pub const LOG_ENV: &str = "KMEANSPP_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {:<5} {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<Level>().ok().map(|level| level.to_level_filter())
}

/// Install the process logger. `level` wins over the environment; without
/// either the logger only reports warnings and errors.
pub fn init_logger(level: Option<LevelFilter>) -> Result<(), SetLoggerError> {
    let level = level
        .or_else(|| std::env::var(LOG_ENV).ok().as_deref().and_then(parse_level))
        .unwrap_or(LevelFilter::Warn);

    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
