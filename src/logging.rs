// src/logging.rs
//! Minimal stderr backend for the `log` facade

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Map `-v` repetitions to a level filter; warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(verbosity: u8) {
    // a logger is already installed on repeated calls; keep it
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level_for(verbosity));
}
