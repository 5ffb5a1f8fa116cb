#![cfg(feature = "std")]

use log::{Level, LevelFilter, Metadata, Record};
use std::env;

/// Records from this crate pass at the configured level; dependencies are
/// held to warnings so they cannot drown out the engine's trace output.
struct EngineLogger {
    level: LevelFilter,
}

impl EngineLogger {
    fn allows(&self, level: Level, target: &str) -> bool {
        if target.starts_with(env!("CARGO_CRATE_NAME")) {
            level <= self.level
        } else {
            level <= Level::Warn && level <= self.level
        }
    }
}

impl log::Log for EngineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.allows(metadata.level(), metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[shipgame {:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level named by `SHIPGAME_LOG` (`off`, `error` .. `trace`), `info` otherwise.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Calling it again is harmless.
pub fn init_logging() {
    let level = level_from(env::var("SHIPGAME_LOG").ok().as_deref());
    let logger = Box::new(EngineLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
