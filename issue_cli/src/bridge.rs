//! Routes the library's coded log events through the `log` facade

use issue_taxonomy::logging::{self, LogEvent, LogLevel, Logger, LoggingService};
use std::sync::Arc;

const TARGET: &str = "issue_taxonomy";

/// `Logger` that forwards every event to `log` on stderr via `env_logger`
pub struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, event: &LogEvent) {
        let line = event.format();
        match event.level {
            LogLevel::Error => log::error!(target: TARGET, "{}", line),
            LogLevel::Warning => log::warn!(target: TARGET, "{}", line),
            LogLevel::Info => log::info!(target: TARGET, "{}", line),
            LogLevel::Debug => log::debug!(target: TARGET, "{}", line),
        }
    }
}

/// Library level and `env_logger` filter for a `-v` count
pub fn levels_for(verbose: u8) -> (LogLevel, log::LevelFilter) {
    match verbose {
        0 => (LogLevel::Warning, log::LevelFilter::Warn),
        1 => (LogLevel::Info, log::LevelFilter::Info),
        _ => (LogLevel::Debug, log::LevelFilter::Debug),
    }
}

/// Install `env_logger` and the bridged global logging service. `RUST_LOG`
/// still refines the `env_logger` filter.
pub fn init(verbose: u8) -> Result<(), String> {
    let (level, filter) = levels_for(verbose);

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();

    let service = LoggingService::new(Arc::new(LogBridge), level);
    logging::init_global_logging_with_service(Arc::new(service))
}
