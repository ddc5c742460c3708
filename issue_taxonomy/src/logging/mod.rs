//! Coded logging for the issue classifier
//!
//! Library code logs through the exported macros. Nothing is emitted until a
//! host installs a service with one of the `init_global_logging*` functions,
//! so embedding applications stay silent by default.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger};

use crate::config::constants::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::config::runtime::LoggingPreferences;

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install a service built from the environment-derived preferences
pub fn init_global_logging() -> Result<(), String> {
    init_global_logging_with_preferences(LoggingPreferences::default())
}

pub fn init_global_logging_with_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    init_global_logging_with_service(Arc::new(LoggingService::from_preferences(&preferences)))
}

/// Install a caller-provided service. Fails if one is already installed.
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())?;

    emit(
        LogLevel::Info,
        codes::success::LOGGING_INITIALIZED,
        "Global logging initialized",
        Vec::new(),
    );
    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach a logger
pub fn enabled(level: LogLevel) -> bool {
    try_get_global_logger().map_or(false, |logger| logger.enabled(level))
}

fn clamp_message(message: &str) -> &str {
    if message.len() <= MAX_LOG_MESSAGE_LENGTH {
        return message;
    }
    let mut end = MAX_LOG_MESSAGE_LENGTH;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

/// Backend of the logging macros
#[doc(hidden)]
pub fn emit(level: LogLevel, code: Code, message: &str, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let event = context.into_iter().fold(
        LogEvent::new(level, code, clamp_message(message)),
        |event, (key, value)| event.with_context(key, value),
    );
    logger.log_event(event);
}
