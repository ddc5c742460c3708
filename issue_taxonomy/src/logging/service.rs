//! Logging service and the loggers it can drive

use super::codes::Code;
use super::events::{LogEvent, LogLevel};
use crate::config::constants::compile_time::logging::EVENT_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for log events
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Filters events by level and hands the rest to a `Logger`
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Console or JSON logger per the preferences. Disabled console output
    /// yields a service that drops everything.
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let logger: Arc<dyn Logger> = if !preferences.enable_console_logging {
            Arc::new(NullLogger)
        } else if preferences.use_structured_logging {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger)
        };
        Self::new(logger, preferences.min_log_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.enabled(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Human-readable lines on stderr
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", event.format());
    }
}

/// One JSON object per line on stderr
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        match event.format_json() {
            Ok(line) => eprintln!("{}", line),
            Err(_) => eprintln!("{}", event.format()),
        }
    }
}

pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Bounded in-memory buffer, oldest events evicted first. Used by tests and
/// hosts that inspect what the classifier reported.
pub struct MemoryLogger {
    events: Mutex<VecDeque<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn with_code(&self, code: Code) -> Vec<LogEvent> {
        self.lock().iter().filter(|e| e.code == code).cloned().collect()
    }

    pub fn contains(&self, code: Code) -> bool {
        self.lock().iter().any(|e| e.code == code)
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock();
        if events.len() >= EVENT_BUFFER_SIZE {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    fn memory_service(min_level: LogLevel) -> (Arc<MemoryLogger>, LoggingService) {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), min_level);
        (memory, service)
    }

    #[test]
    fn test_level_filtering() {
        let (memory, service) = memory_service(LogLevel::Info);

        service.log_event(LogEvent::debug("dropped"));
        service.log_event(LogEvent::info("kept"));
        service.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "kept too"));

        assert_eq!(memory.len(), 2);
        assert!(service.enabled(LogLevel::Warning));
        assert!(!service.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_code_queries() {
        let (memory, service) = memory_service(LogLevel::Debug);

        service.log_event(LogEvent::new(
            LogLevel::Warning,
            codes::classification::UNMAPPED_EXCEPTION_TYPE,
            "unmapped",
        ));
        service.log_event(
            LogEvent::error(codes::mapping::INVALID_ISSUE_NAME, "bad").with_context("key", "400"),
        );

        assert!(memory.contains(codes::classification::UNMAPPED_EXCEPTION_TYPE));
        assert!(!memory.contains(codes::mapping::DUPLICATE_KEY));

        let events = memory.with_code(codes::mapping::INVALID_ISSUE_NAME);
        assert_eq!(events[0].context.get("key").map(String::as_str), Some("400"));

        memory.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let memory = MemoryLogger::new();
        for i in 0..EVENT_BUFFER_SIZE + 5 {
            memory.log(&LogEvent::info(format!("event {}", i)));
        }

        let events = memory.events();
        assert_eq!(events.len(), EVENT_BUFFER_SIZE);
        assert_eq!(events[0].message, "event 5");
    }

    #[test]
    fn test_from_preferences() {
        let preferences = LoggingPreferences {
            use_structured_logging: true,
            enable_console_logging: true,
            min_log_level: LogLevel::Warning,
        };
        let service = LoggingService::from_preferences(&preferences);
        assert_eq!(service.min_level(), LogLevel::Warning);

        let quiet = LoggingService::from_preferences(&LoggingPreferences {
            enable_console_logging: false,
            ..preferences
        });
        quiet.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "dropped"));
    }
}
