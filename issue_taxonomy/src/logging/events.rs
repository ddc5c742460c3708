//! Coded log events

use super::codes::{self, Code, CodeMetadata};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered from most to least severe; a service at level `L` emits every
/// event whose level is `<= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Accepts names (`warn`, `warning`, ...) or the numeric rank `0`-`3`
    pub fn parse(level: &str) -> Option<LogLevel> {
        match level.trim().to_ascii_lowercase().as_str() {
            "error" | "0" => Some(LogLevel::Error),
            "warning" | "warn" | "1" => Some(LogLevel::Warning),
            "info" | "2" => Some(LogLevel::Info),
            "debug" | "3" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

/// JSON line written by structured loggers
#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    code: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requires_halt: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    context: &'a BTreeMap<String, String>,
}

impl LogEvent {
    pub fn new(level: LogLevel, code: Code, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn error(code: Code, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, code, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, codes::uncoded::WARNING, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, codes::uncoded::INFO, message)
    }

    /// Info event carrying a success code
    pub fn success(code: Code, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, code, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, codes::uncoded::DEBUG, message)
    }

    pub fn with_context(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn metadata(&self) -> Option<&'static CodeMetadata> {
        self.code.metadata()
    }

    pub fn requires_halt(&self) -> bool {
        self.metadata().map_or(false, |m| m.requires_halt)
    }

    /// `[LEVEL] CODE - message (k=v, ...)`
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {} - {}", self.level, self.code, self.message);
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }
        line
    }

    pub fn format_json(&self) -> serde_json::Result<String> {
        let metadata = self.metadata();
        serde_json::to_string(&JsonRecord {
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            level: self.level.as_str(),
            code: self.code.as_str(),
            message: &self.message,
            category: metadata.map(|m| m.category),
            severity: metadata.map(|m| m.severity.as_str()),
            requires_halt: metadata.filter(|_| self.is_error()).map(|m| m.requires_halt),
            context: &self.context,
        })
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_event() {
        let event = LogEvent::error(codes::loading::ARTIFACT_NOT_FOUND, "Artifact not found");

        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "L001");
        assert_eq!(event.metadata().map(|m| m.category), Some("Loading"));
        assert!(event.requires_halt());
    }

    #[test]
    fn test_uncoded_events() {
        assert_eq!(LogEvent::info("x").code, codes::uncoded::INFO);
        assert_eq!(LogEvent::warning("x").level, LogLevel::Warning);
        assert!(LogEvent::debug("x").metadata().is_none());
    }

    #[test]
    fn test_format_sorts_context() {
        let event = LogEvent::new(LogLevel::Debug, codes::mapping::FALLBACK_TO_UNSPECIFIED, "fallback")
            .with_context("table", "HTTP")
            .with_context("key", 999);

        assert_eq!(event.format(), "[DEBUG] M010 - fallback (key=999, table=HTTP)");
        assert_eq!(event.to_string(), event.format());
    }

    #[test]
    fn test_json_format() {
        let event = LogEvent::error(codes::mapping::INVALID_ISSUE_NAME, "bad value")
            .with_context("key", "400");
        let value: serde_json::Value = serde_json::from_str(&event.format_json().unwrap()).unwrap();

        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["code"], "M003");
        assert_eq!(value["category"], "Mapping");
        assert_eq!(value["context"]["key"], "400");
        assert_eq!(value["requires_halt"], false);

        let value: serde_json::Value =
            serde_json::from_str(&LogEvent::info("plain").format_json().unwrap()).unwrap();
        assert!(value.get("category").is_none());
        assert!(value.get("context").is_none());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse(" warn "), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse("2"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert!(LogLevel::Error < LogLevel::Debug);
    }
}
