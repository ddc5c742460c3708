// RUNTIME PREFERENCES (User Experience)

use crate::config::constants::compile_time::resources::{
    EXCEPTION_TABLE_FILE_NAME, HTTP_TABLE_FILE_NAME, TAXONOMY_FILE_NAME,
};
use crate::logging::events::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePreferences {
    /// Directory holding the three artifacts; `None` selects the bundled set
    pub resource_dir: Option<PathBuf>,

    /// Taxonomy document file name inside `resource_dir`
    pub taxonomy_file: String,

    /// HTTP status table file name inside `resource_dir`
    pub http_table_file: String,

    /// Exception table file name inside `resource_dir`
    pub exception_table_file: String,

    /// Refuse to build a classifier from non-conformant artifacts
    pub strict_validation: bool,
}

impl Default for ResourcePreferences {
    fn default() -> Self {
        Self {
            resource_dir: env::var(env_vars::RESOURCE_DIR).ok().map(PathBuf::from),
            taxonomy_file: env::var(env_vars::TAXONOMY_FILE)
                .unwrap_or_else(|_| TAXONOMY_FILE_NAME.to_string()),
            http_table_file: env::var(env_vars::HTTP_TABLE_FILE)
                .unwrap_or_else(|_| HTTP_TABLE_FILE_NAME.to_string()),
            exception_table_file: env::var(env_vars::EXCEPTION_TABLE_FILE)
                .unwrap_or_else(|_| EXCEPTION_TABLE_FILE_NAME.to_string()),
            strict_validation: env::var(env_vars::STRICT_VALIDATION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl ResourcePreferences {
    /// Preferences pointing at a directory with the default file names
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn taxonomy_path(&self) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join(&self.taxonomy_file))
    }

    pub fn http_table_path(&self) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join(&self.http_table_file))
    }

    pub fn exception_table_path(&self) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join(&self.exception_table_file))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub resources: ResourcePreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Environment variable names for runtime preferences
pub mod env_vars {
    // Resources
    pub const RESOURCE_DIR: &str = "ISSUE_RESOURCE_DIR";
    pub const TAXONOMY_FILE: &str = "ISSUE_TAXONOMY_FILE";
    pub const HTTP_TABLE_FILE: &str = "ISSUE_HTTP_TABLE_FILE";
    pub const EXCEPTION_TABLE_FILE: &str = "ISSUE_EXCEPTION_TABLE_FILE";
    pub const STRICT_VALIDATION: &str = "ISSUE_STRICT_VALIDATION";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "ISSUE_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "ISSUE_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "ISSUE_LOGGING_MIN_LEVEL";
}
