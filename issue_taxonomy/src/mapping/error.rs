use super::table::TableKind;
use crate::logging::codes::{self, Code};
use thiserror::Error;

pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping table construction and lookup failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("Malformed {kind} mapping table: {reason}")]
    Malformed { kind: TableKind, reason: String },

    #[error("Duplicate key '{key}' in {kind} mapping table")]
    DuplicateKey { kind: TableKind, key: String },

    /// Key present, value outside the issue name set
    #[error("Key '{key}' in {kind} mapping table maps to '{value}', which is not an issue name")]
    InvalidIssueName {
        kind: TableKind,
        key: String,
        value: String,
    },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl MappingError {
    pub fn malformed(kind: TableKind, reason: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            reason: reason.into(),
        }
    }

    pub fn duplicate_key(kind: TableKind, key: &str) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.to_string(),
        }
    }

    pub fn invalid_issue_name(kind: TableKind, key: &str, value: &str) -> Self {
        Self::InvalidIssueName {
            kind,
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::Malformed { .. } => codes::mapping::MALFORMED_TABLE,
            Self::DuplicateKey { .. } => codes::mapping::DUPLICATE_KEY,
            Self::InvalidIssueName { .. } => codes::mapping::INVALID_ISSUE_NAME,
            Self::InvalidArgument { .. } => codes::mapping::INVALID_ARGUMENT,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
