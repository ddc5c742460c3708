use crate::logging::codes::{self, Code};
use crate::model::IssueName;
use thiserror::Error;

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Taxonomy construction and lookup failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaxonomyError {
    #[error("Malformed taxonomy document: {reason}")]
    Malformed { reason: String },

    #[error("Unknown issue category '{value}' in taxonomy document")]
    UnknownCategory { value: String },

    #[error("Unknown issue name '{value}' under category '{category}'")]
    UnknownIssueName { category: String, value: String },

    #[error("Issue name '{issue_name}' has no taxonomy entry")]
    NotFound { issue_name: IssueName },

    #[error("Taxonomy source '{source_name}' is unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl TaxonomyError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    pub fn unknown_category(value: &str) -> Self {
        Self::UnknownCategory {
            value: value.to_string(),
        }
    }

    pub fn unknown_issue_name(category: &str, value: &str) -> Self {
        Self::UnknownIssueName {
            category: category.to_string(),
            value: value.to_string(),
        }
    }

    pub fn not_found(issue_name: IssueName) -> Self {
        Self::NotFound { issue_name }
    }

    pub fn source_unavailable(source_name: &str, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::Malformed { .. } => codes::taxonomy::MALFORMED_DOCUMENT,
            Self::UnknownCategory { .. } => codes::taxonomy::UNKNOWN_CATEGORY,
            Self::UnknownIssueName { .. } => codes::taxonomy::UNKNOWN_ISSUE_NAME,
            Self::NotFound { .. } => codes::taxonomy::ENTRY_NOT_FOUND,
            Self::SourceUnavailable { .. } => codes::taxonomy::SOURCE_UNAVAILABLE,
            Self::InvalidArgument { .. } => codes::taxonomy::INVALID_ARGUMENT,
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
