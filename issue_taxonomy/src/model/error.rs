//! Errors raised while converting text into the closed model enumerations

/// Result type for model parsing
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown issue name '{value}'")]
    UnknownIssueName { value: String },

    #[error("Unknown issue category '{value}'")]
    UnknownCategory { value: String },
}

impl ModelError {
    pub fn unknown_issue_name(value: &str) -> Self {
        Self::UnknownIssueName {
            value: value.to_string(),
        }
    }

    pub fn unknown_category(value: &str) -> Self {
        Self::UnknownCategory {
            value: value.to_string(),
        }
    }
}
