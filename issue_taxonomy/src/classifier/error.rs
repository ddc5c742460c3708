use crate::logging::codes::{self, Code};
use crate::mapping::MappingError;
use crate::model::IssueName;
use crate::taxonomy::TaxonomyError;
use thiserror::Error;

pub type ClassificationResult<T> = Result<T, ClassificationError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error(transparent)]
    Mapping(MappingError),

    /// A resolved issue name has no usable taxonomy entry
    #[error("Configuration inconsistency for '{issue_name}': {source}")]
    Configuration {
        issue_name: IssueName,
        #[source]
        source: TaxonomyError,
    },

    #[error("No mapping for exception type '{type_name}'")]
    UnmappedExceptionType { type_name: String },
}

impl ClassificationError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn configuration(issue_name: IssueName, source: TaxonomyError) -> Self {
        Self::Configuration { issue_name, source }
    }

    pub fn unmapped_exception_type(type_name: &str) -> Self {
        Self::UnmappedExceptionType {
            type_name: type_name.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidArgument { .. } => codes::classification::INVALID_ARGUMENT,
            Self::Mapping(inner) => inner.error_code(),
            Self::Configuration { .. } => codes::classification::CONFIGURATION_INCONSISTENCY,
            Self::UnmappedExceptionType { .. } => codes::classification::UNMAPPED_EXCEPTION_TYPE,
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

impl From<MappingError> for ClassificationError {
    fn from(error: MappingError) -> Self {
        match error {
            MappingError::InvalidArgument { reason } => Self::InvalidArgument { reason },
            other => Self::Mapping(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::TableKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_mapping_invalid_argument_is_lifted() {
        let error: ClassificationError = MappingError::invalid_argument("empty").into();
        assert_matches!(error, ClassificationError::InvalidArgument { .. });

        let error: ClassificationError =
            MappingError::invalid_issue_name(TableKind::Http, "418", "TEAPOT").into();
        assert_matches!(error, ClassificationError::Mapping(_));
        assert_eq!(error.error_code(), codes::mapping::INVALID_ISSUE_NAME);
    }

    #[test]
    fn test_configuration_error_is_fatal() {
        let error = ClassificationError::configuration(
            IssueName::TimeoutIssue,
            TaxonomyError::not_found(IssueName::TimeoutIssue),
        );
        assert_eq!(error.error_code(), codes::classification::CONFIGURATION_INCONSISTENCY);
        assert!(error.requires_halt());
        assert!(error.to_string().contains("TIMEOUT_ISSUE"));
    }
}
