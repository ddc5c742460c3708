use issue_taxonomy::logging::codes::{self, Code};
use issue_taxonomy::{ClassificationError, LoadError};
use thiserror::Error;

pub type IssueManagerResult<T> = Result<T, IssueManagerError>;

#[derive(Debug, Error)]
pub enum IssueManagerError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl IssueManagerError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidArgument { .. } => codes::issue::INVALID_ARGUMENT,
            Self::Classification(inner) => inner.error_code(),
            Self::Load(inner) => inner.error_code(),
            Self::Json { .. } => codes::issue::JSON_FAILURE,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
