use crate::logging::codes::{self, Code};
use crate::mapping::MappingError;
use crate::taxonomy::TaxonomyError;
use crate::validation::ConformanceReport;
use std::path::PathBuf;
use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Startup failures. All of them abort construction of the classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Artifact not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading artifact: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Artifact {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Artifact {path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },

    #[error("I/O error reading {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Unsupported mapping table format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("{artifact} has {count} entries, limit is {limit}")]
    TooManyEntries {
        artifact: String,
        count: usize,
        limit: usize,
    },

    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("Artifacts are not conformant: {} problems", .report.problem_count())]
    NonConformant { report: Box<ConformanceReport> },
}

impl LoadError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::TooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    pub fn too_many_entries(artifact: &str, count: usize, limit: usize) -> Self {
        Self::TooManyEntries {
            artifact: artifact.to_string(),
            count,
            limit,
        }
    }

    pub fn non_conformant(report: ConformanceReport) -> Self {
        Self::NonConformant {
            report: Box::new(report),
        }
    }

    /// Map an I/O failure on `path` to the matching variant
    pub fn from_io(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Self::InvalidEncoding { path },
            _ => Self::Io {
                path,
                reason: error.to_string(),
            },
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::NotFound { .. } => codes::loading::ARTIFACT_NOT_FOUND,
            Self::PermissionDenied { .. } => codes::loading::PERMISSION_DENIED,
            Self::TooLarge { .. } => codes::loading::ARTIFACT_TOO_LARGE,
            Self::InvalidEncoding { .. } => codes::loading::INVALID_ENCODING,
            Self::Io { .. } => codes::loading::IO_ERROR,
            Self::UnsupportedFormat { .. } => codes::loading::UNSUPPORTED_FORMAT,
            Self::TooManyEntries { .. } => codes::loading::TOO_MANY_ENTRIES,
            Self::Taxonomy(inner) => inner.error_code(),
            Self::Mapping(inner) => inner.error_code(),
            Self::NonConformant { .. } => codes::loading::NON_CONFORMANT,
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
