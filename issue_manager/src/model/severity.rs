use serde::{Deserialize, Serialize};
use std::fmt;

/// How bad an issue is for the reporting service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Degraded but handled
    Issue,
    /// Request failed
    Error,
    /// Service-level failure
    Failure,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Issue => "ISSUE",
            Severity::Error => "ERROR",
            Severity::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
