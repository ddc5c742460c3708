//! Closed set of canonical issue names

use super::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for a class of problem.
///
/// The canonical string form (`as_str`) is the join key shared by the mapping
/// tables and the taxonomy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueName {
    // Internal
    ValidationIssue,
    AuthenticationIssue,
    AuthorizationIssue,
    NotFoundIssue,
    ConflictIssue,
    CodeIssue,
    ConfigurationIssue,
    DatabaseIssue,
    ResourceExhaustionIssue,
    ConcurrencyIssue,
    SerializationIssue,
    UnsupportedOperationIssue,

    // Dependency
    DownstreamServiceIssue,
    ServiceUnavailableIssue,
    TimeoutIssue,
    NetworkIssue,
    RateLimitIssue,
    ThirdPartyLibraryIssue,
    SlaViolationIssue,

    // Fallback
    UnspecifiedIssue,
}

impl IssueName {
    /// Every issue name, in declaration order
    pub const ALL: [IssueName; 20] = [
        IssueName::ValidationIssue,
        IssueName::AuthenticationIssue,
        IssueName::AuthorizationIssue,
        IssueName::NotFoundIssue,
        IssueName::ConflictIssue,
        IssueName::CodeIssue,
        IssueName::ConfigurationIssue,
        IssueName::DatabaseIssue,
        IssueName::ResourceExhaustionIssue,
        IssueName::ConcurrencyIssue,
        IssueName::SerializationIssue,
        IssueName::UnsupportedOperationIssue,
        IssueName::DownstreamServiceIssue,
        IssueName::ServiceUnavailableIssue,
        IssueName::TimeoutIssue,
        IssueName::NetworkIssue,
        IssueName::RateLimitIssue,
        IssueName::ThirdPartyLibraryIssue,
        IssueName::SlaViolationIssue,
        IssueName::UnspecifiedIssue,
    ];

    /// Canonical upper snake case form
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueName::ValidationIssue => "VALIDATION_ISSUE",
            IssueName::AuthenticationIssue => "AUTHENTICATION_ISSUE",
            IssueName::AuthorizationIssue => "AUTHORIZATION_ISSUE",
            IssueName::NotFoundIssue => "NOT_FOUND_ISSUE",
            IssueName::ConflictIssue => "CONFLICT_ISSUE",
            IssueName::CodeIssue => "CODE_ISSUE",
            IssueName::ConfigurationIssue => "CONFIGURATION_ISSUE",
            IssueName::DatabaseIssue => "DATABASE_ISSUE",
            IssueName::ResourceExhaustionIssue => "RESOURCE_EXHAUSTION_ISSUE",
            IssueName::ConcurrencyIssue => "CONCURRENCY_ISSUE",
            IssueName::SerializationIssue => "SERIALIZATION_ISSUE",
            IssueName::UnsupportedOperationIssue => "UNSUPPORTED_OPERATION_ISSUE",
            IssueName::DownstreamServiceIssue => "DOWNSTREAM_SERVICE_ISSUE",
            IssueName::ServiceUnavailableIssue => "SERVICE_UNAVAILABLE_ISSUE",
            IssueName::TimeoutIssue => "TIMEOUT_ISSUE",
            IssueName::NetworkIssue => "NETWORK_ISSUE",
            IssueName::RateLimitIssue => "RATE_LIMIT_ISSUE",
            IssueName::ThirdPartyLibraryIssue => "THIRD_PARTY_LIBRARY_ISSUE",
            IssueName::SlaViolationIssue => "SLA_VIOLATION_ISSUE",
            IssueName::UnspecifiedIssue => "UNSPECIFIED_ISSUE",
        }
    }

    /// Case-insensitive parse, used for taxonomy document keys
    pub fn parse_ignore_case(value: &str) -> ModelResult<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::unknown_issue_name(value))
    }

    /// Sentinel used when no rule exists for an identifier
    pub fn is_unspecified(&self) -> bool {
        matches!(self, IssueName::UnspecifiedIssue)
    }
}

/// Exact, case-sensitive parse. Table values must spell the canonical form.
impl FromStr for IssueName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ModelError::unknown_issue_name(s))
    }
}

impl fmt::Display for IssueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
