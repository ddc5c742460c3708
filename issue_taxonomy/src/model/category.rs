//! Coarse grouping of issue names

use super::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an issue, taken from the top-level key of the taxonomy document.
///
/// - `InternalIssue`: failures arising inside the service itself (code bugs,
///   bad error handling, database failure, scalability limits).
/// - `DependencyIssue`: failures of downstream services, internal or
///   third-party libraries, or a dependency missing its SLA.
/// - `Unspecified`: anything that cannot be placed in the two groups above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCategory {
    InternalIssue,
    DependencyIssue,
    Unspecified,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 3] = [
        IssueCategory::InternalIssue,
        IssueCategory::DependencyIssue,
        IssueCategory::Unspecified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::InternalIssue => "INTERNAL_ISSUE",
            IssueCategory::DependencyIssue => "DEPENDENCY_ISSUE",
            IssueCategory::Unspecified => "UNSPECIFIED",
        }
    }

    /// Case-insensitive parse, used for taxonomy document keys
    pub fn parse_ignore_case(value: &str) -> ModelResult<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::unknown_category(value))
    }
}

impl FromStr for IssueCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ModelError::unknown_category(s))
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "DEPENDENCY_ISSUE".parse::<IssueCategory>(),
            Ok(IssueCategory::DependencyIssue)
        );
        assert_eq!(
            IssueCategory::parse_ignore_case("internal_issue"),
            Ok(IssueCategory::InternalIssue)
        );
        assert_eq!(
            IssueCategory::parse_ignore_case("external"),
            Err(ModelError::unknown_category("external"))
        );
    }

    #[test]
    fn test_display_matches_canonical_form() {
        for category in IssueCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
