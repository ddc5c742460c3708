//! Forward and reverse lookups over the HTTP and exception tables

use super::error::{MappingError, MappingResult};
use super::table::{MappingTable, TableKind};
use crate::log_debug;
use crate::logging::codes;
use crate::model::IssueName;

/// Holds the two independent tables
#[derive(Debug, Clone)]
pub struct MappingResolver {
    http: MappingTable,
    exception: MappingTable,
}

impl MappingResolver {
    pub fn new(http: MappingTable, exception: MappingTable) -> Self {
        Self { http, exception }
    }

    pub fn http_table(&self) -> &MappingTable {
        &self.http
    }

    pub fn exception_table(&self) -> &MappingTable {
        &self.exception
    }

    /// Issue name for an HTTP status key. Unknown keys fall back to `UNSPECIFIED_ISSUE`.
    pub fn issue_name_from_http(&self, status_key: &str) -> MappingResult<IssueName> {
        forward_with_fallback(&self.http, status_key)
    }

    /// Issue name for an exception identifier. Unknown keys fall back to `UNSPECIFIED_ISSUE`.
    pub fn issue_name_from_exception(&self, exception_key: &str) -> MappingResult<IssueName> {
        forward_with_fallback(&self.exception, exception_key)
    }

    /// Exact exception lookup without fallback; `Ok(None)` when unmapped
    pub fn find_issue_name_for_exception(
        &self,
        exception_key: &str,
    ) -> MappingResult<Option<IssueName>> {
        let key = require_key(exception_key, TableKind::Exception)?;
        self.exception.resolve(key)
    }

    /// First HTTP status mapped to `issue_name`
    pub fn http_status_from_issue_name(&self, issue_name: IssueName) -> Option<&str> {
        reverse(&self.http, issue_name)
    }

    /// First exception identifier mapped to `issue_name`
    pub fn exception_from_issue_name(&self, issue_name: IssueName) -> Option<&str> {
        reverse(&self.exception, issue_name)
    }
}

fn require_key(key: &str, kind: TableKind) -> MappingResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(MappingError::invalid_argument(format!(
            "{} lookup key must not be empty",
            kind
        )));
    }
    Ok(trimmed)
}

fn forward_with_fallback(table: &MappingTable, raw_key: &str) -> MappingResult<IssueName> {
    let key = require_key(raw_key, table.kind())?;
    match table.resolve(key)? {
        Some(issue_name) => Ok(issue_name),
        None => {
            log_debug!(codes::mapping::FALLBACK_TO_UNSPECIFIED, "No mapping rule, using UNSPECIFIED_ISSUE",
                "table" => table.kind(), "key" => key);
            Ok(IssueName::UnspecifiedIssue)
        }
    }
}

fn reverse(table: &MappingTable, issue_name: IssueName) -> Option<&str> {
    let found = table.first_key_for(issue_name);
    if found.is_none() {
        log_debug!(codes::mapping::REVERSE_LOOKUP_MISS, "No key maps to issue name",
            "table" => table.kind(), "issue_name" => issue_name);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn resolver() -> MappingResolver {
        let http = MappingTable::from_pairs(
            TableKind::Http,
            vec![
                ("400", "VALIDATION_ISSUE"),
                ("422", "VALIDATION_ISSUE"),
                ("504", "TIMEOUT_ISSUE"),
                ("418", "TEAPOT_ISSUE"),
            ],
        )
        .unwrap();
        let exception = MappingTable::from_pairs(
            TableKind::Exception,
            vec![("java.lang.IllegalArgumentException", "VALIDATION_ISSUE")],
        )
        .unwrap();
        MappingResolver::new(http, exception)
    }

    #[test]
    fn test_forward_lookup() {
        let resolver = resolver();

        assert_eq!(
            resolver.issue_name_from_http("400").unwrap(),
            IssueName::ValidationIssue
        );
        assert_eq!(
            resolver
                .issue_name_from_exception("java.lang.IllegalArgumentException")
                .unwrap(),
            IssueName::ValidationIssue
        );
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let resolver = resolver();

        assert_eq!(
            resolver.issue_name_from_http("999").unwrap(),
            IssueName::UnspecifiedIssue
        );
        assert_eq!(
            resolver.issue_name_from_http("nonexistent-code").unwrap(),
            IssueName::UnspecifiedIssue
        );
        assert_eq!(
            resolver.issue_name_from_exception("com.acme.Boom").unwrap(),
            IssueName::UnspecifiedIssue
        );
    }

    #[test]
    fn test_empty_key_is_invalid_argument() {
        let resolver = resolver();

        assert_matches!(
            resolver.issue_name_from_http(""),
            Err(MappingError::InvalidArgument { .. })
        );
        assert_matches!(
            resolver.issue_name_from_exception("   "),
            Err(MappingError::InvalidArgument { .. })
        );
        assert_matches!(
            resolver.find_issue_name_for_exception(""),
            Err(MappingError::InvalidArgument { .. })
        );
    }

    #[test]
    fn test_invalid_value_is_distinct_from_missing_key() {
        let resolver = resolver();

        assert_matches!(
            resolver.issue_name_from_http("418"),
            Err(MappingError::InvalidIssueName { kind: TableKind::Http, .. })
        );
    }

    #[test]
    fn test_exact_exception_lookup() {
        let resolver = resolver();

        assert_eq!(
            resolver
                .find_issue_name_for_exception("java.lang.IllegalArgumentException")
                .unwrap(),
            Some(IssueName::ValidationIssue)
        );
        assert_eq!(
            resolver.find_issue_name_for_exception("java.lang.Exception").unwrap(),
            None
        );
    }

    #[test]
    fn test_reverse_lookup() {
        let resolver = resolver();

        assert_eq!(
            resolver.http_status_from_issue_name(IssueName::ValidationIssue),
            Some("400")
        );
        assert_eq!(
            resolver.exception_from_issue_name(IssueName::ValidationIssue),
            Some("java.lang.IllegalArgumentException")
        );
        assert_eq!(resolver.http_status_from_issue_name(IssueName::NetworkIssue), None);
        assert_eq!(resolver.exception_from_issue_name(IssueName::TimeoutIssue), None);
    }
}
