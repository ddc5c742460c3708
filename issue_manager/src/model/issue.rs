use super::{Service, Severity};
use crate::error::{IssueManagerError, IssueManagerResult};
use chrono::{DateTime, Utc};
use issue_taxonomy::IssueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One reported occurrence of an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "issueID")]
    issue_id: Uuid,
    issue_type: IssueType,
    severity: Severity,
    service: Service,
    time_stamp: DateTime<Utc>,
    cause_issue: Option<Box<Issue>>,
    details: Option<String>,
    /// Request or message id
    #[serde(rename = "correlationID")]
    correlation_id: Option<Uuid>,
}

impl Issue {
    /// New issue with a fresh random id
    pub fn new(
        issue_type: IssueType,
        severity: Severity,
        service: Service,
        time_stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            issue_id: Uuid::new_v4(),
            issue_type,
            severity,
            service,
            time_stamp,
            cause_issue: None,
            details: None,
            correlation_id: None,
        }
    }

    pub fn with_cause(mut self, cause: Issue) -> Self {
        self.cause_issue = Some(Box::new(cause));
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    pub fn issue_id(&self) -> Uuid {
        self.issue_id
    }

    pub fn issue_type(&self) -> &IssueType {
        &self.issue_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn time_stamp(&self) -> DateTime<Utc> {
        self.time_stamp
    }

    pub fn cause_issue(&self) -> Option<&Issue> {
        self.cause_issue.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn correlation_id(&self) -> Option<Uuid> {
        self.correlation_id
    }

    pub fn to_json(&self) -> IssueManagerResult<String> {
        serde_json::to_string(self)
            .map_err(|source| IssueManagerError::json("Unable to generate JSON string", source))
    }

    pub fn from_json(json: &str) -> IssueManagerResult<Self> {
        serde_json::from_str(json).map_err(|source| {
            IssueManagerError::json("Error occurred while processing JSON", source)
        })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Issue{{issueID={}, issueType={}, severity={}, service={}, timeStamp={}",
            self.issue_id,
            self.issue_type,
            self.severity,
            self.service,
            self.time_stamp.to_rfc3339()
        )?;
        match &self.cause_issue {
            Some(cause) => write!(f, ", causeIssue={}", cause)?,
            None => write!(f, ", causeIssue=null")?,
        }
        match &self.details {
            Some(details) => write!(f, ", details='{}'", details)?,
            None => write!(f, ", details=null")?,
        }
        match &self.correlation_id {
            Some(id) => write!(f, ", correlationID={}}}", id),
            None => write!(f, ", correlationID=null}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use issue_taxonomy::{IssueCategory, IssueName};

    fn issue() -> Issue {
        Issue::new(
            IssueType::new(IssueName::TimeoutIssue, "Too slow", IssueCategory::DependencyIssue),
            Severity::Error,
            Service::new("svc-1", "orders"),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_json_field_names() {
        let json = issue().with_details("upstream").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["issueID"].is_string());
        assert_eq!(value["issueType"]["name"], "TIMEOUT_ISSUE");
        assert_eq!(value["issueType"]["category"], "DEPENDENCY_ISSUE");
        assert_eq!(value["severity"], "ERROR");
        assert_eq!(value["service"]["name"], "orders");
        assert_eq!(value["timeStamp"], "2024-05-01T12:30:00Z");
        assert_eq!(value["details"], "upstream");
        assert!(value["causeIssue"].is_null());
        assert!(value["correlationID"].is_null());
    }

    #[test]
    fn test_json_round_trip_keeps_id_and_cause() {
        let correlation_id = Uuid::new_v4();
        let original = issue()
            .with_cause(issue())
            .with_correlation_id(correlation_id);

        let parsed = Issue::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.correlation_id(), Some(correlation_id));
        assert!(parsed.cause_issue().is_some());
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let json = r#"{
            "issueID": "7f1c0a3e-52a4-4b7e-9d6f-0c2d8a9b1e55",
            "issueType": {"name": "VALIDATION_ISSUE", "description": "d", "category": "INTERNAL_ISSUE"},
            "severity": "ISSUE",
            "service": {"id": "1", "name": "n"},
            "timeStamp": "2024-01-01T00:00:00Z"
        }"#;

        let parsed = Issue::from_json(json).unwrap();
        assert_eq!(parsed.severity(), Severity::Issue);
        assert_eq!(parsed.details(), None);
        assert_eq!(parsed.issue_type().name, IssueName::ValidationIssue);
    }

    #[test]
    fn test_fresh_ids() {
        assert_ne!(issue().issue_id(), issue().issue_id());
    }

    #[test]
    fn test_display() {
        let text = issue().to_string();
        assert!(text.starts_with("Issue{issueID="));
        assert!(text.contains("severity=ERROR"));
        assert!(text.contains("service=Service{id='svc-1', name='orders'}"));
        assert!(text.ends_with("correlationID=null}"));
    }
}
