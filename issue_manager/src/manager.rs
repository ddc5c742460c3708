//! Issue construction for one service

use crate::error::{IssueManagerError, IssueManagerResult};
use crate::model::{Issue, Service, Severity};
use chrono::{DateTime, Utc};
use issue_taxonomy::logging::codes;
use issue_taxonomy::{log_error, log_success};
use issue_taxonomy::{ErrorDescriptor, IssueClassifier, IssueType};
use uuid::Uuid;

/// Builds `Issue` records stamped with the owning service's identity
#[derive(Debug, Clone)]
pub struct IssueManager {
    classifier: IssueClassifier,
    service: Service,
}

impl IssueManager {
    /// Manager over the bundled classification artifacts
    pub fn new(service_id: &str, service_name: &str) -> IssueManagerResult<Self> {
        let classifier = IssueClassifier::bundled()?;
        Ok(Self::with_classifier(
            Service::new(service_id, service_name),
            classifier,
        ))
    }

    pub fn with_classifier(service: Service, classifier: IssueClassifier) -> Self {
        Self {
            classifier,
            service,
        }
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn classifier(&self) -> &IssueClassifier {
        &self.classifier
    }

    pub fn create_issue(&self, issue_type: IssueType, severity: Severity) -> Issue {
        self.create_issue_at(issue_type, severity, Utc::now())
    }

    pub fn create_issue_at(
        &self,
        issue_type: IssueType,
        severity: Severity,
        time_stamp: DateTime<Utc>,
    ) -> Issue {
        Issue::new(issue_type, severity, self.service.clone(), time_stamp)
    }

    pub fn create_issue_full(
        &self,
        issue_type: IssueType,
        severity: Severity,
        time_stamp: DateTime<Utc>,
        cause_issue: Option<Issue>,
        details: Option<String>,
        correlation_id: Option<Uuid>,
    ) -> Issue {
        let mut issue = self.create_issue_at(issue_type, severity, time_stamp);
        if let Some(cause) = cause_issue {
            issue = issue.with_cause(cause);
        }
        if let Some(details) = details {
            issue = issue.with_details(details);
        }
        if let Some(correlation_id) = correlation_id {
            issue = issue.with_correlation_id(correlation_id);
        }
        issue
    }

    /// Issue for an error value, classified by its exact type. Severity is `ERROR`.
    pub fn create_issue_from_error(&self, error: &dyn ErrorDescriptor) -> IssueManagerResult<Issue> {
        let classification = self.classifier.classify_from_error(error).map_err(|e| {
            log_error!(e.error_code(), "Failed to classify error",
                "type_name" => error.type_name().unwrap_or("<none>"));
            e
        })?;

        let issue = self
            .create_issue(classification.issue_type, Severity::Error)
            .with_details(classification.details);
        log_created(&issue);
        Ok(issue)
    }

    /// Issue for an HTTP status such as `"503"` or `"503 Service Unavailable"`.
    /// Severity is `ERROR`.
    pub fn create_issue_from_http_status(&self, http_status: &str) -> IssueManagerResult<Issue> {
        if http_status.trim().is_empty() {
            return Err(IssueManagerError::invalid_argument(
                "HTTP status cannot be empty",
            ));
        }

        let classification = self.classifier.classify_from_http_with_details(http_status)?;
        let issue = self
            .create_issue(classification.issue_type, Severity::Error)
            .with_details(classification.details);
        log_created(&issue);
        Ok(issue)
    }

    pub fn create_issue_from_json(&self, json: &str) -> IssueManagerResult<Issue> {
        Issue::from_json(json).map_err(|e| {
            log_error!(e.error_code(), "Failed to read issue JSON");
            e
        })
    }
}

fn log_created(issue: &Issue) {
    log_success!(codes::success::ISSUE_CREATED, "Issue created",
        "issue_id" => issue.issue_id(),
        "issue_name" => issue.issue_type().name,
        "service" => issue.service().id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use issue_taxonomy::{ClassificationError, ErrorInfo, IssueCategory, IssueName};

    fn manager() -> IssueManager {
        IssueManager::new("svc-42", "billing").unwrap()
    }

    #[test]
    fn test_create_issue_stamps_service() {
        let manager = manager();
        let issue_type = IssueType::new(IssueName::CodeIssue, "bug", IssueCategory::InternalIssue);
        let issue = manager.create_issue(issue_type.clone(), Severity::Failure);

        assert_eq!(issue.service(), &Service::new("svc-42", "billing"));
        assert_eq!(issue.issue_type(), &issue_type);
        assert_eq!(issue.severity(), Severity::Failure);
        assert_eq!(issue.details(), None);
    }

    #[test]
    fn test_create_issue_full() {
        let manager = manager();
        let issue_type = IssueType::new(IssueName::CodeIssue, "bug", IssueCategory::InternalIssue);
        let time_stamp = Utc.with_ymd_and_hms(2023, 3, 4, 5, 6, 7).unwrap();
        let cause = manager.create_issue(issue_type.clone(), Severity::Issue);
        let correlation_id = Uuid::new_v4();

        let issue = manager.create_issue_full(
            issue_type,
            Severity::Error,
            time_stamp,
            Some(cause.clone()),
            Some("note".to_string()),
            Some(correlation_id),
        );

        assert_eq!(issue.time_stamp(), time_stamp);
        assert_eq!(issue.cause_issue(), Some(&cause));
        assert_eq!(issue.details(), Some("note"));
        assert_eq!(issue.correlation_id(), Some(correlation_id));
    }

    #[test]
    fn test_create_issue_from_http_status() {
        let issue = manager()
            .create_issue_from_http_status("400 Bad Request")
            .unwrap();

        assert_eq!(issue.issue_type().name, IssueName::ValidationIssue);
        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(issue.details(), Some("Caused by HTTP Error: 400 Bad Request"));
    }

    #[test]
    fn test_empty_http_status_is_invalid() {
        assert_matches!(
            manager().create_issue_from_http_status(""),
            Err(IssueManagerError::InvalidArgument { .. })
        );
    }

    #[test]
    fn test_create_issue_from_error() {
        let error = ErrorInfo::new("java.lang.IllegalArgumentException").with_message("bad");
        let issue = manager().create_issue_from_error(&error).unwrap();

        assert_eq!(issue.issue_type().name, IssueName::ValidationIssue);
        assert_eq!(issue.severity(), Severity::Error);
        assert!(issue
            .details()
            .unwrap()
            .starts_with("Caused by java.lang.IllegalArgumentException\nException message: bad"));
    }

    #[test]
    fn test_create_issue_from_error_failures() {
        let manager = manager();

        assert_matches!(
            manager.create_issue_from_error(&ErrorInfo::absent()),
            Err(IssueManagerError::Classification(ClassificationError::InvalidArgument { .. }))
        );
        assert_matches!(
            manager.create_issue_from_error(&ErrorInfo::new("com.acme.Unknown")),
            Err(IssueManagerError::Classification(
                ClassificationError::UnmappedExceptionType { .. }
            ))
        );
    }

    #[test]
    fn test_create_issue_from_json() {
        let manager = manager();
        let issue = manager.create_issue_from_http_status("503").unwrap();

        let parsed = manager.create_issue_from_json(&issue.to_json().unwrap()).unwrap();
        assert_eq!(parsed, issue);

        let error = manager.create_issue_from_json("{not json").unwrap_err();
        assert_matches!(error, IssueManagerError::Json { .. });
        assert_eq!(error.error_code(), codes::issue::JSON_FAILURE);
    }
}
