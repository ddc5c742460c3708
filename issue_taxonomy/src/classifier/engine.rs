//! Issue classifier
//!
//! Composes the mapping resolver and the taxonomy store: an identifier is first
//! resolved to an issue name, then the taxonomy supplies its description and
//! category. A resolved name without a taxonomy entry is a configuration error.

use super::descriptor::{render_details, ErrorDescriptor};
use super::error::{ClassificationError, ClassificationResult};
use crate::loader::{self, LoadResult};
use crate::logging::codes;
use crate::mapping::{MappingError, MappingResolver};
use crate::model::{IssueName, IssueType};
use crate::taxonomy::TaxonomyStore;
use crate::{log_debug, log_error, log_warning};

/// Classification plus the detail text describing its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub issue_type: IssueType,
    pub details: String,
}

#[derive(Debug, Clone)]
pub struct IssueClassifier {
    taxonomy: TaxonomyStore,
    resolver: MappingResolver,
}

impl IssueClassifier {
    pub fn new(taxonomy: TaxonomyStore, resolver: MappingResolver) -> Self {
        Self { taxonomy, resolver }
    }

    /// Classifier over the artifacts compiled into the library
    pub fn bundled() -> LoadResult<Self> {
        loader::load_bundled()
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        &self.taxonomy
    }

    pub fn resolver(&self) -> &MappingResolver {
        &self.resolver
    }

    /// Classify an HTTP status. Accepts `"404"` or `"404 Not Found"`.
    pub fn classify_from_http(&self, status: &str) -> ClassificationResult<IssueType> {
        let key = status_key(status)?;
        let issue_name = self
            .resolver
            .issue_name_from_http(key)
            .map_err(mapping_failure)?;
        self.finish(issue_name, "http", key)
    }

    /// HTTP classification with `Caused by HTTP Error: <status>` details
    pub fn classify_from_http_with_details(
        &self,
        status: &str,
    ) -> ClassificationResult<Classification> {
        let issue_type = self.classify_from_http(status)?;
        Ok(Classification {
            issue_type,
            details: format!("Caused by HTTP Error: {}", status),
        })
    }

    /// Classify an exception identifier, falling back to `UNSPECIFIED_ISSUE`
    pub fn classify_from_exception(&self, exception_key: &str) -> ClassificationResult<IssueType> {
        let issue_name = self
            .resolver
            .issue_name_from_exception(exception_key)
            .map_err(mapping_failure)?;
        self.finish(issue_name, "exception", exception_key)
    }

    /// Classify an error by its exact type identifier. Unmapped types are an error.
    pub fn classify_from_error(
        &self,
        error: &dyn ErrorDescriptor,
    ) -> ClassificationResult<Classification> {
        let type_name = match error.type_name().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ClassificationError::invalid_argument(
                    "error must carry a type identifier",
                ))
            }
        };

        let issue_name = match self
            .resolver
            .find_issue_name_for_exception(type_name)
            .map_err(mapping_failure)?
        {
            Some(issue_name) => issue_name,
            None => {
                log_warning!(codes::classification::UNMAPPED_EXCEPTION_TYPE,
                    "No mapping for exception type", "type_name" => type_name);
                return Err(ClassificationError::unmapped_exception_type(type_name));
            }
        };

        let issue_type = self.finish(issue_name, "error", type_name)?;
        Ok(Classification {
            issue_type,
            details: render_details(error),
        })
    }

    /// Complete `IssueType` for a resolved issue name
    pub fn issue_type_for(&self, issue_name: IssueName) -> ClassificationResult<IssueType> {
        self.taxonomy.issue_type(issue_name).map_err(|source| {
            log_error!(codes::classification::CONFIGURATION_INCONSISTENCY,
                "Resolved issue name has no taxonomy entry", "issue_name" => issue_name);
            ClassificationError::configuration(issue_name, source)
        })
    }

    fn finish(&self, issue_name: IssueName, source: &str, key: &str) -> ClassificationResult<IssueType> {
        let issue_type = self.issue_type_for(issue_name)?;
        log_debug!(codes::success::CLASSIFICATION_COMPLETED, "Classified",
            "source" => source, "key" => key, "issue_name" => issue_name);
        Ok(issue_type)
    }
}

fn status_key(status: &str) -> ClassificationResult<&str> {
    status
        .split_whitespace()
        .next()
        .ok_or_else(|| ClassificationError::invalid_argument("HTTP status must not be empty"))
}

fn mapping_failure(error: MappingError) -> ClassificationError {
    if !matches!(error, MappingError::InvalidArgument { .. }) {
        log_error!(codes::classification::MAPPING_FAILURE, &error.to_string());
    }
    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::descriptor::ErrorInfo;
    use crate::mapping::{MappingTable, TableKind};
    use crate::model::IssueCategory;
    use assert_matches::assert_matches;

    const VALIDATION_DESCRIPTION: &str =
        "Issues related to input validation or constraints not being met within the microservice.";

    fn classifier() -> IssueClassifier {
        let taxonomy = TaxonomyStore::from_yaml_str(&format!(
            "INTERNAL_ISSUE:\n  VALIDATION_ISSUE:\n    Description: \"{}\"\nUNSPECIFIED:\n  UNSPECIFIED_ISSUE:\n    Description: \"Unknown\"\n",
            VALIDATION_DESCRIPTION
        ))
        .unwrap();
        let http = MappingTable::from_pairs(
            TableKind::Http,
            vec![("400", "VALIDATION_ISSUE"), ("504", "TIMEOUT_ISSUE")],
        )
        .unwrap();
        let exception = MappingTable::from_pairs(
            TableKind::Exception,
            vec![("java.lang.IllegalArgumentException", "VALIDATION_ISSUE")],
        )
        .unwrap();
        IssueClassifier::new(taxonomy, MappingResolver::new(http, exception))
    }

    fn validation() -> IssueType {
        IssueType::new(
            IssueName::ValidationIssue,
            VALIDATION_DESCRIPTION,
            IssueCategory::InternalIssue,
        )
    }

    #[test]
    fn test_classify_from_http() {
        let classifier = classifier();

        assert_eq!(classifier.classify_from_http("400").unwrap(), validation());
        assert_eq!(
            classifier.classify_from_http("400 Bad Request").unwrap(),
            validation()
        );
        assert_eq!(
            classifier.classify_from_http("999").unwrap().name,
            IssueName::UnspecifiedIssue
        );
    }

    #[test]
    fn test_classify_from_http_with_details() {
        let classification = classifier()
            .classify_from_http_with_details("400 Bad Request")
            .unwrap();

        assert_eq!(classification.issue_type, validation());
        assert_eq!(classification.details, "Caused by HTTP Error: 400 Bad Request");
    }

    #[test]
    fn test_empty_inputs_are_invalid() {
        let classifier = classifier();

        assert_matches!(
            classifier.classify_from_http(" "),
            Err(ClassificationError::InvalidArgument { .. })
        );
        assert_matches!(
            classifier.classify_from_exception(""),
            Err(ClassificationError::InvalidArgument { .. })
        );
        assert_matches!(
            classifier.classify_from_error(&ErrorInfo::absent()),
            Err(ClassificationError::InvalidArgument { .. })
        );
    }

    #[test]
    fn test_missing_taxonomy_entry_is_configuration_error() {
        assert_matches!(
            classifier().classify_from_http("504"),
            Err(ClassificationError::Configuration { issue_name: IssueName::TimeoutIssue, .. })
        );
    }

    #[test]
    fn test_classify_from_exception() {
        let classifier = classifier();

        assert_eq!(
            classifier
                .classify_from_exception("java.lang.IllegalArgumentException")
                .unwrap(),
            validation()
        );
        assert_eq!(
            classifier
                .classify_from_exception("java.lang.Exception")
                .unwrap()
                .name,
            IssueName::UnspecifiedIssue
        );
    }

    #[test]
    fn test_classify_from_error() {
        let error = ErrorInfo::new("java.lang.IllegalArgumentException").with_message("age < 0");
        let classification = classifier().classify_from_error(&error).unwrap();

        assert_eq!(classification.issue_type, validation());
        assert_eq!(
            classification.details,
            "Caused by java.lang.IllegalArgumentException\nException message: age < 0\nStack trace: []"
        );
    }

    #[test]
    fn test_unmapped_error_type_has_no_fallback() {
        let error = ErrorInfo::new("java.lang.RuntimeException");
        assert_matches!(
            classifier().classify_from_error(&error),
            Err(ClassificationError::UnmappedExceptionType { type_name }) if type_name == "java.lang.RuntimeException"
        );
    }
}
