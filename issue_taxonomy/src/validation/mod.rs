//! Conformance check of the three artifacts against the closed enumerations

use crate::logging::codes;
use crate::mapping::{MappingResolver, MappingTable};
use crate::model::{IssueCategory, IssueName};
use crate::taxonomy::TaxonomyStore;
use crate::{log_success, log_warning};
use serde::Serialize;
use std::fmt;

/// Table entry whose value is not an issue name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    /// Issue names with no taxonomy entry
    pub missing_names: Vec<IssueName>,
    /// Issue names listed more than once in the taxonomy
    pub duplicated_names: Vec<IssueName>,
    /// Categories absent from the taxonomy document
    pub missing_categories: Vec<IssueCategory>,
    /// Categories present but holding no issue names
    pub empty_categories: Vec<IssueCategory>,
    pub invalid_http_entries: Vec<InvalidEntry>,
    pub invalid_exception_entries: Vec<InvalidEntry>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.missing_names.is_empty()
            && self.duplicated_names.is_empty()
            && self.missing_categories.is_empty()
            && self.empty_categories.is_empty()
            && self.invalid_http_entries.is_empty()
            && self.invalid_exception_entries.is_empty()
    }

    /// Total number of reported problems
    pub fn problem_count(&self) -> usize {
        self.missing_names.len()
            + self.duplicated_names.len()
            + self.missing_categories.len()
            + self.empty_categories.len()
            + self.invalid_http_entries.len()
            + self.invalid_exception_entries.len()
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, title: &str, items: &[T]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    for item in items {
        writeln!(f, "  - {}", item)?;
    }
    Ok(())
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conformant() {
            return writeln!(f, "Artifacts are conformant");
        }
        writeln!(f, "Artifacts are not conformant ({} problems)", self.problem_count())?;
        write_list(f, "Issue names missing from taxonomy", &self.missing_names)?;
        write_list(f, "Issue names listed more than once", &self.duplicated_names)?;
        write_list(f, "Categories missing from taxonomy", &self.missing_categories)?;
        write_list(f, "Empty categories", &self.empty_categories)?;
        write_list(f, "Invalid HTTP table entries", &self.invalid_http_entries)?;
        write_list(f, "Invalid exception table entries", &self.invalid_exception_entries)
    }
}

fn invalid_entries(table: &MappingTable) -> Vec<InvalidEntry> {
    table
        .invalid_entries()
        .into_iter()
        .map(|(key, value)| InvalidEntry {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Cross-check taxonomy and tables
pub fn check_conformance(taxonomy: &TaxonomyStore, resolver: &MappingResolver) -> ConformanceReport {
    let mut report = ConformanceReport::default();

    for name in IssueName::ALL {
        match taxonomy.occurrences(name) {
            0 => report.missing_names.push(name),
            1 => {}
            _ => report.duplicated_names.push(name),
        }
    }

    for category in IssueCategory::ALL {
        if !taxonomy.categories().contains(&category) {
            report.missing_categories.push(category);
        } else if taxonomy.entries_in(category).next().is_none() {
            report.empty_categories.push(category);
        }
    }

    report.invalid_http_entries = invalid_entries(resolver.http_table());
    report.invalid_exception_entries = invalid_entries(resolver.exception_table());

    if report.is_conformant() {
        log_success!(codes::success::CONFORMANCE_PASSED, "Artifacts passed conformance check");
    } else {
        log_warning!(codes::loading::NON_CONFORMANT, "Artifacts failed conformance check",
            "problems" => report.problem_count());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::bundled;
    use crate::mapping::TableKind;

    fn resolver(http: Vec<(&str, &str)>) -> MappingResolver {
        MappingResolver::new(
            MappingTable::from_pairs(TableKind::Http, http).unwrap(),
            MappingTable::from_pairs(TableKind::Exception, Vec::<(&str, &str)>::new()).unwrap(),
        )
    }

    #[test]
    fn test_bundled_artifacts_conform() {
        let taxonomy = TaxonomyStore::from_yaml_str(bundled::TAXONOMY).unwrap();
        let resolver = MappingResolver::new(
            MappingTable::from_toml_str(TableKind::Http, bundled::HTTP_TABLE).unwrap(),
            MappingTable::from_toml_str(TableKind::Exception, bundled::EXCEPTION_TABLE).unwrap(),
        );

        let report = check_conformance(&taxonomy, &resolver);
        assert!(report.is_conformant(), "{}", report);
        assert_eq!(report.problem_count(), 0);
    }

    #[test]
    fn test_report_lists_every_problem() {
        let taxonomy = TaxonomyStore::from_yaml_str(
            "INTERNAL_ISSUE:\n  VALIDATION_ISSUE: {}\n  validation_issue: {}\nUNSPECIFIED:\n",
        )
        .unwrap();
        let report = check_conformance(
            &taxonomy,
            &resolver(vec![("400", "VALIDATION_ISSUE"), ("418", "TEAPOT_ISSUE")]),
        );

        assert!(!report.is_conformant());
        assert_eq!(report.duplicated_names, vec![IssueName::ValidationIssue]);
        assert_eq!(report.missing_names.len(), IssueName::ALL.len() - 1);
        assert_eq!(report.missing_categories, vec![IssueCategory::DependencyIssue]);
        assert_eq!(report.empty_categories, vec![IssueCategory::Unspecified]);
        assert_eq!(
            report.invalid_http_entries,
            vec![InvalidEntry {
                key: "418".to_string(),
                value: "TEAPOT_ISSUE".to_string()
            }]
        );
        assert!(report.invalid_exception_entries.is_empty());

        let text = report.to_string();
        assert!(text.contains("not conformant"));
        assert!(text.contains("418 = TEAPOT_ISSUE"));
    }
}
