//! Taxonomy store
//!
//! Holds the `category -> issue name -> description` document as a flat list of
//! entries in document order. Lookups scan the list and return the first match,
//! so a name listed twice resolves to its first occurrence.

use super::error::{TaxonomyError, TaxonomyResult};
use crate::logging::codes;
use crate::model::{IssueCategory, IssueName, IssueType};
use crate::{log_debug, log_error};
use serde_yaml::Value;
use std::path::Path;

const DESCRIPTION_KEY: &str = "Description";

/// One issue name inside its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub category: IssueCategory,
    pub name: IssueName,
    /// `None` when the document carries no `Description` for the entry
    pub description: Option<String>,
}

impl TaxonomyEntry {
    pub fn new(category: IssueCategory, name: IssueName, description: Option<String>) -> Self {
        Self {
            category,
            name,
            description,
        }
    }
}

/// Immutable taxonomy built once from a document
#[derive(Debug, Clone, Default)]
pub struct TaxonomyStore {
    entries: Vec<TaxonomyEntry>,
    categories: Vec<IssueCategory>,
}

impl TaxonomyStore {
    /// Build from already-parsed entries. Categories are taken in first-seen order.
    pub fn from_entries(entries: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        let entries: Vec<TaxonomyEntry> = entries.into_iter().collect();
        let mut categories = Vec::new();
        for entry in &entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        Self {
            entries,
            categories,
        }
    }

    /// Parse a YAML taxonomy document
    pub fn from_yaml_str(text: &str) -> TaxonomyResult<Self> {
        let document: Value = serde_yaml::from_str(text).map_err(|e| {
            let error = TaxonomyError::malformed(e.to_string());
            log_error!(error.error_code(), "Failed to parse taxonomy document",
                "error" => e);
            error
        })?;

        let store = Self::from_value(&document).map_err(|error| {
            log_error!(error.error_code(), &error.to_string());
            error
        })?;

        log_debug!(codes::success::TAXONOMY_LOADED, "Taxonomy parsed",
            "entries" => store.entries.len(),
            "categories" => store.categories.len());

        Ok(store)
    }

    /// Read and parse a YAML taxonomy file. Read failures are `SourceUnavailable`.
    pub fn from_path(path: &Path) -> TaxonomyResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            let error = TaxonomyError::source_unavailable(&path.display().to_string(), e.to_string());
            log_error!(error.error_code(), "Taxonomy source unavailable",
                "path" => path.display());
            error
        })?;
        Self::from_yaml_str(&text)
    }

    fn from_value(document: &Value) -> TaxonomyResult<Self> {
        let top = match document {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => return Err(TaxonomyError::malformed("top level must be a mapping of categories")),
        };

        let mut entries = Vec::new();
        let mut categories = Vec::new();

        for (category_key, issues) in top {
            let category_text = key_text(category_key)?;
            let category = IssueCategory::parse_ignore_case(category_text)
                .map_err(|_| TaxonomyError::unknown_category(category_text))?;
            if !categories.contains(&category) {
                categories.push(category);
            }

            let issues = match issues {
                Value::Null => continue,
                Value::Mapping(mapping) => mapping,
                _ => {
                    return Err(TaxonomyError::malformed(format!(
                        "category '{}' must map issue names to entries",
                        category_text
                    )))
                }
            };

            for (name_key, body) in issues {
                let name_text = key_text(name_key)?;
                let name = IssueName::parse_ignore_case(name_text)
                    .map_err(|_| TaxonomyError::unknown_issue_name(category_text, name_text))?;
                let description = description_of_body(name_text, body)?;
                entries.push(TaxonomyEntry::new(category, name, description));
            }
        }

        Ok(Self {
            entries,
            categories,
        })
    }

    fn find(&self, issue_name: IssueName) -> TaxonomyResult<&TaxonomyEntry> {
        self.entry(issue_name).ok_or_else(|| {
            let error = TaxonomyError::not_found(issue_name);
            log_error!(error.error_code(), "Issue name missing from taxonomy",
                "issue_name" => issue_name);
            error
        })
    }

    /// First entry for `issue_name` in document order
    pub fn entry(&self, issue_name: IssueName) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|entry| entry.name == issue_name)
    }

    /// Description of `issue_name`. An entry without description yields `""`.
    pub fn description_of(&self, issue_name: IssueName) -> TaxonomyResult<&str> {
        self.find(issue_name)
            .map(|entry| entry.description.as_deref().unwrap_or(""))
    }

    /// Category enclosing `issue_name`
    pub fn category_of(&self, issue_name: IssueName) -> TaxonomyResult<IssueCategory> {
        self.find(issue_name).map(|entry| entry.category)
    }

    /// Description lookup from the raw textual name
    pub fn description_of_str(&self, raw: &str) -> TaxonomyResult<&str> {
        self.description_of(parse_raw_name(raw)?)
    }

    /// Category lookup from the raw textual name
    pub fn category_of_str(&self, raw: &str) -> TaxonomyResult<IssueCategory> {
        self.category_of(parse_raw_name(raw)?)
    }

    /// Complete `IssueType` for `issue_name`
    pub fn issue_type(&self, issue_name: IssueName) -> TaxonomyResult<IssueType> {
        let entry = self.find(issue_name)?;
        Ok(IssueType::new(
            entry.name,
            entry.description.clone().unwrap_or_default(),
            entry.category,
        ))
    }

    /// How many times `issue_name` appears across all categories
    pub fn occurrences(&self, issue_name: IssueName) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.name == issue_name)
            .count()
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Categories in document order, including empty ones
    pub fn categories(&self) -> &[IssueCategory] {
        &self.categories
    }

    pub fn entries_in(&self, category: IssueCategory) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key_text(key: &Value) -> TaxonomyResult<&str> {
    key.as_str()
        .ok_or_else(|| TaxonomyError::malformed(format!("non-string key {:?}", key)))
}

fn description_of_body(name_text: &str, body: &Value) -> TaxonomyResult<Option<String>> {
    let mapping = match body {
        Value::Null => return Ok(None),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(TaxonomyError::malformed(format!(
                "entry '{}' must be a mapping",
                name_text
            )))
        }
    };

    let description = mapping
        .iter()
        .find(|(key, _)| {
            key.as_str()
                .map(|k| k.eq_ignore_ascii_case(DESCRIPTION_KEY))
                .unwrap_or(false)
        })
        .map(|(_, value)| value);

    match description {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(TaxonomyError::malformed(format!(
            "description of '{}' must be a string",
            name_text
        ))),
    }
}

fn parse_raw_name(raw: &str) -> TaxonomyResult<IssueName> {
    if raw.trim().is_empty() {
        return Err(TaxonomyError::invalid_argument("issue name must not be empty"));
    }
    IssueName::parse_ignore_case(raw).map_err(|_| {
        TaxonomyError::invalid_argument(format!("'{}' is not a known issue name", raw.trim()))
    })
}
