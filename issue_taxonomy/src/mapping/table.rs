//! Immutable string-keyed mapping tables

use super::error::{MappingError, MappingResult};
use super::properties::parse_properties;
use crate::logging::codes;
use crate::model::IssueName;
use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Which external identifier a table is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Http,
    Exception,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Http => "HTTP",
            TableKind::Exception => "exception",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Toml,
    Properties,
}

impl TableFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(TableFormat::Toml)
        } else if extension.eq_ignore_ascii_case("properties") {
            Some(TableFormat::Properties)
        } else {
            None
        }
    }
}

/// Key to issue-name table. Values are kept verbatim and checked on lookup,
/// so a bad value surfaces as `InvalidIssueName` rather than a missing key.
#[derive(Debug, Clone)]
pub struct MappingTable {
    kind: TableKind,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    /// Build from pairs; iteration and reverse lookup follow the given order
    pub fn from_pairs<K, V>(
        kind: TableKind,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> MappingResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (key, value) in pairs {
            let key = key.into();
            if index.contains_key(&key) {
                let error = MappingError::duplicate_key(kind, &key);
                log_error!(error.error_code(), "Duplicate mapping key",
                    "table" => kind, "key" => key);
                return Err(error);
            }
            index.insert(key.clone(), entries.len());
            entries.push((key, value.into()));
        }

        Ok(Self {
            kind,
            entries,
            index,
        })
    }

    /// Flat TOML table of string values. Entries are ordered by key.
    pub fn from_toml_str(kind: TableKind, text: &str) -> MappingResult<Self> {
        let table: toml::Table = toml::from_str(text).map_err(|e| {
            let error = MappingError::malformed(kind, e.to_string());
            log_error!(error.error_code(), "Failed to parse mapping table", "table" => kind);
            error
        })?;

        let mut pairs: Vec<(String, String)> = Vec::with_capacity(table.len());
        for (key, value) in table {
            match value {
                toml::Value::String(text) => pairs.push((key, text)),
                other => {
                    return Err(MappingError::malformed(
                        kind,
                        format!("value of '{}' must be a string, found {}", key, other.type_str()),
                    ))
                }
            }
        }
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        Self::from_pairs(kind, pairs)
    }

    /// `.properties` document, kept in document order
    pub fn from_properties_str(kind: TableKind, text: &str) -> MappingResult<Self> {
        Self::from_pairs(kind, parse_properties(kind, text)?)
    }

    pub fn parse(kind: TableKind, text: &str, format: TableFormat) -> MappingResult<Self> {
        let table = match format {
            TableFormat::Toml => Self::from_toml_str(kind, text)?,
            TableFormat::Properties => Self::from_properties_str(kind, text)?,
        };
        log_debug!(codes::success::TABLE_LOADED, "Mapping table parsed",
            "table" => kind, "entries" => table.len());
        Ok(table)
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Raw value stored for `key`
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Issue name for `key`; `Ok(None)` when the key is absent
    pub fn resolve(&self, key: &str) -> MappingResult<Option<IssueName>> {
        match self.get_raw(key) {
            None => Ok(None),
            Some(value) => value.parse::<IssueName>().map(Some).map_err(|_| {
                let error = MappingError::invalid_issue_name(self.kind, key, value);
                log_error!(error.error_code(), "Mapping value is not an issue name",
                    "table" => self.kind, "key" => key, "value" => value);
                error
            }),
        }
    }

    /// First key, in table order, whose value is `issue_name`
    pub fn first_key_for(&self, issue_name: IssueName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, value)| value == issue_name.as_str())
            .map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose value is not an issue name
    pub fn invalid_entries(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter(|(_, value)| value.parse::<IssueName>().is_err())
            .collect()
    }

    /// Fail on the first entry whose value is not an issue name
    pub fn validate(&self) -> MappingResult<()> {
        match self.invalid_entries().first() {
            Some((key, value)) => Err(MappingError::invalid_issue_name(self.kind, key, value)),
            None => Ok(()),
        }
    }
}
