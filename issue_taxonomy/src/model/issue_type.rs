use super::{IssueCategory, IssueName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved classification triple. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueType {
    pub name: IssueName,
    pub description: String,
    pub category: IssueCategory,
}

impl IssueType {
    pub fn new(name: IssueName, description: impl Into<String>, category: IssueCategory) -> Self {
        Self {
            name,
            description: description.into(),
            category,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.name.is_unspecified()
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IssueType{{name={}, description='{}', category={}}}",
            self.name, self.description, self.category
        )
    }
}
