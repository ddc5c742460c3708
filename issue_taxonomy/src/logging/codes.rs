//! Log codes and their metadata
//!
//! Every code the classifier emits is declared here together with the
//! behavioral metadata that error types and log events report.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Short stable identifier attached to log events and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Registry entry, `None` for uncoded events
    pub fn metadata(&self) -> Option<&'static CodeMetadata> {
        get_code_metadata(self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    /// Caller can continue after the condition
    pub recoverable: bool,
    /// Condition must abort classifier construction
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

/// System codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("SYS001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("SYS002");
    pub const CONFIGURATION_ERROR: Code = Code::new("SYS003");
}

/// Artifact loading codes
pub mod loading {
    use super::Code;

    pub const ARTIFACT_NOT_FOUND: Code = Code::new("L001");
    pub const PERMISSION_DENIED: Code = Code::new("L002");
    pub const ARTIFACT_TOO_LARGE: Code = Code::new("L003");
    pub const INVALID_ENCODING: Code = Code::new("L004");
    pub const IO_ERROR: Code = Code::new("L005");
    pub const UNSUPPORTED_FORMAT: Code = Code::new("L006");
    pub const TOO_MANY_ENTRIES: Code = Code::new("L007");
    pub const NON_CONFORMANT: Code = Code::new("L008");
}

/// Taxonomy store codes
pub mod taxonomy {
    use super::Code;

    pub const MALFORMED_DOCUMENT: Code = Code::new("T001");
    pub const UNKNOWN_CATEGORY: Code = Code::new("T002");
    pub const UNKNOWN_ISSUE_NAME: Code = Code::new("T003");
    pub const ENTRY_NOT_FOUND: Code = Code::new("T004");
    pub const SOURCE_UNAVAILABLE: Code = Code::new("T005");
    pub const INVALID_ARGUMENT: Code = Code::new("T006");
}

/// Mapping resolver codes
pub mod mapping {
    use super::Code;

    pub const MALFORMED_TABLE: Code = Code::new("M001");
    pub const DUPLICATE_KEY: Code = Code::new("M002");
    pub const INVALID_ISSUE_NAME: Code = Code::new("M003");
    pub const INVALID_ARGUMENT: Code = Code::new("M004");

    // Non-error outcomes worth tracing
    pub const FALLBACK_TO_UNSPECIFIED: Code = Code::new("M010");
    pub const REVERSE_LOOKUP_MISS: Code = Code::new("M011");
}

/// Classifier codes
pub mod classification {
    use super::Code;

    pub const INVALID_ARGUMENT: Code = Code::new("C001");
    pub const CONFIGURATION_INCONSISTENCY: Code = Code::new("C002");
    pub const UNMAPPED_EXCEPTION_TYPE: Code = Code::new("C003");
    pub const MAPPING_FAILURE: Code = Code::new("C004");
}

/// Issue record codes
pub mod issue {
    use super::Code;

    pub const INVALID_ARGUMENT: Code = Code::new("R001");
    pub const JSON_FAILURE: Code = Code::new("R002");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const RESOURCES_LOADED: Code = Code::new("I001");
    pub const TAXONOMY_LOADED: Code = Code::new("I002");
    pub const TABLE_LOADED: Code = Code::new("I003");
    pub const CLASSIFICATION_COMPLETED: Code = Code::new("I004");
    pub const LOGGING_INITIALIZED: Code = Code::new("I005");
    pub const CONFORMANCE_PASSED: Code = Code::new("I006");
    pub const ISSUE_CREATED: Code = Code::new("I007");
}

/// Placeholder codes for events logged without one
pub mod uncoded {
    use super::Code;

    pub const INFO: Code = Code::new("I000");
    pub const WARNING: Code = Code::new("W000");
    pub const DEBUG: Code = Code::new("D000");
}

const fn meta(
    code: &'static str,
    category: &'static str,
    severity: Severity,
    recoverable: bool,
    requires_halt: bool,
    description: &'static str,
    recommended_action: &'static str,
) -> CodeMetadata {
    CodeMetadata {
        code,
        category,
        severity,
        recoverable,
        requires_halt,
        description,
        recommended_action,
    }
}

use Severity::{Critical, High, Low, Medium};

#[rustfmt::skip]
const METADATA: &[CodeMetadata] = &[
    // System
    meta("SYS001", "System", Critical, false, true,
        "Internal classifier error",
        "Report this as a bug"),
    meta("SYS002", "System", Critical, false, true,
        "Component initialization failed",
        "Check the startup configuration and artifacts"),
    meta("SYS003", "System", High, false, true,
        "Runtime configuration could not be read",
        "Fix the configuration file or environment overrides"),

    // Loading
    meta("L001", "Loading", Critical, false, true,
        "Configuration artifact not found",
        "Ship the artifact or point the resource directory at it"),
    meta("L002", "Loading", Critical, false, true,
        "Permission denied reading configuration artifact",
        "Grant read access to the artifact"),
    meta("L003", "Loading", Critical, false, true,
        "Configuration artifact exceeds the size limit",
        "Reduce the artifact or raise the compile-time limit"),
    meta("L004", "Loading", Critical, false, true,
        "Configuration artifact is not valid UTF-8",
        "Re-encode the artifact as UTF-8"),
    meta("L005", "Loading", Critical, false, true,
        "I/O error reading configuration artifact",
        "Check the filesystem and retry startup"),
    meta("L006", "Loading", Critical, false, true,
        "Unsupported mapping table format",
        "Use a .toml or .properties mapping table"),
    meta("L007", "Loading", Critical, false, true,
        "Mapping table has too many entries",
        "Split or prune the mapping table"),
    meta("L008", "Loading", Critical, false, true,
        "Artifacts failed the conformance check",
        "Run `issuectl check` and fix the reported entries"),

    // Taxonomy
    meta("T001", "Taxonomy", Critical, false, true,
        "Taxonomy document is malformed",
        "Use the shape CATEGORY: { ISSUE_NAME: { Description: text } }"),
    meta("T002", "Taxonomy", Critical, false, true,
        "Taxonomy document uses an unknown category",
        "Use one of INTERNAL_ISSUE, DEPENDENCY_ISSUE, UNSPECIFIED"),
    meta("T003", "Taxonomy", High, false, true,
        "Unknown issue name",
        "Add the issue name to the enumeration or fix its spelling"),
    meta("T004", "Taxonomy", High, false, false,
        "Issue name has no taxonomy entry",
        "Add the issue name under one category of the taxonomy document"),
    meta("T005", "Taxonomy", Critical, false, true,
        "Taxonomy source unavailable",
        "Check that the taxonomy document exists and is readable"),
    meta("T006", "Taxonomy", Medium, false, false,
        "Invalid argument passed to taxonomy lookup",
        "Pass a non-empty issue name"),

    // Mapping
    meta("M001", "Mapping", Critical, false, true,
        "Mapping table is malformed",
        "Use flat string key/value pairs"),
    meta("M002", "Mapping", Critical, false, true,
        "Duplicate key in mapping table",
        "Keep one entry per key"),
    meta("M003", "Mapping", High, false, false,
        "Mapping table value is not a known issue name",
        "Fix the value to match the canonical issue name"),
    meta("M004", "Mapping", Medium, false, false,
        "Invalid argument passed to mapping lookup",
        "Pass a non-empty lookup key"),
    meta("M010", "Mapping", Low, true, false,
        "No rule for key, classified as UNSPECIFIED_ISSUE",
        "Add a mapping entry if this key should be classified"),
    meta("M011", "Mapping", Low, true, false,
        "No key maps to the requested issue name",
        "No action required"),

    // Classification
    meta("C001", "Classification", Medium, false, false,
        "Invalid argument passed to classifier",
        "Fix the caller"),
    meta("C002", "Classification", Critical, false, true,
        "Resolved issue name has no taxonomy entry",
        "Bring the mapping tables and taxonomy document back in line"),
    meta("C003", "Classification", Medium, true, false,
        "No mapping registered for exception type",
        "Register the exception type in the exception mapping table"),
    meta("C004", "Classification", High, false, false,
        "Mapping lookup failed during classification",
        "Fix the offending mapping table entry"),

    // Issue
    meta("R001", "Issue", Medium, true, false,
        "Invalid argument passed to issue construction",
        "Fix the caller"),
    meta("R002", "Issue", Medium, true, false,
        "Issue record could not be converted to or from JSON",
        "Check the JSON document against the issue schema"),

    // Success
    meta("I001", "Success", Low, true, false,
        "Classifier resources loaded",
        "Classifier ready"),
    meta("I002", "Success", Low, true, false,
        "Taxonomy document parsed",
        "Taxonomy ready for lookups"),
    meta("I003", "Success", Low, true, false,
        "Mapping table parsed",
        "Table ready for lookups"),
    meta("I004", "Success", Low, true, false,
        "Classification completed",
        "No action required"),
    meta("I005", "Success", Low, true, false,
        "Logging system initialized",
        "No action required"),
    meta("I006", "Success", Low, true, false,
        "Artifacts passed the conformance check",
        "No action required"),
    meta("I007", "Success", Low, true, false,
        "Issue record created",
        "No action required"),
];

static REGISTRY: OnceLock<HashMap<&'static str, &'static CodeMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, &'static CodeMetadata> {
    REGISTRY.get_or_init(|| METADATA.iter().map(|entry| (entry.code, entry)).collect())
}

pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    registry().get(code).copied()
}

/// Severity of a code, `Medium` when unregistered
pub fn get_severity(code: &str) -> Severity {
    get_code_metadata(code).map_or(Severity::Medium, |m| m.severity)
}

pub fn is_recoverable(code: &str) -> bool {
    get_code_metadata(code).map_or(true, |m| m.recoverable)
}

pub fn requires_halt(code: &str) -> bool {
    get_code_metadata(code).map_or(false, |m| m.requires_halt)
}

pub fn get_description(code: &str) -> &'static str {
    get_code_metadata(code).map_or("Unknown code", |m| m.description)
}

pub fn get_action(code: &str) -> &'static str {
    get_code_metadata(code).map_or("No specific action available", |m| m.recommended_action)
}

pub fn get_category(code: &str) -> &'static str {
    get_code_metadata(code).map_or("Unknown", |m| m.category)
}
