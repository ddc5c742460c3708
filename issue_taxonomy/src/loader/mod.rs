//! Resource loading
//!
//! Reads the taxonomy document and both mapping tables once at startup and
//! assembles an `IssueClassifier`. Every failure here is fatal to construction.

pub mod error;

pub use error::{LoadError, LoadResult};

use crate::classifier::IssueClassifier;
use crate::config::constants::bundled;
use crate::config::constants::compile_time::resources::{MAX_ARTIFACT_SIZE, MAX_TABLE_ENTRIES};
use crate::config::runtime::ResourcePreferences;
use crate::logging::codes;
use crate::mapping::{MappingResolver, MappingTable, TableFormat, TableKind};
use crate::taxonomy::TaxonomyStore;
use crate::validation::check_conformance;
use crate::{log_error, log_info, log_success};
use std::fs;
use std::path::Path;

/// Artifact texts ready for parsing
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSources<'a> {
    pub taxonomy: &'a str,
    pub http_table: &'a str,
    pub http_format: TableFormat,
    pub exception_table: &'a str,
    pub exception_format: TableFormat,
}

impl ArtifactSources<'static> {
    /// The artifacts compiled into the library
    pub fn bundled() -> Self {
        Self {
            taxonomy: bundled::TAXONOMY,
            http_table: bundled::HTTP_TABLE,
            http_format: TableFormat::Toml,
            exception_table: bundled::EXCEPTION_TABLE,
            exception_format: TableFormat::Toml,
        }
    }
}

/// Parse artifacts and assemble a classifier. With `strict` the conformance
/// report must be clean.
pub fn build_classifier(sources: &ArtifactSources<'_>, strict: bool) -> LoadResult<IssueClassifier> {
    let taxonomy = TaxonomyStore::from_yaml_str(sources.taxonomy)?;
    check_entry_count("taxonomy", taxonomy.len())?;

    let http = MappingTable::parse(TableKind::Http, sources.http_table, sources.http_format)?;
    check_entry_count("HTTP mapping table", http.len())?;

    let exception = MappingTable::parse(
        TableKind::Exception,
        sources.exception_table,
        sources.exception_format,
    )?;
    check_entry_count("exception mapping table", exception.len())?;

    let resolver = MappingResolver::new(http, exception);

    if strict {
        let report = check_conformance(&taxonomy, &resolver);
        if !report.is_conformant() {
            let error = LoadError::non_conformant(report);
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }
    }

    log_success!(codes::success::RESOURCES_LOADED, "Classifier resources loaded",
        "taxonomy_entries" => taxonomy.len(),
        "http_entries" => resolver.http_table().len(),
        "exception_entries" => resolver.exception_table().len(),
        "strict" => strict);

    Ok(IssueClassifier::new(taxonomy, resolver))
}

/// Classifier over the bundled artifacts
pub fn load_bundled() -> LoadResult<IssueClassifier> {
    build_classifier(&ArtifactSources::bundled(), true)
}

fn check_entry_count(artifact: &str, count: usize) -> LoadResult<()> {
    if count > MAX_TABLE_ENTRIES {
        let error = LoadError::too_many_entries(artifact, count, MAX_TABLE_ENTRIES);
        log_error!(error.error_code(), "Artifact exceeds entry limit",
            "artifact" => artifact, "count" => count);
        return Err(error);
    }
    Ok(())
}

/// Reads artifacts from the directory named by `ResourcePreferences`
#[derive(Debug, Clone, Default)]
pub struct ResourceLoader {
    preferences: ResourcePreferences,
}

impl ResourceLoader {
    pub fn new(preferences: ResourcePreferences) -> Self {
        Self { preferences }
    }

    pub fn from_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(ResourcePreferences::for_dir(dir))
    }

    pub fn preferences(&self) -> &ResourcePreferences {
        &self.preferences
    }

    /// Build the classifier; without a resource directory the bundled set is used
    pub fn load(&self) -> LoadResult<IssueClassifier> {
        let strict = self.preferences.strict_validation;
        let (taxonomy_path, http_path, exception_path) = match (
            self.preferences.taxonomy_path(),
            self.preferences.http_table_path(),
            self.preferences.exception_table_path(),
        ) {
            (Some(taxonomy), Some(http), Some(exception)) => (taxonomy, http, exception),
            _ => {
                log_info!("No resource directory configured, using bundled artifacts");
                return build_classifier(&ArtifactSources::bundled(), strict);
            }
        };

        let http_format = table_format(&http_path)?;
        let exception_format = table_format(&exception_path)?;

        let taxonomy = read_artifact(&taxonomy_path)?;
        let http_table = read_artifact(&http_path)?;
        let exception_table = read_artifact(&exception_path)?;

        build_classifier(
            &ArtifactSources {
                taxonomy: &taxonomy,
                http_table: &http_table,
                http_format,
                exception_table: &exception_table,
                exception_format,
            },
            strict,
        )
    }
}

fn table_format(path: &Path) -> LoadResult<TableFormat> {
    TableFormat::from_path(path).ok_or_else(|| {
        let error = LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        };
        log_error!(error.error_code(), "Unsupported mapping table format",
            "path" => path.display());
        error
    })
}

/// Read one artifact, enforcing the size limit and UTF-8
pub fn read_artifact(path: &Path) -> LoadResult<String> {
    log_info!("Reading artifact", "path" => path.display());

    let metadata = fs::metadata(path).map_err(|e| {
        let error = LoadError::from_io(path, &e);
        log_error!(error.error_code(), "Failed to read artifact metadata",
            "path" => path.display(), "io_error" => e);
        error
    })?;

    if !metadata.is_file() {
        let error = LoadError::Io {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        };
        log_error!(error.error_code(), "Artifact path is not a file", "path" => path.display());
        return Err(error);
    }

    let size = metadata.len();
    if size > MAX_ARTIFACT_SIZE {
        let error = LoadError::too_large(path, size, MAX_ARTIFACT_SIZE);
        log_error!(error.error_code(), "Artifact exceeds size limit",
            "path" => path.display(), "size" => size);
        return Err(error);
    }

    let bytes = fs::read(path).map_err(|e| {
        let error = LoadError::from_io(path, &e);
        log_error!(error.error_code(), "Failed to read artifact",
            "path" => path.display(), "io_error" => e);
        error
    })?;

    String::from_utf8(bytes).map_err(|_| {
        let error = LoadError::InvalidEncoding {
            path: path.to_path_buf(),
        };
        log_error!(error.error_code(), "Artifact is not valid UTF-8", "path" => path.display());
        error
    })
}
