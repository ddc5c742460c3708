// Internal modules
pub mod classifier;
pub mod config;
pub mod loader;
#[macro_use]
pub mod logging;
pub mod mapping;
pub mod model;
pub mod taxonomy;
pub mod validation;

// Re-export key types for library consumers
pub use classifier::{
    render_details, Classification, ClassificationError, ClassificationResult, ErrorDescriptor,
    ErrorInfo, IssueClassifier,
};
pub use loader::{build_classifier, load_bundled, ArtifactSources, LoadError, LoadResult, ResourceLoader};
pub use mapping::{MappingError, MappingResolver, MappingResult, MappingTable, TableFormat, TableKind};
pub use model::{IssueCategory, IssueName, IssueType, ModelError};
pub use taxonomy::{TaxonomyEntry, TaxonomyError, TaxonomyResult, TaxonomyStore};
pub use validation::{check_conformance, ConformanceReport};
