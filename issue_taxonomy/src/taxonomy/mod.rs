//! Taxonomy of issue names grouped by category

pub mod error;
pub mod store;

pub use error::{TaxonomyError, TaxonomyResult};
pub use store::{TaxonomyEntry, TaxonomyStore};
