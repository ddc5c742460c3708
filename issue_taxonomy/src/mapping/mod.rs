//! HTTP status and exception mapping tables

pub mod error;
pub mod properties;
pub mod resolver;
pub mod table;

pub use error::{MappingError, MappingResult};
pub use resolver::MappingResolver;
pub use table::{MappingTable, TableFormat, TableKind};
