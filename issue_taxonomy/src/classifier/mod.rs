//! Classification of HTTP statuses, exception identifiers and error values

pub mod descriptor;
pub mod engine;
pub mod error;

pub use descriptor::{render_details, ErrorDescriptor, ErrorInfo};
pub use engine::{Classification, IssueClassifier};
pub use error::{ClassificationError, ClassificationResult};
