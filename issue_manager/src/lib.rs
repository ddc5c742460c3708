//! Structured issue records
//!
//! An `IssueManager` owns an `IssueClassifier` and the identity of the
//! reporting service, and turns HTTP statuses, error values or explicit issue
//! types into `Issue` records that serialize to JSON.

pub mod error;
pub mod manager;
pub mod model;

pub use error::{IssueManagerError, IssueManagerResult};
pub use manager::IssueManager;
pub use model::{Issue, Service, Severity};
