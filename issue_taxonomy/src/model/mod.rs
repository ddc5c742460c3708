//! Closed enumerations and the classification value object

mod category;
mod error;
mod issue_type;
mod name;

pub use category::IssueCategory;
pub use error::{ModelError, ModelResult};
pub use issue_type::IssueType;
pub use name::IssueName;
