mod issue;
mod service;
mod severity;

pub use issue::Issue;
pub use service::Service;
pub use severity::Severity;
