//! Configuration for the issue classifier
//!
//! `constants` holds compile-time limits and the bundled artifacts,
//! `runtime` the user preferences with environment overrides.

pub mod constants;
pub mod runtime;

pub use runtime::{ConfigError, ConfigResult, LoggingPreferences, ResourcePreferences, RuntimeConfig};
