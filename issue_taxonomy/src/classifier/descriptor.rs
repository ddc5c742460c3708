//! Error inspection for the exact-match classification path

use std::error::Error;

/// What the classifier needs to know about an error value
pub trait ErrorDescriptor {
    /// Fully-qualified type identifier; `None` for an absent error
    fn type_name(&self) -> Option<&str>;

    fn message(&self) -> Option<String>;

    fn cause(&self) -> Option<String> {
        None
    }

    fn suppressed(&self) -> Vec<String> {
        Vec::new()
    }

    fn stack_trace(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Owned error description, built by hand or from any `std::error::Error`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    type_name: Option<String>,
    message: Option<String>,
    cause: Option<String>,
    suppressed: Vec<String>,
    stack_trace: Vec<String>,
}

impl ErrorInfo {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Descriptor standing in for a missing error
    pub fn absent() -> Self {
        Self::default()
    }

    /// Describe a Rust error value. The type identifier is the Rust type path
    /// and the cause is the first `source()`.
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        Self {
            type_name: Some(std::any::type_name::<E>().to_string()),
            message: Some(error.to_string()),
            cause: error.source().map(|source| source.to_string()),
            suppressed: Vec::new(),
            stack_trace: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_suppressed(mut self, suppressed: impl Into<String>) -> Self {
        self.suppressed.push(suppressed.into());
        self
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack_trace.push(frame.into());
        self
    }
}

impl<E: Error + 'static> From<&E> for ErrorInfo {
    fn from(error: &E) -> Self {
        Self::from_error(error)
    }
}

impl ErrorDescriptor for ErrorInfo {
    fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }

    fn cause(&self) -> Option<String> {
        self.cause.clone()
    }

    fn suppressed(&self) -> Vec<String> {
        self.suppressed.clone()
    }

    fn stack_trace(&self) -> Vec<String> {
        self.stack_trace.clone()
    }
}

/// Newline-joined detail text for an error
pub fn render_details(error: &dyn ErrorDescriptor) -> String {
    let mut lines = Vec::with_capacity(5);

    lines.push(format!("Caused by {}", error.type_name().unwrap_or("<none>")));
    lines.push(format!(
        "Exception message: {}",
        error.message().unwrap_or_else(|| "<none>".to_string())
    ));
    if let Some(cause) = error.cause() {
        lines.push(format!("Cause: {}", cause));
    }
    let suppressed = error.suppressed();
    if !suppressed.is_empty() {
        lines.push(format!("Suppressed exceptions: [{}]", suppressed.join(", ")));
    }
    lines.push(format!("Stack trace: [{}]", error.stack_trace().join(", ")));

    lines.join("\n")
}
