use thiserror::Error;

/// Failures of a single HTTP round-trip. Controllers turn these into page
/// state; they never reach the user verbatim except in the reset message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

/// Failures while attaching to the page. Any of these aborts wiring for both
/// forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("window or document not available")]
    NoDocument,
    #[error("missing page elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
    #[error("failed to attach {event} listener: {message}")]
    Listener { event: String, message: String },
    #[error("failed to install log subscriber: {0}")]
    Telemetry(String),
}
