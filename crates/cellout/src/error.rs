//! Error types for output rendering.
//!
//! [`RenderError`] is the error type of every fallible rendering operation.
//! Handler failures are never caught by the dispatcher: they propagate to the
//! caller, which presents them inline for the cell that produced the value.

use cellout_value::ValueError;

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A handler's render routine failed.
    #[error("handler '{handler}' failed: {message}")]
    Handler { handler: String, message: String },

    /// A host object's own render routine failed.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Template syntax error or template rendering failure.
    #[error("template error: {0}")]
    Template(String),

    /// Malformed plugin definition.
    #[error("plugin error: {0}")]
    Plugin(String),

    /// Invalid render configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Data (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RenderError {
    /// Builds a [`RenderError::Handler`] for the named handler.
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}
