//! Error types for value conversion and host callbacks.

/// Errors produced while building values or calling into host objects.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// A `{"$date": ...}` payload was not a valid RFC 3339 timestamp.
    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A tagged payload had the wrong JSON type.
    #[error("invalid {tag} payload: expected {expected}")]
    InvalidTag {
        tag: &'static str,
        expected: &'static str,
    },

    /// A host object's callback failed.
    #[error("{class}: {message}")]
    Host { class: String, message: String },
}

impl ValueError {
    /// Convenience constructor for host callback failures.
    pub fn host(class: impl Into<String>, message: impl Into<String>) -> Self {
        ValueError::Host {
            class: class.into(),
            message: message.into(),
        }
    }
}
