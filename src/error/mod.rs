//! Error handling for the integration field bindings.

use std::io;

use crate::schema::FieldName;

/// Specialized error type for field registration, validation and transcoding
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    /// Invalid or missing configuration. The message is surfaced to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// A field was looked up that was never registered
    #[error("field not found: {namespace}/{name}")]
    FieldNotFound {
        /// Namespace that was searched
        namespace: String,
        /// Requested field name
        name: String,
    },

    /// The same field name was registered twice
    #[error("duplicate field registration: {0}")]
    DuplicateField(FieldName),

    /// A field was registered into a registry of another namespace
    #[error("field {name} belongs to namespace {found}, registry expects {expected}")]
    NamespaceMismatch {
        /// Offending field
        name: FieldName,
        /// Namespace declared by the field
        found: String,
        /// Namespace of the registry
        expected: String,
    },

    /// The process-wide registry was already initialized
    #[error("field registry is already initialized")]
    RegistryInitialized,

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading an input or settings file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl IntegrationError {
    /// Build a validation error from a message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error is a configuration validation failure
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for integration operations
pub type Result<T> = std::result::Result<T, IntegrationError>;
