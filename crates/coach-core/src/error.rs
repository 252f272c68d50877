//! Error types for the admin library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all admin operations.
#[derive(Error, Debug)]
pub enum AdminError {
    /// The request never produced a response (connection refused, DNS,
    /// malformed URL, body read failure).
    #[error("Request failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    /// The backend answered 2xx but reported `success: false`.
    #[error("{action} was rejected: {message}")]
    Rejected { action: String, message: String },
    /// A collection response matched none of the known envelopes.
    #[error("Unexpected response shape: {found}")]
    UnexpectedShape { found: String },
    /// A record or response body could not be decoded.
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A wizard or editor operation was attempted from the wrong state.
    #[error("Cannot {action} while {state}")]
    InvalidTransition { action: String, state: String },
    /// A save was requested while another save is still running.
    #[error("A save is already in progress")]
    SaveInFlight,
    /// Media was uploaded but the record referencing it was never written.
    #[error("Uploaded media at {url} is not referenced by any record: {source}")]
    OrphanedUpload {
        url: String,
        #[source]
        source: Box<AdminError>,
    },
    /// A remote record looked up by ID does not exist.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    /// Draft not found for the given ID
    #[error("Draft with ID {id} not found")]
    DraftNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> AdminError {
        AdminError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating transport errors with optional context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> AdminError {
        AdminError::Transport {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AdminError {
        AdminError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AdminError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub fn invalid_transition(action: impl Into<String>, state: impl fmt::Display) -> Self {
        Self::InvalidTransition {
            action: action.into(),
            state: state.to_string(),
        }
    }

    /// Message suitable for a toast: the backend's own wording when it gave
    /// one, the full error chain head otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for HTTP-related Results.
pub trait TransportResultExt<T> {
    /// Map reqwest errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AdminError::database(message).with_source(e))
    }
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AdminError::transport(message).with_source(e))
    }
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_backend_wording() {
        let error = AdminError::Api {
            status: 400,
            message: "Name is required".to_string(),
        };
        assert_eq!(error.user_message(), "Name is required");
        assert_eq!(error.to_string(), "Name is required (HTTP 400)");
    }

    #[test]
    fn invalid_input_builder_keeps_field_and_reason() {
        let error = AdminError::invalid_input("day").with_reason("Cannot delete the last remaining day");
        match &error {
            AdminError::InvalidInput { field, reason } => {
                assert_eq!(field, "day");
                assert_eq!(reason, "Cannot delete the last remaining day");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.user_message(), "Cannot delete the last remaining day");
    }

    #[test]
    fn orphaned_upload_keeps_cause() {
        let error = AdminError::OrphanedUpload {
            url: "https://cdn.example/v.mp4".to_string(),
            source: Box::new(AdminError::SaveInFlight),
        };
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("A save is already in progress"));
    }
}
