//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Form input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A display index does not name a contact
    #[error("No contact at index {index} (list has {len} entries)")]
    NoSuchContact { index: usize, len: usize },

    /// A new contact was requested while an edit is pending
    #[error("An edit is in progress; submit it before adding a new contact")]
    EditInProgress,

    /// The stored contact list could not be parsed
    #[error("Stored value under key '{key}' is not a valid contact list: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize or parse JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Storage file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic persistence failure
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    /// The validation error behind this failure, if it was a form rejection.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
