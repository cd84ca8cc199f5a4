/*!
 * Error types for the pipetrack application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised when user input fails validation before any storage mutation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Project name is empty after trimming surrounding whitespace
    #[error("project name must not be empty")]
    EmptyName,

    /// Project location is empty after trimming surrounding whitespace
    #[error("project location must not be empty")]
    EmptyLocation,
}

/// Errors that can occur when working with the project store
///
/// Not-found and storage-unreachable are deliberately distinct variants so
/// callers and tests can tell them apart instead of collapsing both into an
/// absent result.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No project row matched the given identifier
    #[error("no project with id {0}")]
    NotFound(i64),

    /// The underlying store could not be reached or the operation failed
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),

    /// Input was rejected before any mutation was attempted
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Unavailable(error.into())
    }
}

/// Errors that can occur while loading a language resource
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// The resource file for a language code is missing or unreadable
    #[error("language resource for '{code}' could not be read: {source}")]
    ResourceMissing {
        /// Language code whose resource failed to load
        code: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The resource file exists but is not a flat JSON string map
    #[error("language resource for '{code}' is malformed: {source}")]
    ResourceMalformed {
        /// Language code whose resource failed to parse
        code: String,
        /// Underlying parse error
        source: serde_json::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the project store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from input validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from the localization service
    #[error("Localization error: {0}")]
    Localization(#[from] LocalizationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
