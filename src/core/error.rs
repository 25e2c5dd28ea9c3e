//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`RotatorError`] which provides comprehensive error handling
//! for all problem-rotator operations. It uses `thiserror` for ergonomic error
//! definitions and includes specialized error constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`RotatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, RotatorError>`
//!
//! # Error Categories
//! - **Configuration**: No repository configured yet
//! - **Fetching**: Network/API failures, collapsed into a single variant
//! - **Candidates**: Filter or repository yielding zero selectable problems
//! - **Stores**: Read/write/parse failures on the key-value and widget stores

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for problem-rotator
#[derive(Error, Debug)]
pub enum RotatorError {
    // Configuration errors
    #[error("No repository configured. Run 'problem-rotator config set --username <user> --repo <repo>' first")]
    ConfigMissing,

    #[error("Could not determine a {kind} directory for this platform")]
    DirectoryUnavailable { kind: &'static str },

    // Fetch errors: network failures, API errors and rate limits all collapse
    // into this one variant; callers recover with cached or placeholder data.
    #[error("Fetch failed: {context}")]
    FetchFailed { context: String },

    #[error("No candidate problems available. Refresh the cache or broaden the folder filter")]
    EmptyCandidateSet,

    // Store errors
    #[error("Failed to read store entry '{path}': {source}")]
    StoreReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write store entry '{path}': {source}")]
    StoreWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse store entry '{path}': {source}")]
    StoreParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using RotatorError
pub type Result<T> = std::result::Result<T, RotatorError>;

impl RotatorError {
    /// Create a fetch failure with a specific context message
    pub fn fetch_failed(context: impl Into<String>) -> Self {
        Self::FetchFailed {
            context: context.into(),
        }
    }

    /// Create a store read failure
    pub fn store_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store write failure
    pub fn store_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store parse failure
    pub fn store_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StoreParseFailed {
            path: path.into(),
            source,
        }
    }
}

impl From<ureq::Error> for RotatorError {
    fn from(source: ureq::Error) -> Self {
        Self::fetch_failed(source.to_string())
    }
}
