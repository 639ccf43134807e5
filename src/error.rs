//! Error types for entry listing, traversal and configuration.

use thiserror::Error;

/// Failures reported by a directory listing backend.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Failure injected by a test backend for the given path.
    #[error("listing failed for {0}")]
    Injected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ListingError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result alias for listing operations.
pub type ListingResult<T> = Result<T, ListingError>;

/// Errors surfaced by the recursive reader.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Failed to read directory {path}: {source}")]
    Listing {
        path: String,
        #[source]
        source: ListingError,
    },
}

impl WalkError {
    /// Path of the directory whose listing failed.
    pub fn path(&self) -> &str {
        match self {
            WalkError::Listing { path, .. } => path,
        }
    }
}

/// Errors raised when mutating virtual containers.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Adding {child} to {container} would create a cycle")]
    WouldCycle { container: String, child: String },
}

/// Configuration and logging setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
