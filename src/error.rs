//! Error types for paginated-list
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for paginated-list
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // List Contract Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Sequence exhausted")]
    Exhausted,

    // ============================================================================
    // Traversal Errors
    // ============================================================================
    #[error("Failed to resolve page '{locator}': {message}")]
    Resolution { locator: String, message: String },

    #[error("Failed to decode page: {message}")]
    Decode { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
    Exhausted,
    Resolution,
    Decode,
    Config,
    Io,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a resolution error for a locator
    pub fn resolution(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::Exhausted => ErrorKind::Exhausted,
            Error::Resolution { .. } => ErrorKind::Resolution,
            Error::Decode { .. } | Error::JsonParse(_) => ErrorKind::Decode,
            Error::Config { .. } | Error::YamlParse(_) => ErrorKind::Config,
            Error::Io(_) | Error::FileNotFound { .. } => ErrorKind::Io,
        }
    }

    /// Check if this error was raised while fetching or decoding a page
    pub fn is_traversal_failure(&self) -> bool {
        matches!(self.kind(), ErrorKind::Resolution | ErrorKind::Decode)
    }

    /// Re-tag any error raised by a resolver as a resolution failure
    pub(crate) fn into_resolution(self, locator: &str) -> Self {
        match self {
            Error::Resolution { .. } => self,
            other => Error::resolution(locator, other.to_string()),
        }
    }

    /// Re-tag any error raised by a decoder as a decode failure
    pub(crate) fn into_decode(self) -> Self {
        match self {
            Error::Decode { .. } => self,
            other => Error::decode(other.to_string()),
        }
    }
}

/// Result type alias for paginated-list
pub type Result<T> = std::result::Result<T, Error>;
