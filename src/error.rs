//! Error types for mcstat
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using McstatError
pub type Result<T> = std::result::Result<T, McstatError>;

/// Unified error type for mcstat operations
#[derive(Debug, Error)]
pub enum McstatError {
    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    /// The target could not be resolved, refused the connection or did not
    /// answer within the connect timeout.
    #[error("Connection to {addr} failed: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Write or read failure on an established connection
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Malformed response: expected at least {expected} segments, got {found}")]
    MalformedResponse { expected: usize, found: usize },

    // -------------------------------------------------------------------------
    // HTTP Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP service stopped serving
    #[error("HTTP error: {0}")]
    Http(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`McstatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connect refused, unreachable or timed out
    Connection,

    /// Write or read failure after the connection was established
    Io,

    /// The response does not have the expected segment layout
    MalformedResponse,

    /// Anything outside the status query itself
    Other,
}

impl McstatError {
    /// Build a connection error for the given address
    pub fn connection(addr: impl Into<String>, source: std::io::Error) -> Self {
        McstatError::Connection {
            addr: addr.into(),
            source,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            McstatError::Connection { .. } => ErrorKind::Connection,
            McstatError::Io(_) => ErrorKind::Io,
            McstatError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            _ => ErrorKind::Other,
        }
    }
}
