//! Error handling for the Docker check
//!
//! Library errors are `thiserror` enums grouped by stage. None of them ever
//! leaves the process: the verdict engine turns each one into a
//! [`Verdict`](crate::verdict::Verdict) carrying the error text.

use thiserror::Error;

/// Errors raised while talking to the container runtime daemon
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Client could not be constructed for the configured endpoint
    #[error("{details}")]
    ClientCreation { details: String },

    /// Daemon did not answer the info request
    #[error("{source}")]
    DaemonUnavailable {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Container listing failed
    #[error("{source}")]
    ListFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors raised by a single TCP port probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Connect did not complete within the probe timeout
    #[error("connection timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Connect failed (refused, unreachable, ...)
    #[error("{source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Configuration-related errors
///
/// These errors occur during configuration loading, parsing, or validation.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
