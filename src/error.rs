//! Error types for SimRate Overlay
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! None of these are fatal: callers degrade to a visible state and keep running.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Simulator not running or the connection was lost
    #[snafu(display("Telemetry unavailable: {message}"))]
    TelemetryUnavailable { message: String },

    /// Persisted config could not be read or parsed
    #[snafu(display("Failed to load config from {}: {source}", path.display()))]
    ConfigLoad {
        path: PathBuf,
        source: Box<Error>,
    },

    /// Persisted config could not be written
    #[snafu(display("Failed to persist config to {}: {source}", path.display()))]
    ConfigPersist {
        path: PathBuf,
        source: Box<Error>,
    },

    /// OS startup entry could not be created or removed
    #[snafu(display("Startup registration error: {message}"))]
    Startup { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
