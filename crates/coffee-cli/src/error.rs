//! Error types for the Coffee CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration selection, loading or lookup failed
    #[error(transparent)]
    Config(#[from] coffee_common::ConfigurationError),

    /// The record loaded but breaks one or more invariants
    #[error("Configuration has {0} problem(s)")]
    ValidationFailed(usize),

    /// Writing output failed
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Failed to serialize output")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
