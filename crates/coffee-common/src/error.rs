//! Error types for configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting, loading or checking a configuration record.
///
/// The compiled-in presets never produce these; they only surface on the
/// file-backed and lookup paths.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    #[error("Invalid configuration: {}", violations.join("; "))]
    Invalid { violations: Vec<String> },

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Unknown environment '{name}' (expected development, staging or production)")]
    UnknownEnvironment { name: String },

    #[error(
        "Environment {environment} expects production={expected}, but the record has production={actual}"
    )]
    EnvironmentMismatch {
        environment: String,
        expected: bool,
        actual: bool,
    },
}

impl ConfigurationError {
    pub fn parse(details: impl Into<String>) -> Self {
        Self::ParseError {
            details: details.into(),
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::parse(err.to_string())
    }
}
