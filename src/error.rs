//! Error types for fnpilot
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::{EnvironmentError, SpecError};
use crate::domain::ports::ProviderError;

/// Result type alias for fnpilot operations
pub type FnpilotResult<T> = Result<T, FnpilotError>;

/// Main error type for fnpilot operations
#[derive(Error, Debug)]
pub enum FnpilotError {
    /// Function configuration failed validation
    #[error("invalid function configuration: {0}")]
    InvalidSpec(#[from] SpecError),

    /// Environment name failed validation
    #[error(transparent)]
    InvalidEnvironment(#[from] EnvironmentError),

    /// Config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A `FNPILOT_*` variable holds a value that cannot be parsed
    #[error("invalid value '{value}' for {key}: expected {expected}")]
    InvalidEnvOverride {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Provider connection was never established or has gone away
    #[error("provider is not connected: {reason}")]
    ProviderNotConnected { reason: String },

    /// Deployment package does not exist
    #[error("deployment package not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// Deployment package exists but could not be read
    #[error("failed to read deployment package {path}: {message}")]
    UnreadableArtifact { path: PathBuf, message: String },

    /// A provider call failed
    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
