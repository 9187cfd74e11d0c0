//! Deploy Result
//!
//! Result types for deploy operations.

use crate::application::aliases::AliasOutcome;
use crate::application::cleanup::CleanupResult;
use crate::domain::ports::ProviderError;
use crate::domain::value_objects::{CodeDigest, VersionId};

/// Whether the deploy created the function or updated an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionAction {
    Created,
    Updated,
}

impl FunctionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionAction::Created => "created",
            FunctionAction::Updated => "updated",
        }
    }
}

/// Result of a deploy operation
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub function: String,
    pub environment: String,
    pub action: FunctionAction,
    /// Version published by this deploy
    pub version: VersionId,
    /// Digest of the package that was pushed
    pub code_digest: CodeDigest,
    pub alias: AliasOutcome,
    /// Present when `delete_unreferenced_versions` is set and cleanup ran
    pub cleanup: Option<CleanupResult>,
    /// Set when cleanup could not list versions or aliases.
    ///
    /// The deploy itself has already completed when this is set.
    pub cleanup_error: Option<ProviderError>,
}

impl DeployResult {
    /// True when the deploy and any cleanup completed without failures
    pub fn is_success(&self) -> bool {
        self.cleanup_error.is_none()
            && self
                .cleanup
                .as_ref()
                .map(CleanupResult::is_success)
                .unwrap_or(true)
    }

    pub fn deleted_versions(&self) -> &[VersionId] {
        self.cleanup
            .as_ref()
            .map(|c| c.deleted.as_slice())
            .unwrap_or(&[])
    }
}
