//! Teardown result types

use crate::application::aliases::RemovalOutcome;
use crate::application::cleanup::CleanupResult;
use crate::domain::ports::ProviderError;

/// Result of tearing down one environment
#[derive(Debug, Clone)]
pub struct TeardownResult {
    pub function: String,
    pub environment: String,
    pub alias: RemovalOutcome,
    /// Present when `delete_unreferenced_versions` is set and cleanup ran
    pub cleanup: Option<CleanupResult>,
    /// Set when cleanup could not list versions or aliases
    pub cleanup_error: Option<ProviderError>,
}

impl TeardownResult {
    pub fn alias_removed(&self) -> bool {
        self.alias == RemovalOutcome::Removed
    }

    pub fn is_success(&self) -> bool {
        self.cleanup_error.is_none()
            && self
                .cleanup
                .as_ref()
                .map(CleanupResult::is_success)
                .unwrap_or(true)
    }
}
