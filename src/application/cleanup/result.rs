//! Cleanup result types

use crate::domain::ports::ProviderError;
use crate::domain::value_objects::VersionId;

/// A version that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFailure {
    pub version: VersionId,
    pub error: ProviderError,
}

/// Result of one garbage collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupResult {
    /// Published versions found on the provider
    pub examined: usize,
    /// Examined versions that at least one alias points at
    pub referenced: usize,
    /// Versions actually deleted
    pub deleted: Vec<VersionId>,
    /// Deletes that failed; remaining deletes were still attempted
    pub failures: Vec<VersionFailure>,
}

impl CleanupResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deleted(&mut self, version: VersionId) {
        self.deleted.push(version);
    }

    pub fn add_failure(&mut self, version: VersionId, error: ProviderError) {
        self.failures.push(VersionFailure { version, error });
    }

    /// Number of versions removed
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Versions that were candidates for deletion
    pub fn candidate_count(&self) -> usize {
        self.deleted.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
