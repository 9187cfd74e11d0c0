//! Version garbage collector
//!
//! Deletes every published version that no alias points at:
//! 1. List all versions (A); stop if there are none
//! 2. List all aliases and collect the versions they reference (R)
//! 3. Delete each version in A - R, best-effort

use crate::application::aliases::AliasManager;
use crate::domain::entities::FunctionVersion;
use crate::domain::ports::{DeployEvent, DeployEventSink, FunctionProvider, ProviderResult};
use crate::domain::services::{collect_pages, referenced_versions, unreferenced_versions};
use crate::domain::value_objects::VersionId;

use super::result::CleanupResult;

/// Garbage collector for unreferenced versions
pub struct VersionCollector<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> VersionCollector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Every version of `function`, across all pages, in listing order
    pub fn list_versions(&self, function: &str) -> ProviderResult<Vec<FunctionVersion>> {
        collect_pages(|marker| self.provider.list_versions(function, marker))
    }

    /// Delete unreferenced versions of `function`.
    ///
    /// Listing failures abort the run. Individual delete failures are
    /// recorded in the result and the remaining deletes still run.
    pub fn collect(
        &self,
        function: &str,
        event_sink: &dyn DeployEventSink,
    ) -> ProviderResult<CleanupResult> {
        let mut result = CleanupResult::new();

        let published: Vec<VersionId> = self
            .list_versions(function)?
            .into_iter()
            .map(|v| v.version)
            .filter(|v| !v.is_latest())
            .collect();
        result.examined = published.len();
        if published.is_empty() {
            return Ok(result);
        }

        let aliases = AliasManager::new(&self.provider).list(function)?;
        let referenced = referenced_versions(&aliases);
        result.referenced = published
            .iter()
            .filter(|v| referenced.contains(*v))
            .count();

        let doomed = unreferenced_versions(&published, &referenced);
        event_sink.on_event(DeployEvent::CleanupStarted {
            total: result.examined,
            referenced: result.referenced,
            unreferenced: doomed.len(),
        });
        if doomed.is_empty() {
            event_sink.on_event(DeployEvent::CleanupCompleted {
                deleted: 0,
                failed: 0,
            });
            return Ok(result);
        }

        for version in doomed {
            match self.provider.delete_function(function, Some(&version)) {
                Ok(()) => {
                    if event_sink.wants_detailed_events() {
                        event_sink.on_event(DeployEvent::VersionDeleted {
                            version: version.clone(),
                        });
                    }
                    result.add_deleted(version);
                }
                Err(err) => {
                    event_sink.on_event(DeployEvent::VersionDeleteFailed {
                        version: version.clone(),
                        error: err.to_string(),
                    });
                    result.add_failure(version, err);
                }
            }
        }

        event_sink.on_event(DeployEvent::CleanupCompleted {
            deleted: result.deleted_count(),
            failed: result.failures.len(),
        });

        Ok(result)
    }
}
