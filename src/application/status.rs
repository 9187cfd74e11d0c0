//! Status Use Case
//!
//! Read-only report of a function's versions and aliases, including the
//! versions a cleanup run would delete.

use crate::application::aliases::AliasManager;
use crate::application::cleanup::VersionCollector;
use crate::application::connection::ensure_connected;
use crate::application::resolver::resolve_function;
use crate::domain::entities::{Alias, FunctionDetails, FunctionSpec};
use crate::domain::ports::FunctionProvider;
use crate::domain::services::{version_usage, VersionUsage};
use crate::domain::value_objects::VersionId;
use crate::error::FnpilotResult;

/// Snapshot of one function on the provider
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub function: String,
    /// `None` when the function does not exist
    pub details: Option<FunctionDetails>,
    pub aliases: Vec<Alias>,
    /// Published versions with the aliases pointing at each
    pub versions: Vec<VersionUsage>,
}

impl StatusReport {
    pub fn exists(&self) -> bool {
        self.details.is_some()
    }

    /// Versions a cleanup run would delete
    pub fn unreferenced(&self) -> Vec<VersionId> {
        self.versions
            .iter()
            .filter(|usage| !usage.is_referenced())
            .map(|usage| usage.version.clone())
            .collect()
    }
}

pub struct StatusUseCase<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> StatusUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn execute(&self, spec: &FunctionSpec) -> FnpilotResult<StatusReport> {
        ensure_connected(&self.provider)?;

        let mut report = StatusReport {
            function: spec.name().to_string(),
            details: resolve_function(&self.provider, spec.name())?,
            aliases: Vec::new(),
            versions: Vec::new(),
        };
        if !report.exists() {
            return Ok(report);
        }

        let versions: Vec<VersionId> = VersionCollector::new(&self.provider)
            .list_versions(spec.name())?
            .into_iter()
            .map(|v| v.version)
            .collect();
        report.aliases = AliasManager::new(&self.provider).list(spec.name())?;
        report.versions = version_usage(&versions, &report.aliases);

        Ok(report)
    }
}
