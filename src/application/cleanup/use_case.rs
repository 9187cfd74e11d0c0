//! Cleanup Use Case
//!
//! Runs the version garbage collector on its own, outside of a deploy or
//! teardown.

use std::sync::Arc;

use crate::application::connection::ensure_connected;
use crate::domain::entities::FunctionSpec;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FunctionProvider, NoopEventSink, Operation,
};
use crate::error::FnpilotResult;

use super::collector::VersionCollector;
use super::result::CleanupResult;

/// Standalone garbage collection of unreferenced versions
pub struct CleanupUseCase<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> CleanupUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn execute(&self, spec: &FunctionSpec) -> FnpilotResult<CleanupResult> {
        self.execute_with_events(spec, Arc::new(NoopEventSink))
    }

    /// Collect unreferenced versions regardless of `delete_unreferenced_versions`.
    pub fn execute_with_events(
        &self,
        spec: &FunctionSpec,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> FnpilotResult<CleanupResult> {
        ensure_connected(&self.provider)?;

        event_sink.on_event(DeployEvent::Started {
            operation: Operation::Cleanup,
            function: spec.name().to_string(),
            environment: None,
        });

        let result = VersionCollector::new(&self.provider).collect(spec.name(), &*event_sink)?;

        event_sink.on_event(DeployEvent::Completed {
            operation: Operation::Cleanup,
        });

        Ok(result)
    }
}
