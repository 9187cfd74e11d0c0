//! Teardown and Delete Use Cases
//!
//! Teardown removes the environment's alias, then optionally collects the
//! versions that alias was keeping alive. Delete removes the function with
//! every version and alias it has.

use std::sync::Arc;

use crate::application::aliases::{AliasManager, RemovalOutcome};
use crate::application::cleanup::VersionCollector;
use crate::application::connection::ensure_connected;
use crate::domain::entities::{Environment, FunctionSpec};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FunctionProvider, NoopEventSink, Operation,
};
use crate::error::FnpilotResult;

use super::result::TeardownResult;

pub struct TeardownUseCase<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> TeardownUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn execute(
        &self,
        spec: &FunctionSpec,
        environment: &Environment,
    ) -> FnpilotResult<TeardownResult> {
        self.execute_with_events(spec, environment, Arc::new(NoopEventSink))
    }

    /// An already-absent alias is not an error; a missing function is.
    pub fn execute_with_events(
        &self,
        spec: &FunctionSpec,
        environment: &Environment,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> FnpilotResult<TeardownResult> {
        ensure_connected(&self.provider)?;

        event_sink.on_event(DeployEvent::Started {
            operation: Operation::Teardown,
            function: spec.name().to_string(),
            environment: Some(environment.name().to_string()),
        });

        let alias = AliasManager::new(&self.provider).remove(spec.name(), environment.name())?;
        event_sink.on_event(match alias {
            RemovalOutcome::Removed => DeployEvent::AliasRemoved {
                alias: environment.name().to_string(),
            },
            RemovalOutcome::AlreadyAbsent => DeployEvent::AliasAbsent {
                alias: environment.name().to_string(),
            },
        });

        let mut result = TeardownResult {
            function: spec.name().to_string(),
            environment: environment.name().to_string(),
            alias,
            cleanup: None,
            cleanup_error: None,
        };

        if spec.delete_unreferenced_versions() {
            match VersionCollector::new(&self.provider).collect(spec.name(), &*event_sink) {
                Ok(cleanup) => result.cleanup = Some(cleanup),
                Err(err) => result.cleanup_error = Some(err),
            }
        }

        event_sink.on_event(DeployEvent::Completed {
            operation: Operation::Teardown,
        });

        Ok(result)
    }
}

pub struct DeleteUseCase<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> DeleteUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn execute(&self, spec: &FunctionSpec) -> FnpilotResult<()> {
        self.execute_with_events(spec, Arc::new(NoopEventSink))
    }

    /// Unqualified delete. A missing function surfaces as `FunctionNotFound`.
    pub fn execute_with_events(
        &self,
        spec: &FunctionSpec,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> FnpilotResult<()> {
        ensure_connected(&self.provider)?;

        event_sink.on_event(DeployEvent::Started {
            operation: Operation::Delete,
            function: spec.name().to_string(),
            environment: None,
        });

        self.provider.delete_function(spec.name(), None)?;
        event_sink.on_event(DeployEvent::FunctionDeleted {
            function: spec.name().to_string(),
        });

        event_sink.on_event(DeployEvent::Completed {
            operation: Operation::Delete,
        });
        Ok(())
    }
}
