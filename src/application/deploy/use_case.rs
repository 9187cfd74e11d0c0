//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Check the provider connection
//! 2. Read the deployment package
//! 3. Resolve the function on the provider
//! 4. Create it (publishing version 1) or push configuration then code
//!    (publishing a new version)
//! 5. Point the environment alias at the new version
//! 6. Optionally collect unreferenced versions
//!
//! The alias upsert is the last mutating step before cleanup, so any failure
//! before it leaves the environment's alias untouched.

use std::sync::Arc;

use crate::application::aliases::{AliasManager, AliasOutcome};
use crate::application::cleanup::VersionCollector;
use crate::application::connection::ensure_connected;
use crate::application::resolver::resolve_function;
use crate::domain::entities::{Environment, FunctionSpec};
use crate::domain::ports::{
    ArtifactError, ArtifactSource, DeployEvent, DeployEventSink, FunctionProvider,
    NoopEventSink, Operation,
};
use crate::domain::value_objects::{CodeDigest, VersionId};
use crate::error::{FnpilotError, FnpilotResult};

use super::result::{DeployResult, FunctionAction};

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can swap in in-memory providers.
pub struct DeployUseCase<P, A>
where
    P: FunctionProvider,
    A: ArtifactSource,
{
    provider: P,
    artifacts: A,
}

impl<P, A> DeployUseCase<P, A>
where
    P: FunctionProvider,
    A: ArtifactSource,
{
    pub fn new(provider: P, artifacts: A) -> Self {
        Self {
            provider,
            artifacts,
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        spec: &FunctionSpec,
        environment: &Environment,
    ) -> FnpilotResult<DeployResult> {
        self.execute_with_events(spec, environment, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        spec: &FunctionSpec,
        environment: &Environment,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> FnpilotResult<DeployResult> {
        ensure_connected(&self.provider)?;

        event_sink.on_event(DeployEvent::Started {
            operation: Operation::Deploy,
            function: spec.name().to_string(),
            environment: Some(environment.name().to_string()),
        });

        let code = self.load_package(spec)?;
        let code_digest = CodeDigest::of(&code);
        event_sink.on_event(DeployEvent::ArtifactLoaded {
            path: spec.package().to_path_buf(),
            size: code.len(),
            sha256: code_digest.to_string(),
        });

        let (action, version) = self.publish(spec, &code, &*event_sink)?;

        let alias = AliasManager::new(&self.provider).upsert(
            spec.name(),
            &version,
            environment.name(),
            environment.description(),
        )?;
        event_sink.on_event(alias_event(&alias));

        let mut result = DeployResult {
            function: spec.name().to_string(),
            environment: environment.name().to_string(),
            action,
            version,
            code_digest,
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
            operation: Operation::Deploy,
        });

        Ok(result)
    }

    fn load_package(&self, spec: &FunctionSpec) -> FnpilotResult<Vec<u8>> {
        self.artifacts
            .read(spec.package())
            .map_err(|err| match err {
                ArtifactError::NotFound(path) => FnpilotError::MissingArtifact { path },
                ArtifactError::Io { path, source } => FnpilotError::UnreadableArtifact {
                    path,
                    message: source.to_string(),
                },
            })
    }

    /// Create or update the function and return the published version
    fn publish(
        &self,
        spec: &FunctionSpec,
        code: &[u8],
        event_sink: &dyn DeployEventSink,
    ) -> FnpilotResult<(FunctionAction, VersionId)> {
        let existing = resolve_function(&self.provider, spec.name())?;
        event_sink.on_event(DeployEvent::FunctionResolved {
            function: spec.name().to_string(),
            exists: existing.is_some(),
        });

        let configuration = spec.configuration();

        match existing {
            None => {
                let version = self.provider.create_function(&configuration, code, true)?;
                event_sink.on_event(DeployEvent::FunctionCreated {
                    function: spec.name().to_string(),
                    version: version.clone(),
                });
                Ok((FunctionAction::Created, version))
            }
            Some(_) => {
                // Configuration goes first so the code publish snapshots it.
                self.provider
                    .update_function_configuration(&configuration)?;
                event_sink.on_event(DeployEvent::ConfigurationUpdated {
                    function: spec.name().to_string(),
                });

                let version = self
                    .provider
                    .update_function_code(spec.name(), code, true)?;
                event_sink.on_event(DeployEvent::CodePublished {
                    function: spec.name().to_string(),
                    version: version.clone(),
                });
                Ok((FunctionAction::Updated, version))
            }
        }
    }
}

fn alias_event(outcome: &AliasOutcome) -> DeployEvent {
    match outcome {
        AliasOutcome::Created(alias) => DeployEvent::AliasCreated {
            alias: alias.name.clone(),
            version: alias.version.clone(),
        },
        AliasOutcome::Updated { previous, alias } => DeployEvent::AliasUpdated {
            alias: alias.name.clone(),
            previous: previous.clone(),
            version: alias.version.clone(),
        },
    }
}
