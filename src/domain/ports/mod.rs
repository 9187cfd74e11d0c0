//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_source;
pub mod deploy_events;
pub mod function_provider;

pub use artifact_source::{ArtifactError, ArtifactResult, ArtifactSource};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, Operation};
pub use function_provider::{FunctionProvider, ProviderError, ProviderResult};
