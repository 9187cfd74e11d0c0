//! fnpilot - version and alias lifecycle manager for serverless functions
//!
//! fnpilot deploys a packaged function to a function-hosting provider,
//! publishes an immutable version per deploy, points an environment-named
//! alias at it, and garbage-collects versions no alias references.
//!
//! The provider is reached through the [`domain::ports::FunctionProvider`]
//! port. [`infrastructure::InMemoryProvider`] and
//! [`infrastructure::TomlProviderStore`] implement it locally.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CleanupResult, CleanupUseCase, DeleteUseCase, DeployResult, DeployUseCase, StatusReport,
    StatusUseCase, TeardownResult, TeardownUseCase,
};
pub use config::Config;
pub use domain::entities::{Environment, FunctionSpec, SpecError};
pub use domain::ports::{DeployEvent, DeployEventSink, FunctionProvider, ProviderError};
pub use domain::value_objects::{Runtime, VersionId};
pub use error::{FnpilotError, FnpilotResult};
