//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Create or update, publish, point the environment alias
//! - `TeardownUseCase` - Remove an environment's alias
//! - `DeleteUseCase` - Delete a whole function
//! - `CleanupUseCase` - Delete versions no alias points at
//! - `StatusUseCase` - Read-only version/alias report
//! - `CheckUseCase` - Offline configuration validation
//!
//! ## Services
//!
//! - `AliasManager` - Idempotent alias upsert/remove
//! - `VersionCollector` - Version garbage collection
//! - `resolve_function` - Existence lookup

pub mod aliases;
pub mod check;
pub mod cleanup;
mod connection;
pub mod deploy;
pub mod resolver;
pub mod status;
pub mod teardown;

pub use aliases::{AliasManager, AliasOutcome, RemovalOutcome};
pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use cleanup::{CleanupResult, CleanupUseCase, VersionCollector, VersionFailure};
pub use connection::ensure_connected;
pub use deploy::{DeployResult, DeployUseCase, FunctionAction};
pub use resolver::resolve_function;
pub use status::{StatusReport, StatusUseCase};
pub use teardown::{DeleteUseCase, TeardownResult, TeardownUseCase};
