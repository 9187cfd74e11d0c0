//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `provider/` - Function provider implementations (in-memory, TOML store)
//! - `events/` - Event sinks (JSON, console)
//! - `artifact` - Deployment package reader

pub mod artifact;
pub mod events;
pub mod provider;

// Re-export for convenience
pub use artifact::LocalArtifactSource;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use provider::{InMemoryProvider, ProviderCall, ProviderState, TomlProviderStore};
