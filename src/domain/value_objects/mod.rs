//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod code_digest;
mod network_placement;
mod runtime;
mod version_id;

pub use code_digest::CodeDigest;
pub use network_placement::{MismatchedPlacement, NetworkPlacement};
pub use runtime::{Runtime, UnknownRuntime};
pub use version_id::VersionId;
