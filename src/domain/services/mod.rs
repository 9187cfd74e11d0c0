//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod pagination;
mod version_collector;

pub use pagination::{collect_pages, Page};
pub use version_collector::{
    referenced_versions, unreferenced_versions, version_usage, VersionUsage,
};
