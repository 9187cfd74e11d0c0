//! Cleanup Module
//!
//! Garbage collection of versions no alias points at.
//!
//! - `collector` - The collection algorithm (`VersionCollector`)
//! - `result` - Result types (`CleanupResult`, `VersionFailure`)
//! - `use_case` - Standalone cleanup entry point (`CleanupUseCase`)

mod collector;
mod result;
mod use_case;

pub use collector::VersionCollector;
pub use result::{CleanupResult, VersionFailure};
pub use use_case::CleanupUseCase;
