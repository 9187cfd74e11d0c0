//! Deploy Event Port
//!
//! Provides an observable interface for lifecycle operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::VersionId;

/// Lifecycle operation an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deploy,
    Teardown,
    Delete,
    Cleanup,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deploy => "deploy",
            Operation::Teardown => "teardown",
            Operation::Delete => "delete",
            Operation::Cleanup => "cleanup",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Operation started
    Started {
        operation: Operation,
        function: String,
        environment: Option<String>,
    },

    /// Deployment package read from disk
    ArtifactLoaded {
        path: PathBuf,
        size: usize,
        sha256: String,
    },

    /// Provider-side state looked up
    FunctionResolved { function: String, exists: bool },

    /// Function created with an initial published version
    FunctionCreated { function: String, version: VersionId },

    /// Configuration pushed to an existing function
    ConfigurationUpdated { function: String },

    /// Code pushed and a new version published
    CodePublished { function: String, version: VersionId },

    AliasCreated { alias: String, version: VersionId },

    AliasUpdated {
        alias: String,
        previous: VersionId,
        version: VersionId,
    },

    AliasRemoved { alias: String },

    /// Alias was already gone (teardown is idempotent)
    AliasAbsent { alias: String },

    /// Garbage collection computed its deletion set
    CleanupStarted {
        total: usize,
        referenced: usize,
        unreferenced: usize,
    },

    VersionDeleted { version: VersionId },

    VersionDeleteFailed { version: VersionId, error: String },

    CleanupCompleted { deleted: usize, failed: usize },

    FunctionDeleted { function: String },

    /// Operation finished successfully
    Completed { operation: Operation },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-version deletes)
    ///
    /// Some sinks (like CI) may only want summary events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
