//! JSON Event Sink
//!
//! Outputs lifecycle events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink, Operation};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: Operation,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: Operation) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: Operation, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command.as_str();
        let json = match event {
            DeployEvent::Started {
                operation,
                function,
                environment,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": operation.as_str(),
                    "function": function,
                    "environment": environment,
                })
            }

            DeployEvent::ArtifactLoaded { path, size, sha256 } => {
                serde_json::json!({
                    "event": "artifact_loaded",
                    "command": command,
                    "path": path.display().to_string(),
                    "size": size,
                    "sha256": sha256,
                })
            }

            DeployEvent::FunctionResolved { function, exists } => {
                serde_json::json!({
                    "event": "function_resolved",
                    "command": command,
                    "function": function,
                    "exists": exists,
                })
            }

            DeployEvent::FunctionCreated { function, version } => {
                serde_json::json!({
                    "event": "function_created",
                    "command": command,
                    "function": function,
                    "version": version,
                })
            }

            DeployEvent::ConfigurationUpdated { function } => {
                serde_json::json!({
                    "event": "configuration_updated",
                    "command": command,
                    "function": function,
                })
            }

            DeployEvent::CodePublished { function, version } => {
                serde_json::json!({
                    "event": "code_published",
                    "command": command,
                    "function": function,
                    "version": version,
                })
            }

            DeployEvent::AliasCreated { alias, version } => {
                serde_json::json!({
                    "event": "alias_created",
                    "command": command,
                    "alias": alias,
                    "version": version,
                })
            }

            DeployEvent::AliasUpdated {
                alias,
                previous,
                version,
            } => {
                serde_json::json!({
                    "event": "alias_updated",
                    "command": command,
                    "alias": alias,
                    "previous": previous,
                    "version": version,
                })
            }

            DeployEvent::AliasRemoved { alias } => {
                serde_json::json!({
                    "event": "alias_removed",
                    "command": command,
                    "alias": alias,
                })
            }

            DeployEvent::AliasAbsent { alias } => {
                serde_json::json!({
                    "event": "alias_absent",
                    "command": command,
                    "alias": alias,
                })
            }

            DeployEvent::CleanupStarted {
                total,
                referenced,
                unreferenced,
            } => {
                serde_json::json!({
                    "event": "cleanup_start",
                    "command": command,
                    "total": total,
                    "referenced": referenced,
                    "unreferenced": unreferenced,
                })
            }

            DeployEvent::VersionDeleted { version } => {
                serde_json::json!({
                    "event": "version_deleted",
                    "command": command,
                    "version": version,
                })
            }

            DeployEvent::VersionDeleteFailed { version, error } => {
                serde_json::json!({
                    "event": "version_delete_failed",
                    "command": command,
                    "version": version,
                    "error": error,
                })
            }

            DeployEvent::CleanupCompleted { deleted, failed } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "cleanup_complete",
                    "command": command,
                    "status": status,
                    "deleted": deleted,
                    "failed": failed,
                })
            }

            DeployEvent::FunctionDeleted { function } => {
                serde_json::json!({
                    "event": "function_deleted",
                    "command": command,
                    "function": function,
                })
            }

            DeployEvent::Completed { operation } => {
                serde_json::json!({
                    "event": "complete",
                    "command": operation.as_str(),
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
