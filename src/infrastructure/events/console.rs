//! Console Event Sink
//!
//! Human-readable progress lines on stderr, enabled with `-v`.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    color: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(color: bool) -> Self {
        Self::with_writer(color, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(color: bool, writer: W) -> Self {
        Self {
            color,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn failure(&self, text: String) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text
        }
    }

    fn dim(&self, text: String) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text
        }
    }
}

/// One line per event, `None` for events not worth a line
fn describe(event: &DeployEvent) -> Option<String> {
    let line = match event {
        DeployEvent::Started {
            operation,
            function,
            environment: Some(environment),
        } => format!("{operation} {function} ({environment})"),
        DeployEvent::Started {
            operation,
            function,
            environment: None,
        } => format!("{operation} {function}"),
        DeployEvent::ArtifactLoaded { path, size, sha256 } => {
            format!("read {} ({} bytes, {})", path.display(), size, sha256)
        }
        DeployEvent::FunctionResolved { function, exists } => {
            if *exists {
                format!("function {function} exists, updating")
            } else {
                format!("function {function} not found, creating")
            }
        }
        DeployEvent::FunctionCreated { function, version } => {
            format!("created {function}, published version {version}")
        }
        DeployEvent::ConfigurationUpdated { function } => {
            format!("updated configuration of {function}")
        }
        DeployEvent::CodePublished { function, version } => {
            format!("updated code of {function}, published version {version}")
        }
        DeployEvent::AliasCreated { alias, version } => {
            format!("alias {alias} -> {version} (created)")
        }
        DeployEvent::AliasUpdated {
            alias,
            previous,
            version,
        } => format!("alias {alias} -> {version} (was {previous})"),
        DeployEvent::AliasRemoved { alias } => format!("removed alias {alias}"),
        DeployEvent::AliasAbsent { alias } => format!("alias {alias} already absent"),
        DeployEvent::CleanupStarted {
            total,
            referenced,
            unreferenced,
        } => format!(
            "cleanup: {total} versions, {referenced} referenced, {unreferenced} to delete"
        ),
        DeployEvent::VersionDeleted { version } => format!("deleted version {version}"),
        DeployEvent::VersionDeleteFailed { version, error } => {
            format!("failed to delete version {version}: {error}")
        }
        DeployEvent::CleanupCompleted { deleted, failed } => {
            format!("cleanup: deleted {deleted}, failed {failed}")
        }
        DeployEvent::FunctionDeleted { function } => format!("deleted function {function}"),
        DeployEvent::Completed { .. } => return None,
    };
    Some(line)
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = describe(&event) else {
            return;
        };
        let line = match event {
            DeployEvent::VersionDeleteFailed { .. } => self.failure(line),
            DeployEvent::CleanupCompleted { failed, .. } if failed > 0 => self.failure(line),
            _ => self.dim(line),
        };
        self.write_line(line);
    }
}
