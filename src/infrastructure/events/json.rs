//! JSON Event Sink
//!
//! Outputs provision events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ProvisionEvent, ProvisionEventSink};
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(fields) = event.as_object_mut() {
            fields.insert(
                "timestamp".to_string(),
                Utc::now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ProvisionEventSink for JsonEventSink {
    fn on_event(&self, event: ProvisionEvent) {
        let json = match event {
            ProvisionEvent::Started {
                compose_file,
                cluster_name,
                service_name,
            } => serde_json::json!({
                "event": "start",
                "command": "provision",
                "compose_file": compose_file.display().to_string(),
                "cluster": cluster_name,
                "service": service_name,
            }),

            ProvisionEvent::StepCompleted { step, resource } => serde_json::json!({
                "event": "step_completed",
                "command": "provision",
                "step": step.name(),
                "index": step.number(),
                "message": step.completion_message(),
                "resource": resource,
            }),

            ProvisionEvent::InstancesLaunched { subnet, count } => serde_json::json!({
                "event": "instances_launched",
                "command": "provision",
                "subnet": subnet,
                "count": count,
            }),

            ProvisionEvent::Failed { step, error } => serde_json::json!({
                "event": "error",
                "command": "provision",
                "step": step.name(),
                "index": step.number(),
                "error": error,
            }),

            ProvisionEvent::Completed { resources } => serde_json::json!({
                "event": "complete",
                "command": "provision",
                "status": "success",
                "resources": resources,
            }),
        };

        self.write_event(json);
    }
}
