//! Provision Event Port
//!
//! Provides an observable interface for the provisioning pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::{CreatedResource, ResourceLedger};
use crate::domain::value_objects::Step;

/// Event emitted during provisioning
#[derive(Debug, Clone)]
pub enum ProvisionEvent {
    /// Pipeline started
    Started {
        compose_file: PathBuf,
        cluster_name: String,
        service_name: String,
    },

    /// A step finished; `resource` is what it created, if anything
    StepCompleted {
        step: Step,
        resource: Option<CreatedResource>,
    },

    /// One launch call of step 5 returned
    InstancesLaunched { subnet: String, count: u32 },

    /// A step failed; nothing after it runs
    Failed { step: Step, error: String },

    /// Every step succeeded
    Completed { resources: ResourceLedger },
}

/// Trait for receiving provision events
///
/// Implementations can be:
/// - ConsoleEventSink: One progress line per step
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait ProvisionEventSink {
    fn on_event(&self, event: ProvisionEvent);

    /// Whether this sink wants per-subnet events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ProvisionEventSink for NoopEventSink {
    fn on_event(&self, _event: ProvisionEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
