//! Event Sink Implementations
//!
//! Provides concrete implementations of ProvisionEventSink:
//! - ConsoleEventSink: Human-readable progress, one line per step
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
