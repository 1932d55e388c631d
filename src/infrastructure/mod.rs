//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - Resource client backed by the `aws` CLI
//! - `converter/` - Task converter backed by the container-transform image
//! - `events/` - Event sinks (console, NDJSON)

pub mod aws;
pub mod converter;
pub mod events;

// Re-export for convenience
pub use aws::AwsCliClient;
pub use converter::ContainerTransformConverter;
pub use events::{ConsoleEventSink, JsonEventSink};
