//! Domain Entities
//!
//! - `TaskDefinition` - The converted, provider-native task document
//! - `ResourceLedger` - Remote resources created by a provisioning run

mod ledger;
mod task_definition;

pub use ledger::{CreatedResource, ResourceKind, ResourceLedger};
pub use task_definition::{ShapeError, TaskDefinition};
