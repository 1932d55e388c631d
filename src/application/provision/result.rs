//! Provision Result
//!
//! Success and failure values of a provisioning run.

use thiserror::Error;

use crate::domain::entities::ResourceLedger;
use crate::domain::value_objects::Step;
use crate::error::ProvisionError;

/// Identifiers produced by a successful run
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    pub family: String,
    pub cluster_name: String,
    pub service_name: String,
    pub load_balancer_arn: String,
    pub target_group_arn: String,
    /// Instances requested across all subnets (not confirmed as joined)
    pub instances_launched: u32,
    pub resources: ResourceLedger,
}

/// A run stopped at `step`. Everything in `orphaned` was created by the
/// earlier steps and is still live.
#[derive(Error, Debug)]
#[error("{step} failed: {error}")]
pub struct ProvisionFailure {
    pub step: Step,
    #[source]
    pub error: ProvisionError,
    pub orphaned: ResourceLedger,
}

impl ProvisionFailure {
    /// Whether the failure left remote resources behind
    pub fn has_orphans(&self) -> bool {
        !self.orphaned.is_empty()
    }
}
