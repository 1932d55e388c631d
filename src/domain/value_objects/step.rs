//! Provisioning steps
//!
//! The pipeline is a fixed sequence; `Step::ALL` is that sequence.

use serde::Serialize;

/// One step of the provisioning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Convert,
    RegisterTaskDefinition,
    CreateLoadBalancer,
    CreateCluster,
    LaunchInstances,
    CreateTargetGroup,
    CreateListener,
    CreateService,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Convert,
        Step::RegisterTaskDefinition,
        Step::CreateLoadBalancer,
        Step::CreateCluster,
        Step::LaunchInstances,
        Step::CreateTargetGroup,
        Step::CreateListener,
        Step::CreateService,
    ];

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Stable machine-readable name (used in NDJSON events)
    pub fn name(&self) -> &'static str {
        match self {
            Step::Convert => "convert",
            Step::RegisterTaskDefinition => "register_task_definition",
            Step::CreateLoadBalancer => "create_load_balancer",
            Step::CreateCluster => "create_cluster",
            Step::LaunchInstances => "launch_instances",
            Step::CreateTargetGroup => "create_target_group",
            Step::CreateListener => "create_listener",
            Step::CreateService => "create_service",
        }
    }

    /// Progress line printed once the step has completed
    pub fn completion_message(&self) -> &'static str {
        match self {
            Step::Convert => "File converted.",
            Step::RegisterTaskDefinition => "Task definition registered.",
            Step::CreateLoadBalancer => "Load balancer created.",
            Step::CreateCluster => "Cluster created.",
            Step::LaunchInstances => "Instances started.",
            Step::CreateTargetGroup => "Target group created.",
            Step::CreateListener => "Listener created.",
            Step::CreateService => "Service started.",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.name())
    }
}
