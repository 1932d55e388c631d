//! Provision Parameters
//!
//! Operator-supplied values for one provisioning run.

use std::path::PathBuf;

use crate::domain::value_objects::Protocol;

pub const DEFAULT_TASK_COUNT: u32 = 1;
pub const DEFAULT_FAMILY: &str = "my-family";
pub const DEFAULT_LOAD_BALANCER_NAME: &str = "my-lb";
pub const DEFAULT_CLUSTER_NAME: &str = "my-cluster";
pub const DEFAULT_SERVICE_NAME: &str = "my-service";

/// Parameters for the provision use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionParams {
    /// docker-compose file to deploy
    pub compose_file: PathBuf,
    /// Desired number of running tasks
    pub task_count: u32,
    /// Role the task assumes; empty means none
    pub task_role_arn: String,
    /// Task definition family
    pub family: String,
    pub load_balancer_name: String,
    /// Must be unique within the account/region
    pub cluster_name: String,
    pub protocol: Protocol,
    /// Exposed port, used for the target group, listener and container mapping
    pub port: u16,
    /// Container the port belongs to (its key in the compose file)
    pub container_name: String,
    pub service_name: String,
}

impl ProvisionParams {
    pub fn new(
        compose_file: impl Into<PathBuf>,
        protocol: Protocol,
        port: u16,
        container_name: impl Into<String>,
    ) -> Self {
        Self {
            compose_file: compose_file.into(),
            task_count: DEFAULT_TASK_COUNT,
            task_role_arn: String::new(),
            family: DEFAULT_FAMILY.to_string(),
            load_balancer_name: DEFAULT_LOAD_BALANCER_NAME.to_string(),
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            protocol,
            port,
            container_name: container_name.into(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    pub fn with_task_count(mut self, count: u32) -> Self {
        self.task_count = count;
        self
    }

    pub fn with_task_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.task_role_arn = arn.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_load_balancer_name(mut self, name: impl Into<String>) -> Self {
        self.load_balancer_name = name.into();
        self
    }

    pub fn with_cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = name.into();
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }
}
