//! Configuration type definitions
//!
//! Defaults are placeholder account values; a real deployment supplies its
//! own through a config file or `ECS_LAUNCH_*` variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

use super::loader::{self, ConfigWarning};

/// Compute instances backing the cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// ECS-optimized AMI
    pub ami_id: String,
    pub instance_type: String,
    pub instances_per_subnet: u32,
    /// ARN of the `ecsInstanceProfile` instance profile
    pub instance_profile_arn: String,
    /// EC2 key pair for SSH access; omitted from the launch call when unset
    pub key_pair: Option<String>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            ami_id: "ami-xxxxxxxx".to_string(),
            instance_type: "t2.micro".to_string(),
            instances_per_subnet: 2,
            instance_profile_arn: "arn:aws:iam::".to_string(),
            key_pair: None,
        }
    }
}

/// Network placement shared by the load balancer and the instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub vpc_id: String,
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            vpc_id: "vpc-xxxxxxxx".to_string(),
            subnets: vec!["subnet-xxxxxxxx".to_string(), "subnet-xxxxxxxx".to_string()],
            security_groups: vec!["sg-xxxxxxxx".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// ARN of the `ecsServiceRole` role
    pub service_role_arn: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_role_arn: "arn:aws:iam::".to_string(),
        }
    }
}

/// External compose-to-task-definition converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Container runtime used to run the converter image
    pub program: String,
    pub image: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            image: "micahhausler/container-transform".to_string(),
        }
    }
}

/// Provider command-line client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub program: String,
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            program: "aws".to_string(),
            region: None,
            profile: None,
        }
    }
}

/// Static account/network configuration, passed explicitly to the
/// provisioning use case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub cluster: ClusterConfig,
    pub network: NetworkConfig,
    pub service: ServiceConfig,
    pub converter: ConverterConfig,
    pub aws: AwsConfig,
}

impl StaticConfig {
    /// Load a config file, ignoring unknown-key warnings
    pub fn load(path: &Path) -> ConfigResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject values no provisioning run can succeed with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.network.subnets.is_empty() {
            return Err(ConfigError::Invalid {
                message: "network.subnets must list at least one subnet".to_string(),
            });
        }
        if self.network.security_groups.is_empty() {
            return Err(ConfigError::Invalid {
                message: "network.security_groups must list at least one security group"
                    .to_string(),
            });
        }
        if self.cluster.instances_per_subnet == 0 {
            return Err(ConfigError::Invalid {
                message: "cluster.instances_per_subnet must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Total number of instances step 5 launches
    pub fn total_instances(&self) -> u32 {
        let subnets = u32::try_from(self.network.subnets.len()).unwrap_or(u32::MAX);
        self.cluster.instances_per_subnet.saturating_mul(subnets)
    }
}
