//! Resource Client Port
//!
//! One operation per remote resource type. Implementations pass requests
//! straight to the provider: no semantic validation, no retries, and the
//! provider's response document comes back verbatim. Pulling identifiers
//! out of responses is the caller's job.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::TaskDefinition;
use crate::domain::value_objects::Protocol;

/// Remote operation, named as the provider API names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    RegisterTaskDefinition,
    CreateLoadBalancer,
    CreateCluster,
    RunInstances,
    CreateTargetGroup,
    CreateListener,
    CreateService,
}

impl Operation {
    pub fn api_name(&self) -> &'static str {
        match self {
            Operation::RegisterTaskDefinition => "RegisterTaskDefinition",
            Operation::CreateLoadBalancer => "CreateLoadBalancer",
            Operation::CreateCluster => "CreateCluster",
            Operation::RunInstances => "RunInstances",
            Operation::CreateTargetGroup => "CreateTargetGroup",
            Operation::CreateListener => "CreateListener",
            Operation::CreateService => "CreateService",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Provider error codes that mean "something already exists / is in use".
const PRECONDITION_CODE_MARKERS: &[&str] = &["Duplicate", "AlreadyExists", "ResourceInUse"];

/// Broad classification of a provider rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Name collision or similar state conflict (e.g. rerun after a partial run)
    PreconditionNotMet,
    /// Anything else the provider refused or the transport failed on
    Rejected,
}

/// Failure of a remote call. `cause` is the provider's message, unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {cause}")]
pub struct ProviderError {
    pub operation: Operation,
    pub cause: String,
}

impl ProviderError {
    pub fn new(operation: Operation, cause: impl Into<String>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    /// Provider error code, from the `An error occurred (Code) when ...` form
    pub fn code(&self) -> Option<&str> {
        let start = self.cause.find("An error occurred (")? + "An error occurred (".len();
        let len = self.cause[start..].find(')')?;
        Some(&self.cause[start..start + len])
    }

    pub fn kind(&self) -> ProviderErrorKind {
        let by_code = self
            .code()
            .map(|code| PRECONDITION_CODE_MARKERS.iter().any(|m| code.contains(m)))
            .unwrap_or(false);

        if by_code || self.cause.contains("not idempotent") {
            ProviderErrorKind::PreconditionNotMet
        } else {
            ProviderErrorKind::Rejected
        }
    }
}

/// Response document of a remote call, exactly as the provider returned it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderResponse(Value);

impl ProviderResponse {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Value {
        &self.0
    }

    /// String at a JSON pointer, e.g. `/LoadBalancers/0/LoadBalancerArn`
    pub fn str_at(&self, pointer: &str) -> Option<&str> {
        self.0.pointer(pointer).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateLoadBalancer {
    pub name: String,
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCluster {
    pub name: String,
}

/// Launch `count` instances into one subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchInstances {
    pub image_id: String,
    pub subnet_id: String,
    pub security_groups: Vec<String>,
    pub count: u32,
    pub instance_type: String,
    pub instance_profile_arn: String,
    pub key_pair: Option<String>,
    /// Startup script run on first boot
    pub user_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTargetGroup {
    pub name: String,
    pub protocol: Protocol,
    pub port: u16,
    pub vpc_id: String,
}

/// Listener with a single unconditional forward action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateListener {
    pub load_balancer_arn: String,
    pub protocol: Protocol,
    pub port: u16,
    pub target_group_arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateService {
    pub cluster: String,
    pub service_name: String,
    /// Family name; the provider resolves it to the latest revision
    pub task_definition: String,
    pub role: String,
    pub target_group_arn: String,
    pub container_name: String,
    pub container_port: u16,
    pub desired_count: u32,
}

/// Typed facade over the provider's compute, load-balancing and
/// instance APIs.
pub trait ResourceClient {
    fn register_task_definition(
        &self,
        definition: &TaskDefinition,
    ) -> Result<ProviderResponse, ProviderError>;

    fn create_load_balancer(
        &self,
        request: &CreateLoadBalancer,
    ) -> Result<ProviderResponse, ProviderError>;

    fn create_cluster(&self, request: &CreateCluster) -> Result<ProviderResponse, ProviderError>;

    fn launch_instances(
        &self,
        request: &LaunchInstances,
    ) -> Result<ProviderResponse, ProviderError>;

    fn create_target_group(
        &self,
        request: &CreateTargetGroup,
    ) -> Result<ProviderResponse, ProviderError>;

    fn create_listener(&self, request: &CreateListener)
        -> Result<ProviderResponse, ProviderError>;

    fn create_service(&self, request: &CreateService) -> Result<ProviderResponse, ProviderError>;
}
