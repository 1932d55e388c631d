//! AWS CLI Resource Client
//!
//! Implements the ResourceClient port by running the `aws` command line
//! tool, one process per call, with `--output json`.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

use super::command;
use crate::config::AwsConfig;
use crate::domain::entities::TaskDefinition;
use crate::domain::ports::{
    CreateCluster, CreateListener, CreateLoadBalancer, CreateService, CreateTargetGroup,
    LaunchInstances, Operation, ProviderError, ProviderResponse, ResourceClient,
};

/// Resource client backed by the `aws` CLI
///
/// Credentials and region come from the CLI's own resolution chain unless
/// `region` or `profile` are set.
pub struct AwsCliClient {
    program: String,
    region: Option<String>,
    profile: Option<String>,
}

impl AwsCliClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            region: None,
            profile: None,
        }
    }

    pub fn from_config(config: &AwsConfig) -> Self {
        Self {
            program: config.program.clone(),
            region: config.region.clone(),
            profile: config.profile.clone(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Options appended to every call
    fn global_args(&self) -> Vec<String> {
        let mut out = vec!["--output".to_string(), "json".to_string()];
        if let Some(region) = &self.region {
            out.push("--region".to_string());
            out.push(region.clone());
        }
        if let Some(profile) = &self.profile {
            out.push("--profile".to_string());
            out.push(profile.clone());
        }
        out
    }

    fn invoke(&self, operation: Operation, args: Vec<String>) -> Result<ProviderResponse, ProviderError> {
        let output = Command::new(&self.program)
            .args(&args)
            .args(self.global_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ProviderError::new(operation, format!("failed to run '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let cause = if stderr.is_empty() {
                format!("'{}' exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(ProviderError::new(operation, cause));
        }

        parse_response(operation, &output.stdout)
    }
}

fn parse_response(operation: Operation, stdout: &[u8]) -> Result<ProviderResponse, ProviderError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProviderResponse::new(Value::Null));
    }
    serde_json::from_slice::<Value>(stdout)
        .map(ProviderResponse::new)
        .map_err(|e| ProviderError::new(operation, format!("unreadable response: {}", e)))
}

impl ResourceClient for AwsCliClient {
    fn register_task_definition(
        &self,
        definition: &TaskDefinition,
    ) -> Result<ProviderResponse, ProviderError> {
        let operation = Operation::RegisterTaskDefinition;
        let io_error = |e: std::io::Error| {
            ProviderError::new(operation, format!("failed to stage task definition: {}", e))
        };

        // Kept alive until the call returns
        let mut input = tempfile::Builder::new()
            .prefix("ecs-launch-")
            .suffix(".json")
            .tempfile()
            .map_err(io_error)?;
        serde_json::to_writer(&mut input, definition.as_document())
            .map_err(|e| ProviderError::new(operation, e.to_string()))?;
        input.flush().map_err(io_error)?;

        self.invoke(operation, command::register_task_definition(input.path()))
    }

    fn create_load_balancer(
        &self,
        request: &CreateLoadBalancer,
    ) -> Result<ProviderResponse, ProviderError> {
        self.invoke(
            Operation::CreateLoadBalancer,
            command::create_load_balancer(request),
        )
    }

    fn create_cluster(&self, request: &CreateCluster) -> Result<ProviderResponse, ProviderError> {
        self.invoke(Operation::CreateCluster, command::create_cluster(request))
    }

    fn launch_instances(
        &self,
        request: &LaunchInstances,
    ) -> Result<ProviderResponse, ProviderError> {
        self.invoke(Operation::RunInstances, command::run_instances(request))
    }

    fn create_target_group(
        &self,
        request: &CreateTargetGroup,
    ) -> Result<ProviderResponse, ProviderError> {
        self.invoke(
            Operation::CreateTargetGroup,
            command::create_target_group(request),
        )
    }

    fn create_listener(
        &self,
        request: &CreateListener,
    ) -> Result<ProviderResponse, ProviderError> {
        self.invoke(Operation::CreateListener, command::create_listener(request))
    }

    fn create_service(&self, request: &CreateService) -> Result<ProviderResponse, ProviderError> {
        self.invoke(Operation::CreateService, command::create_service(request))
    }
}
