//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - One command, no subcommands: every run provisions the full pipeline
//! - Account and network identifiers come from configuration, not flags

use std::path::PathBuf;

use clap::Parser;

use crate::application::provision::{
    ProvisionParams, DEFAULT_CLUSTER_NAME, DEFAULT_FAMILY, DEFAULT_LOAD_BALANCER_NAME,
    DEFAULT_SERVICE_NAME, DEFAULT_TASK_COUNT,
};
use crate::domain::value_objects::Protocol;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ecs-launch - deploy a docker-compose file as a load-balanced ECS service
#[derive(Parser, Debug)]
#[command(name = "ecs-launch")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Account values (AMI, subnets, VPC, security groups, IAM ARNs) are read from ecs-launch.toml."
)]
pub struct Cli {
    /// Path to the docker-compose file to be deployed
    pub dc_path: PathBuf,

    /// Number of tasks the service keeps running
    #[arg(long, default_value_t = DEFAULT_TASK_COUNT)]
    pub task_count: u32,

    /// IAM role the task assumes
    #[arg(long, default_value = "")]
    pub task_role_arn: String,

    /// Task definition family name
    #[arg(long = "task-family-name", default_value = DEFAULT_FAMILY)]
    pub family: String,

    #[arg(long, default_value = DEFAULT_LOAD_BALANCER_NAME)]
    pub load_balancer_name: String,

    /// Cluster name; must not already exist
    #[arg(long, default_value = DEFAULT_CLUSTER_NAME)]
    pub cluster_name: String,

    /// Protocol for the target group and listener
    #[arg(long = "service-protocol", value_enum)]
    pub protocol: Protocol,

    /// Port exposed by the listener and mapped to the container
    #[arg(long = "service-port")]
    pub port: u16,

    /// Container (its key in the compose file) that receives traffic
    #[arg(long = "service-container")]
    pub container_name: String,

    #[arg(long, default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Configuration file (replaces the user and project config files)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn provision_params(&self) -> ProvisionParams {
        ProvisionParams::new(
            self.dc_path.clone(),
            self.protocol,
            self.port,
            self.container_name.clone(),
        )
        .with_task_count(self.task_count)
        .with_task_role_arn(self.task_role_arn.clone())
        .with_family(self.family.clone())
        .with_load_balancer_name(self.load_balancer_name.clone())
        .with_cluster_name(self.cluster_name.clone())
        .with_service_name(self.service_name.clone())
    }
}
