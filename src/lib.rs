//! ecs-launch - provision a load-balanced ECS service from a docker-compose file
//!
//! One run converts the compose file to a task definition, registers it,
//! creates a load balancer and a cluster, launches container instances into
//! every configured subnet, and wires a target group, listener and service
//! in front of the task. Steps run strictly in order and nothing is rolled
//! back on failure.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{ProvisionFailure, ProvisionParams, ProvisionReport, ProvisionUseCase};
pub use config::StaticConfig;
pub use domain::value_objects::{Protocol, Step};
pub use error::{ConfigError, ProvisionError};
