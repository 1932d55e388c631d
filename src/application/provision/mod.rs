//! Provision Module
//!
//! Orchestrates the provisioning pipeline.
//!
//! ## Structure
//!
//! - `options` - Operator parameters (`ProvisionParams`)
//! - `result` - Result types (`ProvisionReport`, `ProvisionFailure`)
//! - `use_case` - Core pipeline (`ProvisionUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ecs_launch::application::provision::{ProvisionParams, ProvisionUseCase};
//!
//! let use_case = ProvisionUseCase::new(converter, client, config);
//! let report = use_case.execute(&ProvisionParams::new(path, Protocol::Http, 80, "web"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{
    ProvisionParams, DEFAULT_CLUSTER_NAME, DEFAULT_FAMILY, DEFAULT_LOAD_BALANCER_NAME,
    DEFAULT_SERVICE_NAME, DEFAULT_TASK_COUNT,
};
pub use result::{ProvisionFailure, ProvisionReport};
pub use use_case::ProvisionUseCase;
