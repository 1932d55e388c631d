//! Domain Services
//!
//! Stateless helpers with no I/O.

mod bootstrap;

pub use bootstrap::{cluster_bootstrap_script, ECS_CONFIG_PATH};
