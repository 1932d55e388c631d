//! Application Layer
//!
//! Use cases that orchestrate domain ports.

pub mod provision;

pub use provision::{ProvisionFailure, ProvisionParams, ProvisionReport, ProvisionUseCase};
