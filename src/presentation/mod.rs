//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Flags and their mapping to `ProvisionParams`
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Failure, orphan and warning rendering
//!
//! ## Usage
//!
//! ```ignore
//! use ecs_launch::presentation::factory;
//!
//! let use_case = factory::create_provision_use_case(&config);
//! let report = use_case.execute(&cli.provision_params())?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_event_sink, create_provision_use_case, ConcreteProvisionUseCase};
