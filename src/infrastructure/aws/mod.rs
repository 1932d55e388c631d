//! AWS resource client
//!
//! - `command` - Argument vectors for each remote operation
//! - `cli_client` - `AwsCliClient`, which runs them through the `aws` CLI

mod cli_client;
pub mod command;

pub use cli_client::AwsCliClient;
