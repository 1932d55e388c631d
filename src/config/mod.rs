//! Static configuration for provisioning runs
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (ECS_LAUNCH_*)
//! 2. Explicit `--config <path>`
//! 3. Project config (./ecs-launch.toml)
//! 4. User config (~/.config/ecs-launch/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, user_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    AwsConfig, ClusterConfig, ConverterConfig, NetworkConfig, ServiceConfig, StaticConfig,
};
