//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::types::StaticConfig;

/// File name of the project config, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "ecs-launch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: StaticConfig,
    /// File the values were read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(StaticConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: StaticConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a run.
///
/// An explicit path must exist. Otherwise the project file in `project_root`
/// wins over the user file, and built-in defaults apply when neither exists.
/// Environment overrides are applied last in every case.
pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> ConfigResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.exists() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.exists())
            }
        }
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig {
            config: StaticConfig::default(),
            source: None,
            warnings: Vec::new(),
        },
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// User-level config (`~/.config/ecs-launch/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ecs-launch").join("config.toml"))
}

/// Apply environment variable overrides (ECS_LAUNCH_* prefix)
pub fn with_env_overrides(config: StaticConfig) -> StaticConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: StaticConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> StaticConfig {
    if let Some(ami) = get_env("ECS_LAUNCH_AMI") {
        config.cluster.ami_id = ami;
    }

    if let Some(instance_type) = get_env("ECS_LAUNCH_INSTANCE_TYPE") {
        config.cluster.instance_type = instance_type;
    }

    if let Some(vpc_id) = get_env("ECS_LAUNCH_VPC_ID") {
        config.network.vpc_id = vpc_id;
    }

    // ECS_LAUNCH_SUBNETS (comma-separated)
    if let Some(subnets) = get_env("ECS_LAUNCH_SUBNETS") {
        let parsed = split_list(&subnets);
        if !parsed.is_empty() {
            config.network.subnets = parsed;
        }
    }

    // ECS_LAUNCH_SECURITY_GROUPS (comma-separated)
    if let Some(groups) = get_env("ECS_LAUNCH_SECURITY_GROUPS") {
        let parsed = split_list(&groups);
        if !parsed.is_empty() {
            config.network.security_groups = parsed;
        }
    }

    if let Some(region) = get_env("ECS_LAUNCH_REGION") {
        config.aws.region = Some(region).filter(|r| !r.is_empty());
    }

    if let Some(profile) = get_env("ECS_LAUNCH_PROFILE") {
        config.aws.profile = Some(profile).filter(|p| !p.is_empty());
    }

    config
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 1-based line on which `key` is assigned
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.split('=').next().map(str::trim) == Some(key))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cluster",
        "ami_id",
        "instance_type",
        "instances_per_subnet",
        "instance_profile_arn",
        "key_pair",
        "network",
        "vpc_id",
        "subnets",
        "security_groups",
        "service",
        "service_role_arn",
        "converter",
        "program",
        "image",
        "aws",
        "region",
        "profile",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
