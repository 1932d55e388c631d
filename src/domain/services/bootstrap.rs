//! Instance bootstrap script
//!
//! Instances join the cluster on their own: the ECS agent reads
//! `ECS_CLUSTER` from `/etc/ecs/ecs.config` at boot. Nothing confirms the
//! join; the service created later assumes it eventually happens.

/// Path the ECS agent reads its configuration from
pub const ECS_CONFIG_PATH: &str = "/etc/ecs/ecs.config";

/// User-data script that registers an instance into `cluster_name`.
pub fn cluster_bootstrap_script(cluster_name: &str) -> String {
    format!(
        "#!/bin/bash\necho ECS_CLUSTER={} >> {}\n",
        cluster_name, ECS_CONFIG_PATH
    )
}
