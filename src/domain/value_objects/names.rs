//! Deterministic resource names

/// Name of the target group for a (cluster, family) pair.
///
/// The same inputs always give the same name, so a second run against an
/// account where the first run got past step 6 collides on this name.
pub fn target_group_name(cluster_name: &str, family: &str) -> String {
    format!("{}-{}", cluster_name, family)
}
