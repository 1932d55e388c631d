//! Property tests for derived resource names and the bootstrap script.

use proptest::prelude::*;

use ecs_launch::domain::services::cluster_bootstrap_script;
use ecs_launch::domain::value_objects::target_group_name;

fn resource_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9-]{1,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the target group name is `<cluster>-<family>`, nothing more.
    #[test]
    fn property_target_group_name_joins_cluster_and_family(
        cluster in resource_name(),
        family in resource_name(),
    ) {
        let name = target_group_name(&cluster, &family);

        prop_assert!(name.starts_with(&cluster));
        prop_assert!(name.ends_with(&family));
        prop_assert_eq!(name.len(), cluster.len() + family.len() + 1);
        prop_assert_eq!(name.as_bytes()[cluster.len()], b'-');
    }

    /// PROPERTY: the bootstrap script registers the instance with exactly
    /// the named cluster.
    #[test]
    fn property_bootstrap_script_names_cluster(cluster in resource_name()) {
        let script = cluster_bootstrap_script(&cluster);

        prop_assert!(script.starts_with("#!/bin/bash\n"));
        let expected = format!("ECS_CLUSTER={} ", cluster);
        prop_assert!(script.contains(&expected));
        prop_assert_eq!(script.lines().count(), 2);
    }
}
