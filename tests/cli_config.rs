#![cfg(unix)]

mod common;

use std::fs;

use common::{TestEnv, SERVICE_ARGS};

#[test]
fn test_missing_explicit_config_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&[&["--config", "nope.toml"][..], &SERVICE_ARGS[..]].concat());

    assert!(!result.success);
    assert!(result.stderr.contains("nope.toml"), "stderr:\n{}", result.stderr);
    assert!(env.aws_calls().is_empty());
}

#[test]
fn test_empty_subnet_list_is_rejected() {
    let env = TestEnv::new();
    let config = fs::read_to_string(env.path("ecs-launch.toml")).unwrap();
    fs::write(
        env.path("strict.toml"),
        config.replace(r#"subnets = ["subnet-a", "subnet-b"]"#, "subnets = []"),
    )
    .unwrap();

    let result = env.run(&[&["--config", "strict.toml"][..], &SERVICE_ARGS[..]].concat());

    assert!(!result.success);
    assert!(result.stderr.contains("network.subnets"), "stderr:\n{}", result.stderr);
    assert!(env.aws_calls().is_empty());
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let env = TestEnv::new();
    let config = fs::read_to_string(env.path("ecs-launch.toml")).unwrap();
    fs::write(
        env.path("ecs-launch.toml"),
        config.replace("[network]\n", "[network]\nsubnet = \"subnet-typo\"\n"),
    )
    .unwrap();

    let result = env.run(&SERVICE_ARGS);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stderr.contains("ecs-launch.toml:8: unknown config key 'subnet'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'subnets'?"));
}

#[test]
fn test_env_overrides_subnets() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &SERVICE_ARGS,
        &[("ECS_LAUNCH_SUBNETS", "subnet-x, subnet-y, subnet-z")],
    );
    assert!(result.success, "stderr:\n{}", result.stderr);

    let calls = env.aws_calls();
    let subnets: Vec<_> = calls
        .iter()
        .filter(|c| c.name() == "ec2 run-instances")
        .map(|c| c.value_of("--subnet-id").unwrap().to_string())
        .collect();
    assert_eq!(subnets, vec!["subnet-x", "subnet-y", "subnet-z"]);

    let load_balancer = &calls[1];
    let pos = load_balancer.args.iter().position(|a| a == "--subnets").unwrap();
    assert_eq!(
        &load_balancer.args[pos + 1..pos + 4],
        &["subnet-x", "subnet-y", "subnet-z"]
    );
}
