//! Common test utilities for ecs-launch CLI tests.
//!
//! `TestEnv` is a temp project directory with fake `docker` and `aws`
//! executables wired in through `ecs-launch.toml`. The fake `aws` answers
//! each operation with a canned response and records every invocation.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Compose-converter output: one `web` container listening on 8080
pub const TASK_DEFINITION: &str = r#"{
  "family": "",
  "containerDefinitions": [
    {
      "name": "web",
      "image": "nginx:latest",
      "memory": 256,
      "essential": true,
      "portMappings": [{ "containerPort": 8080, "hostPort": 80 }]
    }
  ]
}"#;

pub const COMPOSE_FILE: &str = "services:\n  web:\n    image: nginx:latest\n    ports:\n      - \"80:8080\"\n";

const FAKE_AWS: &str = r#"#!/bin/sh
log_dir="$(dirname "$0")/../calls"
n=$(ls "$log_dir" | wc -l | tr -d ' ')
printf '%s\0' "$@" > "$log_dir/$(printf '%03d' "$n").args"

if [ -n "$FAKE_AWS_FAIL_ON" ] && [ "$2" = "$FAKE_AWS_FAIL_ON" ]; then
  echo "An error occurred (AccessDenied) when calling the $2 operation: not allowed" >&2
  exit 254
fi

case "$1 $2" in
  "ecs register-task-definition")
    cp "${4#file://}" "$log_dir/../registered.json"
    echo '{"taskDefinition": {"taskDefinitionArn": "arn:aws:ecs:task-definition/my-family:1"}}' ;;
  "elbv2 create-load-balancer")
    echo '{"LoadBalancers": [{"LoadBalancerArn": "arn:aws:elasticloadbalancing:loadbalancer/app/my-lb/1"}]}' ;;
  "ecs create-cluster")
    echo '{"cluster": {"clusterArn": "arn:aws:ecs:cluster/my-cluster"}}' ;;
  "ec2 run-instances")
    echo '{"Instances": [{"InstanceId": "i-0001"}, {"InstanceId": "i-0002"}]}' ;;
  "elbv2 create-target-group")
    echo '{"TargetGroups": [{"TargetGroupArn": "arn:aws:elasticloadbalancing:targetgroup/tg/1"}]}' ;;
  "elbv2 create-listener")
    echo '{"Listeners": [{"ListenerArn": "arn:aws:elasticloadbalancing:listener/1"}]}' ;;
  "ecs create-service")
    echo '{"service": {"serviceArn": "arn:aws:ecs:service/my-service"}}' ;;
  *)
    echo "unexpected call: $*" >&2
    exit 2 ;;
esac
"#;

/// Result of running the ecs-launch binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// One recorded `aws` invocation
#[derive(Debug, Clone)]
pub struct AwsCall {
    pub args: Vec<String>,
}

impl AwsCall {
    /// `service operation`, e.g. `ecs create-cluster`
    pub fn name(&self) -> String {
        self.args[..2].join(" ")
    }

    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

/// Isolated project directory with fake provider tooling
pub struct TestEnv {
    pub root: TempDir,
    home: PathBuf,
    calls: PathBuf,
}

impl TestEnv {
    /// Two subnets, two instances per subnet
    pub fn new() -> Self {
        Self::with_subnets(&["subnet-a", "subnet-b"], 2)
    }

    pub fn with_subnets(subnets: &[&str], instances_per_subnet: u32) -> Self {
        let root = TempDir::new().unwrap();
        let bin = root.path().join("bin");
        let calls = root.path().join("calls");
        let home = root.path().join("home");
        for dir in [&bin, &calls, &home] {
            fs::create_dir_all(dir).unwrap();
        }

        let fixture = root.path().join("task-definition.json");
        fs::write(&fixture, TASK_DEFINITION).unwrap();
        write_executable(
            &bin.join("docker"),
            &format!("#!/bin/sh\ncat > /dev/null\ncat '{}'\n", fixture.display()),
        );
        write_executable(&bin.join("aws"), FAKE_AWS);

        let subnet_list = subnets
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            root.path().join("ecs-launch.toml"),
            format!(
                r#"[cluster]
ami_id = "ami-1234"
instance_type = "t3.small"
instances_per_subnet = {instances_per_subnet}
instance_profile_arn = "arn:aws:iam::123:instance-profile/ecs"

[network]
vpc_id = "vpc-1234"
subnets = [{subnet_list}]
security_groups = ["sg-1234"]

[service]
service_role_arn = "arn:aws:iam::123:role/ecsServiceRole"

[converter]
program = "{docker}"

[aws]
program = "{aws}"
"#,
                docker = bin.join("docker").display(),
                aws = bin.join("aws").display(),
            ),
        )
        .unwrap();
        fs::write(root.path().join("docker-compose.yml"), COMPOSE_FILE).unwrap();

        Self { root, home, calls }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecs-launch"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for key in [
            "ECS_LAUNCH_AMI",
            "ECS_LAUNCH_INSTANCE_TYPE",
            "ECS_LAUNCH_VPC_ID",
            "ECS_LAUNCH_SUBNETS",
            "ECS_LAUNCH_SECURITY_GROUPS",
            "ECS_LAUNCH_REGION",
            "ECS_LAUNCH_PROFILE",
            "FAKE_AWS_FAIL_ON",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute ecs-launch");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Recorded `aws` invocations, in call order
    pub fn aws_calls(&self) -> Vec<AwsCall> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.calls)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
            .iter()
            .map(|path| {
                let raw = fs::read_to_string(path).unwrap();
                AwsCall {
                    args: raw
                        .split('\0')
                        .filter(|a| !a.is_empty())
                        .map(str::to_string)
                        .collect(),
                }
            })
            .collect()
    }

    /// Task definition document passed to the last registration
    pub fn registered_task_definition(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.path("registered.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    pub fn aws_call_names(&self) -> Vec<String> {
        self.aws_calls().iter().map(AwsCall::name).collect()
    }
}

/// The standard invocation: HTTP on 80 to the `web` container
pub const SERVICE_ARGS: [&str; 7] = [
    "--service-protocol",
    "HTTP",
    "--service-port",
    "80",
    "--service-container",
    "web",
    "docker-compose.yml",
];

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
