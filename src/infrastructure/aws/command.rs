//! AWS CLI argument builders
//!
//! One function per remote operation. Structured parameters are passed as
//! JSON, which the CLI accepts for every list-of-structures option and
//! which needs no shorthand escaping.

use std::path::Path;

use serde_json::json;

use crate::domain::ports::{
    CreateCluster, CreateListener, CreateLoadBalancer, CreateService, CreateTargetGroup,
    LaunchInstances,
};

fn args<const N: usize>(fixed: [&str; N]) -> Vec<String> {
    fixed.iter().map(|s| s.to_string()).collect()
}

/// `ecs register-task-definition`, reading the document from `input`
pub fn register_task_definition(input: &Path) -> Vec<String> {
    let mut out = args(["ecs", "register-task-definition", "--cli-input-json"]);
    out.push(format!("file://{}", input.display()));
    out
}

pub fn create_load_balancer(request: &CreateLoadBalancer) -> Vec<String> {
    let mut out = args(["elbv2", "create-load-balancer", "--name"]);
    out.push(request.name.clone());
    out.push("--subnets".to_string());
    out.extend(request.subnets.iter().cloned());
    out.push("--security-groups".to_string());
    out.extend(request.security_groups.iter().cloned());
    out
}

pub fn create_cluster(request: &CreateCluster) -> Vec<String> {
    let mut out = args(["ecs", "create-cluster", "--cluster-name"]);
    out.push(request.name.clone());
    out
}

pub fn run_instances(request: &LaunchInstances) -> Vec<String> {
    let mut out = args(["ec2", "run-instances", "--image-id"]);
    out.push(request.image_id.clone());
    out.push("--security-group-ids".to_string());
    out.extend(request.security_groups.iter().cloned());
    out.extend([
        "--subnet-id".to_string(),
        request.subnet_id.clone(),
        "--iam-instance-profile".to_string(),
        format!("Arn={}", request.instance_profile_arn),
        // min = max
        "--count".to_string(),
        request.count.to_string(),
        "--instance-type".to_string(),
        request.instance_type.clone(),
        "--user-data".to_string(),
        request.user_data.clone(),
    ]);
    if let Some(key_pair) = &request.key_pair {
        out.push("--key-name".to_string());
        out.push(key_pair.clone());
    }
    out
}

pub fn create_target_group(request: &CreateTargetGroup) -> Vec<String> {
    vec![
        "elbv2".to_string(),
        "create-target-group".to_string(),
        "--name".to_string(),
        request.name.clone(),
        "--protocol".to_string(),
        request.protocol.to_string(),
        "--port".to_string(),
        request.port.to_string(),
        "--vpc-id".to_string(),
        request.vpc_id.clone(),
    ]
}

pub fn create_listener(request: &CreateListener) -> Vec<String> {
    let actions = json!([{
        "Type": "forward",
        "TargetGroupArn": request.target_group_arn,
    }]);
    vec![
        "elbv2".to_string(),
        "create-listener".to_string(),
        "--load-balancer-arn".to_string(),
        request.load_balancer_arn.clone(),
        "--protocol".to_string(),
        request.protocol.to_string(),
        "--port".to_string(),
        request.port.to_string(),
        "--default-actions".to_string(),
        actions.to_string(),
    ]
}

pub fn create_service(request: &CreateService) -> Vec<String> {
    let load_balancers = json!([{
        "targetGroupArn": request.target_group_arn,
        "containerName": request.container_name,
        "containerPort": request.container_port,
    }]);
    vec![
        "ecs".to_string(),
        "create-service".to_string(),
        "--cluster".to_string(),
        request.cluster.clone(),
        "--service-name".to_string(),
        request.service_name.clone(),
        "--task-definition".to_string(),
        request.task_definition.clone(),
        "--role".to_string(),
        request.role.clone(),
        "--load-balancers".to_string(),
        load_balancers.to_string(),
        "--desired-count".to_string(),
        request.desired_count.to_string(),
    ]
}
