//! Provision Use Case
//!
//! Runs the provisioning pipeline:
//! 1. Convert the compose file to a task definition
//! 2. Register the task definition under the requested family
//! 3. Create the load balancer
//! 4. Create the cluster
//! 5. Launch instances into every subnet
//! 6. Create the target group
//! 7. Create the listener
//! 8. Create the service
//!
//! Steps run strictly in order and the first failure stops the run. There
//! is no rollback: resources created before the failure stay live and are
//! handed back in the failure's ledger. Instances are not awaited; the
//! service assumes they eventually join the cluster.

use crate::config::StaticConfig;
use crate::domain::entities::{CreatedResource, ResourceKind, ResourceLedger, TaskDefinition};
use crate::domain::ports::{
    CreateCluster, CreateListener, CreateLoadBalancer, CreateService, CreateTargetGroup,
    LaunchInstances, NoopEventSink, Operation, ProviderResponse, ProvisionEvent,
    ProvisionEventSink, ResourceClient, TaskConverter,
};
use crate::domain::services::cluster_bootstrap_script;
use crate::domain::value_objects::{target_group_name, Step};
use crate::error::ProvisionError;

use super::options::ProvisionParams;
use super::result::{ProvisionFailure, ProvisionReport};

const LOAD_BALANCER_ARN: &str = "/LoadBalancers/0/LoadBalancerArn";
const TARGET_GROUP_ARN: &str = "/TargetGroups/0/TargetGroupArn";
const TASK_DEFINITION_ARN: &str = "/taskDefinition/taskDefinitionArn";
const CLUSTER_ARN: &str = "/cluster/clusterArn";
const LISTENER_ARN: &str = "/Listeners/0/ListenerArn";
const SERVICE_ARN: &str = "/service/serviceArn";

/// Provision use case - orchestrates the provisioning pipeline
///
/// Parameterized by its ports so tests can substitute a stub converter and
/// a recording resource client.
pub struct ProvisionUseCase<TC, RC>
where
    TC: TaskConverter,
    RC: ResourceClient,
{
    converter: TC,
    client: RC,
    config: StaticConfig,
}

/// Per-run state: the ledger and where progress goes
struct Run<'a> {
    ledger: ResourceLedger,
    events: &'a dyn ProvisionEventSink,
}

impl Run<'_> {
    fn complete(&mut self, step: Step, resource: Option<CreatedResource>) {
        if let Some(resource) = &resource {
            self.ledger.record(resource.clone());
        }
        self.events
            .on_event(ProvisionEvent::StepCompleted { step, resource });
    }
}

type StepResult<T> = Result<T, (Step, ProvisionError)>;

fn at(step: Step) -> impl FnOnce(ProvisionError) -> (Step, ProvisionError) {
    move |error| (step, error)
}

fn required(
    response: &ProviderResponse,
    operation: Operation,
    pointer: &str,
) -> Result<String, ProvisionError> {
    response
        .str_at(pointer)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ProvisionError::MissingField {
            operation,
            field: pointer.to_string(),
        })
}

fn optional(response: &ProviderResponse, pointer: &str) -> Option<String> {
    response.str_at(pointer).map(str::to_string)
}

impl<TC, RC> ProvisionUseCase<TC, RC>
where
    TC: TaskConverter,
    RC: ResourceClient,
{
    pub fn new(converter: TC, client: RC, config: StaticConfig) -> Self {
        Self {
            converter,
            client,
            config,
        }
    }

    pub fn config(&self) -> &StaticConfig {
        &self.config
    }

    pub fn client(&self) -> &RC {
        &self.client
    }

    pub fn converter(&self) -> &TC {
        &self.converter
    }

    /// Execute the pipeline silently
    pub fn execute(&self, params: &ProvisionParams) -> Result<ProvisionReport, ProvisionFailure> {
        self.execute_with_events(params, &NoopEventSink)
    }

    /// Execute the pipeline, reporting each completed step to `events`
    /// before the next one starts.
    pub fn execute_with_events(
        &self,
        params: &ProvisionParams,
        events: &dyn ProvisionEventSink,
    ) -> Result<ProvisionReport, ProvisionFailure> {
        events.on_event(ProvisionEvent::Started {
            compose_file: params.compose_file.clone(),
            cluster_name: params.cluster_name.clone(),
            service_name: params.service_name.clone(),
        });

        let mut run = Run {
            ledger: ResourceLedger::new(),
            events,
        };

        match self.run_pipeline(params, &mut run) {
            Ok(report) => {
                events.on_event(ProvisionEvent::Completed {
                    resources: report.resources.clone(),
                });
                Ok(report)
            }
            Err((step, error)) => {
                events.on_event(ProvisionEvent::Failed {
                    step,
                    error: error.to_string(),
                });
                Err(ProvisionFailure {
                    step,
                    error,
                    orphaned: run.ledger,
                })
            }
        }
    }

    fn run_pipeline(&self, params: &ProvisionParams, run: &mut Run<'_>) -> StepResult<ProvisionReport> {
        // Step 1
        let mut definition = self.convert(params).map_err(at(Step::Convert))?;
        run.complete(Step::Convert, None);

        // Step 2
        let registered = self
            .register(params, &mut definition)
            .map_err(at(Step::RegisterTaskDefinition))?;
        run.complete(Step::RegisterTaskDefinition, Some(registered));

        // Step 3
        let load_balancer = self
            .create_load_balancer(params)
            .map_err(at(Step::CreateLoadBalancer))?;
        let load_balancer_arn = load_balancer.handle().to_string();
        run.complete(Step::CreateLoadBalancer, Some(load_balancer));

        // Step 4
        let cluster = self
            .create_cluster(params)
            .map_err(at(Step::CreateCluster))?;
        run.complete(Step::CreateCluster, Some(cluster));

        // Step 5
        let instances_launched = self
            .launch_instances(params, run)
            .map_err(at(Step::LaunchInstances))?;
        run.complete(Step::LaunchInstances, None);

        // Step 6
        let target_group = self
            .create_target_group(params)
            .map_err(at(Step::CreateTargetGroup))?;
        let target_group_arn = target_group.handle().to_string();
        run.complete(Step::CreateTargetGroup, Some(target_group));

        // Step 7
        let listener = self
            .create_listener(params, &load_balancer_arn, &target_group_arn)
            .map_err(at(Step::CreateListener))?;
        run.complete(Step::CreateListener, Some(listener));

        // Step 8
        let service = self
            .create_service(params, &target_group_arn)
            .map_err(at(Step::CreateService))?;
        run.complete(Step::CreateService, Some(service));

        Ok(ProvisionReport {
            family: params.family.clone(),
            cluster_name: params.cluster_name.clone(),
            service_name: params.service_name.clone(),
            load_balancer_arn,
            target_group_arn,
            instances_launched,
            resources: run.ledger.clone(),
        })
    }

    fn convert(&self, params: &ProvisionParams) -> Result<TaskDefinition, ProvisionError> {
        let definition = self.converter.convert(&params.compose_file)?;

        // Checked here so a typo fails before anything is created remotely
        if !definition.has_container(&params.container_name) {
            return Err(ProvisionError::UnknownContainer {
                container: params.container_name.clone(),
                available: definition
                    .container_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        }

        Ok(definition)
    }

    fn register(
        &self,
        params: &ProvisionParams,
        definition: &mut TaskDefinition,
    ) -> Result<CreatedResource, ProvisionError> {
        definition.inject_identity(&params.family, &params.task_role_arn);
        let response = self.client.register_task_definition(definition)?;

        // The revision ARN is not needed downstream: the service refers to
        // the family and the provider resolves its latest revision.
        Ok(CreatedResource::new(
            ResourceKind::TaskDefinition,
            &params.family,
            optional(&response, TASK_DEFINITION_ARN),
        ))
    }

    fn create_load_balancer(
        &self,
        params: &ProvisionParams,
    ) -> Result<CreatedResource, ProvisionError> {
        let request = CreateLoadBalancer {
            name: params.load_balancer_name.clone(),
            subnets: self.config.network.subnets.clone(),
            security_groups: self.config.network.security_groups.clone(),
        };
        let response = self.client.create_load_balancer(&request)?;
        let arn = required(&response, Operation::CreateLoadBalancer, LOAD_BALANCER_ARN)?;

        Ok(CreatedResource::new(
            ResourceKind::LoadBalancer,
            &params.load_balancer_name,
            Some(arn),
        ))
    }

    fn create_cluster(&self, params: &ProvisionParams) -> Result<CreatedResource, ProvisionError> {
        let request = CreateCluster {
            name: params.cluster_name.clone(),
        };
        let response = self.client.create_cluster(&request)?;

        Ok(CreatedResource::new(
            ResourceKind::Cluster,
            &params.cluster_name,
            optional(&response, CLUSTER_ARN),
        ))
    }

    /// One launch call per subnet, sequentially. Returns the number of
    /// instances requested.
    fn launch_instances(
        &self,
        params: &ProvisionParams,
        run: &mut Run<'_>,
    ) -> Result<u32, ProvisionError> {
        let cluster = &self.config.cluster;
        let user_data = cluster_bootstrap_script(&params.cluster_name);
        let mut launched: u32 = 0;

        for subnet in &self.config.network.subnets {
            let request = LaunchInstances {
                image_id: cluster.ami_id.clone(),
                subnet_id: subnet.clone(),
                security_groups: self.config.network.security_groups.clone(),
                count: cluster.instances_per_subnet,
                instance_type: cluster.instance_type.clone(),
                instance_profile_arn: cluster.instance_profile_arn.clone(),
                key_pair: cluster.key_pair.clone(),
                user_data: user_data.clone(),
            };
            let response = self.client.launch_instances(&request)?;

            let instance_ids: Vec<&str> = response
                .document()
                .get("Instances")
                .and_then(|v| v.as_array())
                .map(|instances| {
                    instances
                        .iter()
                        .filter_map(|i| i.get("InstanceId").and_then(|id| id.as_str()))
                        .collect()
                })
                .unwrap_or_default();
            let ids = Some(instance_ids.join(",")).filter(|s| !s.is_empty());

            run.ledger
                .record(CreatedResource::new(ResourceKind::Instances, subnet, ids));
            launched = launched.saturating_add(cluster.instances_per_subnet);

            if run.events.wants_detailed_events() {
                run.events.on_event(ProvisionEvent::InstancesLaunched {
                    subnet: subnet.clone(),
                    count: cluster.instances_per_subnet,
                });
            }
        }

        Ok(launched)
    }

    fn create_target_group(
        &self,
        params: &ProvisionParams,
    ) -> Result<CreatedResource, ProvisionError> {
        let name = target_group_name(&params.cluster_name, &params.family);
        let request = CreateTargetGroup {
            name: name.clone(),
            protocol: params.protocol,
            port: params.port,
            vpc_id: self.config.network.vpc_id.clone(),
        };
        let response = self.client.create_target_group(&request)?;
        let arn = required(&response, Operation::CreateTargetGroup, TARGET_GROUP_ARN)?;

        Ok(CreatedResource::new(ResourceKind::TargetGroup, name, Some(arn)))
    }

    fn create_listener(
        &self,
        params: &ProvisionParams,
        load_balancer_arn: &str,
        target_group_arn: &str,
    ) -> Result<CreatedResource, ProvisionError> {
        let request = CreateListener {
            load_balancer_arn: load_balancer_arn.to_string(),
            protocol: params.protocol,
            port: params.port,
            target_group_arn: target_group_arn.to_string(),
        };
        let response = self.client.create_listener(&request)?;

        Ok(CreatedResource::new(
            ResourceKind::Listener,
            format!("{}:{}", params.protocol, params.port),
            optional(&response, LISTENER_ARN),
        ))
    }

    fn create_service(
        &self,
        params: &ProvisionParams,
        target_group_arn: &str,
    ) -> Result<CreatedResource, ProvisionError> {
        let request = CreateService {
            cluster: params.cluster_name.clone(),
            service_name: params.service_name.clone(),
            task_definition: params.family.clone(),
            role: self.config.service.service_role_arn.clone(),
            target_group_arn: target_group_arn.to_string(),
            container_name: params.container_name.clone(),
            container_port: params.port,
            desired_count: params.task_count,
        };
        let response = self.client.create_service(&request)?;

        Ok(CreatedResource::new(
            ResourceKind::Service,
            &params.service_name,
            optional(&response, SERVICE_ARN),
        ))
    }
}
