//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod provision_events;
pub mod resource_client;
pub mod task_converter;

pub use provision_events::{NoopEventSink, ProvisionEvent, ProvisionEventSink};
pub use resource_client::{
    CreateCluster, CreateListener, CreateLoadBalancer, CreateService, CreateTargetGroup,
    LaunchInstances, Operation, ProviderError, ProviderErrorKind, ProviderResponse,
    ResourceClient,
};
pub use task_converter::{ConversionError, ConversionErrorKind, TaskConverter};
