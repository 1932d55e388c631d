//! Resource ledger
//!
//! Records every remote resource the pipeline created, in creation order.
//! Nothing is ever removed: the pipeline has no rollback, so after a failure
//! the ledger is exactly the set of resources left behind.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    TaskDefinition,
    LoadBalancer,
    Cluster,
    Instances,
    TargetGroup,
    Listener,
    Service,
}

impl ResourceKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::TaskDefinition => "task definition",
            ResourceKind::LoadBalancer => "load balancer",
            ResourceKind::Cluster => "cluster",
            ResourceKind::Instances => "instances",
            ResourceKind::TargetGroup => "target group",
            ResourceKind::Listener => "listener",
            ResourceKind::Service => "service",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A resource the provider acknowledged creating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedResource {
    pub kind: ResourceKind,
    /// Operator-facing name (cluster name, subnet for instances, ...)
    pub name: String,
    /// Provider-assigned identifier, when the response carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CreatedResource {
    pub fn new(kind: ResourceKind, name: impl Into<String>, id: Option<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            id,
            created_at: Utc::now(),
        }
    }

    /// Identifier if present, otherwise the name
    pub fn handle(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Append-only record of created resources
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResourceLedger {
    entries: Vec<CreatedResource>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, resource: CreatedResource) {
        self.entries.push(resource);
    }

    pub fn entries(&self) -> &[CreatedResource] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &CreatedResource> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}
