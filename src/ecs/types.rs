use serde::{Deserialize, Serialize};

/// Anything that lives inside a single ECS cluster.
pub trait ClusterScoped {
    fn cluster_arn(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub cluster_arn: String,
    pub service_arn: String,
}

impl ServiceRecord {
    pub fn new(cluster_arn: impl Into<String>, service_arn: impl Into<String>) -> Self {
        Self {
            cluster_arn: cluster_arn.into(),
            service_arn: service_arn.into(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.service_arn.contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub service: ServiceRecord,
    pub task_arn: String,
    pub container_instance_arn: Option<String>,
}

impl TaskRecord {
    /// A freshly listed task, not yet bound to a container instance.
    pub fn listed(service: ServiceRecord, task_arn: impl Into<String>) -> Self {
        Self {
            service,
            task_arn: task_arn.into(),
            container_instance_arn: None,
        }
    }

    pub fn bind(&self, container_instance_arn: Option<String>) -> Self {
        Self {
            service: self.service.clone(),
            task_arn: self.task_arn.clone(),
            container_instance_arn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub service: ServiceRecord,
    pub task_arn: String,
    pub container_instance_arn: String,
    pub ec2_instance_id: String,
}

impl HostRecord {
    /// Returns `None` when the task was never bound to a container instance.
    pub fn from_task(task: &TaskRecord, ec2_instance_id: impl Into<String>) -> Option<Self> {
        Some(Self {
            service: task.service.clone(),
            task_arn: task.task_arn.clone(),
            container_instance_arn: task.container_instance_arn.clone()?,
            ec2_instance_id: ec2_instance_id.into(),
        })
    }

    pub fn cluster_arn(&self) -> &str {
        &self.service.cluster_arn
    }

    pub fn service_arn(&self) -> &str {
        &self.service.service_arn
    }
}

impl ClusterScoped for TaskRecord {
    fn cluster_arn(&self) -> &str {
        &self.service.cluster_arn
    }
}
