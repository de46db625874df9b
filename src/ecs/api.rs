//! The slice of the ECS control plane the resolver talks to.
//!
//! Listing calls are exposed one page at a time so callers decide how to walk
//! the `next_token` chain; describe calls are cluster-scoped and take the
//! identifiers to describe in a single request.

use crate::Result;
use async_trait::async_trait;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

/// A described task and the container instance it is placed on, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBinding {
    pub task_arn: String,
    pub container_instance_arn: Option<String>,
}

/// A described container instance and the EC2 instance backing it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInstanceHost {
    pub container_instance_arn: String,
    pub ec2_instance_id: Option<String>,
}

#[async_trait]
pub trait EcsApi: Send + Sync {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<String>>;

    async fn list_services(&self, cluster: &str, next_token: Option<String>)
        -> Result<Page<String>>;

    async fn list_tasks(
        &self,
        cluster: &str,
        service: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>>;

    /// Identifiers the service reports as failed are left out of the result.
    async fn describe_tasks(&self, cluster: &str, task_arns: Vec<String>)
        -> Result<Vec<TaskBinding>>;

    async fn describe_container_instances(
        &self,
        cluster: &str,
        container_instance_arns: Vec<String>,
    ) -> Result<Vec<ContainerInstanceHost>>;
}
