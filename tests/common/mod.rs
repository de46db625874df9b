//! In-memory ECS inventory used to drive the resolver in tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ecsfind::ecs::{ContainerInstanceHost, EcsApi, Page, TaskBinding};
use ecsfind::{FindError, Result};
use serde::Deserialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub clusters: Vec<Cluster>,
}

fn default_page_size() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cluster {
    pub arn: String,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub container_instances: Vec<ContainerInstance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub arn: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub arn: String,
    pub container_instance: Option<String>,
    /// Listed but gone by the time it is described.
    #[serde(default)]
    pub stopped: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerInstance {
    pub arn: String,
    pub ec2_instance_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: &'static str,
    pub cluster: Option<String>,
    pub ids: Vec<String>,
}

pub struct FixtureEcs {
    inventory: Inventory,
    fail_on: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
}

impl FixtureEcs {
    pub fn from_json(json: serde_json::Value) -> Self {
        let inventory: Inventory =
            serde_json::from_value(json).expect("fixture should deserialize");
        Self {
            inventory,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.operation == operation)
            .collect()
    }

    fn record(&self, operation: &'static str, cluster: Option<&str>, ids: &[String]) -> Result<()> {
        self.calls.lock().unwrap().push(Call {
            operation,
            cluster: cluster.map(str::to_string),
            ids: ids.to_vec(),
        });
        if self.fail_on == Some(operation) {
            return Err(FindError::api(operation, "injected failure"));
        }
        Ok(())
    }

    fn cluster(&self, arn: &str) -> Result<&Cluster> {
        self.inventory
            .clusters
            .iter()
            .find(|c| c.arn == arn)
            .ok_or_else(|| FindError::api("Fixture", format!("cluster {arn} not found")))
    }

    fn page(&self, all: Vec<String>, next_token: Option<String>) -> Page<String> {
        let start = next_token.map(|t| t.parse::<usize>().unwrap()).unwrap_or(0);
        let end = (start + self.inventory.page_size.max(1)).min(all.len());
        Page {
            items: all[start.min(end)..end].to_vec(),
            next_token: (end < all.len()).then(|| end.to_string()),
        }
    }
}

#[async_trait]
impl EcsApi for FixtureEcs {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<String>> {
        self.record("ListClusters", None, &[])?;
        let arns = self.inventory.clusters.iter().map(|c| c.arn.clone()).collect();
        Ok(self.page(arns, next_token))
    }

    async fn list_services(
        &self,
        cluster: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        self.record("ListServices", Some(cluster), &[])?;
        let arns = self
            .cluster(cluster)?
            .services
            .iter()
            .map(|s| s.arn.clone())
            .collect();
        Ok(self.page(arns, next_token))
    }

    async fn list_tasks(
        &self,
        cluster: &str,
        service: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        self.record("ListTasks", Some(cluster), &[service.to_string()])?;
        let arns = self
            .cluster(cluster)?
            .services
            .iter()
            .filter(|s| s.arn == service)
            .flat_map(|s| s.tasks.iter().map(|t| t.arn.clone()))
            .collect();
        Ok(self.page(arns, next_token))
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: Vec<String>,
    ) -> Result<Vec<TaskBinding>> {
        self.record("DescribeTasks", Some(cluster), &task_arns)?;
        let tasks: Vec<&Task> = self
            .cluster(cluster)?
            .services
            .iter()
            .flat_map(|s| s.tasks.iter())
            .filter(|t| !t.stopped)
            .collect();

        // Results come back in reverse inventory order, not request order.
        Ok(tasks
            .into_iter()
            .rev()
            .filter(|t| task_arns.contains(&t.arn))
            .map(|t| TaskBinding {
                task_arn: t.arn.clone(),
                container_instance_arn: t.container_instance.clone(),
            })
            .collect())
    }

    async fn describe_container_instances(
        &self,
        cluster: &str,
        container_instance_arns: Vec<String>,
    ) -> Result<Vec<ContainerInstanceHost>> {
        self.record(
            "DescribeContainerInstances",
            Some(cluster),
            &container_instance_arns,
        )?;
        Ok(self
            .cluster(cluster)?
            .container_instances
            .iter()
            .filter(|ci| container_instance_arns.contains(&ci.arn))
            .map(|ci| ContainerInstanceHost {
                container_instance_arn: ci.arn.clone(),
                ec2_instance_id: ci.ec2_instance_id.clone(),
            })
            .collect())
    }
}
