use crate::ecs::api::{ContainerInstanceHost, EcsApi, Page, TaskBinding};
use crate::{FindConfig, FindError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecs::config::Region;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::Failure;
use aws_sdk_ecs::Client;
use tracing::{debug, info, warn};

pub struct EcsClient {
    client: Client,
}

impl EcsClient {
    /// Builds a client from the ambient AWS configuration (shared config
    /// files, environment, instance metadata), applying the profile and
    /// region overrides from `config`.
    pub async fn from_env(config: &FindConfig) -> Result<Self> {
        debug!("Initializing ECS client");

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let region = sdk_config.region().ok_or_else(|| {
            FindError::Session("no AWS region configured; set AWS_REGION or pass --region".into())
        })?;
        if sdk_config.credentials_provider().is_none() {
            return Err(FindError::Session("no AWS credentials provider available".into()));
        }

        info!("Using AWS region {}", region);

        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }
}

fn log_failures(operation: &str, cluster: &str, failures: &[Failure]) {
    for failure in failures {
        warn!(
            "{} in {} skipped {}: {} {}",
            operation,
            cluster,
            failure.arn().unwrap_or("<unknown>"),
            failure.reason().unwrap_or("unknown reason"),
            failure.detail().unwrap_or_default()
        );
    }
}

#[async_trait]
impl EcsApi for EcsClient {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<String>> {
        let out = self
            .client
            .list_clusters()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| FindError::api("ListClusters", DisplayErrorContext(e).to_string()))?;

        Ok(Page {
            items: out.cluster_arns().to_vec(),
            next_token: out.next_token().map(str::to_string),
        })
    }

    async fn list_services(
        &self,
        cluster: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        let out = self
            .client
            .list_services()
            .cluster(cluster)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| FindError::api("ListServices", DisplayErrorContext(e).to_string()))?;

        Ok(Page {
            items: out.service_arns().to_vec(),
            next_token: out.next_token().map(str::to_string),
        })
    }

    async fn list_tasks(
        &self,
        cluster: &str,
        service: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        let out = self
            .client
            .list_tasks()
            .cluster(cluster)
            .service_name(service)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| FindError::api("ListTasks", DisplayErrorContext(e).to_string()))?;

        Ok(Page {
            items: out.task_arns().to_vec(),
            next_token: out.next_token().map(str::to_string),
        })
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: Vec<String>,
    ) -> Result<Vec<TaskBinding>> {
        let out = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(task_arns))
            .send()
            .await
            .map_err(|e| FindError::api("DescribeTasks", DisplayErrorContext(e).to_string()))?;

        log_failures("DescribeTasks", cluster, out.failures());

        Ok(out
            .tasks()
            .iter()
            .filter_map(|task| {
                Some(TaskBinding {
                    task_arn: task.task_arn()?.to_string(),
                    container_instance_arn: task.container_instance_arn().map(str::to_string),
                })
            })
            .collect())
    }

    async fn describe_container_instances(
        &self,
        cluster: &str,
        container_instance_arns: Vec<String>,
    ) -> Result<Vec<ContainerInstanceHost>> {
        let out = self
            .client
            .describe_container_instances()
            .cluster(cluster)
            .set_container_instances(Some(container_instance_arns))
            .send()
            .await
            .map_err(|e| {
                FindError::api(
                    "DescribeContainerInstances",
                    DisplayErrorContext(e).to_string(),
                )
            })?;

        log_failures("DescribeContainerInstances", cluster, out.failures());

        Ok(out
            .container_instances()
            .iter()
            .filter_map(|instance| {
                Some(ContainerInstanceHost {
                    container_instance_arn: instance.container_instance_arn()?.to_string(),
                    ec2_instance_id: instance.ec2_instance_id().map(str::to_string),
                })
            })
            .collect())
    }
}
