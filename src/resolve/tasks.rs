use crate::ecs::{EcsApi, ServiceRecord, TaskRecord};
use crate::resolve::batch::describe_by_cluster;
use crate::resolve::pagination::collect_pages;
use crate::{FindError, Result};
use tracing::{debug, info};

fn task_arn(task: &TaskRecord) -> &str {
    &task.task_arn
}

/// Lists the tasks of every service, then describes them per cluster to learn
/// which container instance each one is placed on.
///
/// Tasks without a placement (Fargate) come back with no container instance.
pub async fn resolve_tasks<A>(
    api: &A,
    services: &[ServiceRecord],
    batch_size: usize,
) -> Result<Vec<TaskRecord>>
where
    A: EcsApi + ?Sized,
{
    let mut listed = Vec::new();
    for service in services {
        let cluster = service.cluster_arn.as_str();
        let service_arn = service.service_arn.as_str();
        let task_arns =
            collect_pages(move |token| api.list_tasks(cluster, service_arn, token)).await?;
        debug!("Service {} has {} tasks", service_arn, task_arns.len());

        listed.extend(
            task_arns
                .into_iter()
                .map(|arn| TaskRecord::listed(service.clone(), arn)),
        );
    }
    info!("Listed {} tasks across {} services", listed.len(), services.len());

    let described = describe_by_cluster(listed, task_arn, batch_size, |cluster, arns| async move {
        let bindings = api.describe_tasks(&cluster, arns).await?;
        Ok::<_, FindError>(
            bindings
                .into_iter()
                .map(|binding| (binding.task_arn, binding.container_instance_arn))
                .collect::<Vec<_>>(),
        )
    })
    .await?;

    Ok(described
        .into_iter()
        .map(|(task, container_instance_arn)| task.bind(container_instance_arn))
        .collect())
}
