use crate::ecs::{EcsApi, HostRecord, TaskRecord};
use crate::resolve::batch::describe_by_cluster;
use crate::{FindError, Result};
use tracing::{info, warn};

fn container_instance_arn(task: &TaskRecord) -> &str {
    task.container_instance_arn.as_deref().unwrap_or_default()
}

/// Describes the container instances the tasks run on and emits one
/// `HostRecord` per task, so a host running several matched tasks shows up
/// once for each of them.
pub async fn resolve_hosts<A>(
    api: &A,
    tasks: Vec<TaskRecord>,
    batch_size: usize,
) -> Result<Vec<HostRecord>>
where
    A: EcsApi + ?Sized,
{
    let (placed, unplaced): (Vec<_>, Vec<_>) = tasks
        .into_iter()
        .partition(|task| task.container_instance_arn.is_some());

    for task in &unplaced {
        warn!(
            "Task {} of {} has no container instance, skipping",
            task.task_arn, task.service.service_arn
        );
    }

    let described = describe_by_cluster(
        placed,
        container_instance_arn,
        batch_size,
        |cluster, arns| async move {
            let instances = api.describe_container_instances(&cluster, arns).await?;
            Ok::<_, FindError>(
                instances
                    .into_iter()
                    .map(|instance| (instance.container_instance_arn, instance.ec2_instance_id))
                    .collect::<Vec<_>>(),
            )
        },
    )
    .await?;

    let mut hosts = Vec::with_capacity(described.len());
    for (task, ec2_instance_id) in described {
        match ec2_instance_id.and_then(|id| HostRecord::from_task(&task, id)) {
            Some(host) => hosts.push(host),
            None => warn!(
                "Container instance {} has no EC2 instance, skipping task {}",
                container_instance_arn(&task),
                task.task_arn
            ),
        }
    }

    info!("Resolved {} hosts", hosts.len());
    Ok(hosts)
}
