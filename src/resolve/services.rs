use crate::ecs::{EcsApi, ServiceRecord};
use crate::resolve::pagination::collect_pages;
use crate::Result;
use tracing::{debug, info};

/// Lists every cluster, then every service in each cluster, and keeps the
/// services whose ARN contains `query`.
pub async fn search_services<A>(api: &A, query: &str) -> Result<Vec<ServiceRecord>>
where
    A: EcsApi + ?Sized,
{
    let clusters = collect_pages(move |token| api.list_clusters(token)).await?;
    info!("Found {} clusters", clusters.len());

    let mut services = Vec::new();
    for cluster_arn in &clusters {
        let cluster = cluster_arn.as_str();
        let service_arns = collect_pages(move |token| api.list_services(cluster, token)).await?;
        debug!("Cluster {} has {} services", cluster, service_arns.len());

        services.extend(
            service_arns
                .into_iter()
                .map(|service_arn| ServiceRecord::new(cluster, service_arn))
                .filter(|service| service.matches(query)),
        );
    }

    info!("{} services match {:?}", services.len(), query);
    Ok(services)
}
