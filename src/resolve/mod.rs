//! The cluster → service → task → container instance → host walk.
//!
//! Each stage runs to completion before the next starts and any remote
//! failure aborts the whole walk, so callers either get every resolved chain
//! or an error.

pub mod batch;
pub mod hosts;
pub mod pagination;
pub mod services;
pub mod tasks;

pub use hosts::resolve_hosts;
pub use services::search_services;
pub use tasks::resolve_tasks;

use crate::ecs::{EcsApi, HostRecord};
use crate::{FindConfig, Result};
use tracing::info;

pub async fn locate<A>(api: &A, config: &FindConfig) -> Result<Vec<HostRecord>>
where
    A: EcsApi + ?Sized,
{
    let services = search_services(api, &config.query).await?;
    if services.is_empty() {
        info!("No services match {:?}", config.query);
        return Ok(Vec::new());
    }

    let tasks = resolve_tasks(api, &services, config.batch_size).await?;
    resolve_hosts(api, tasks, config.batch_size).await
}
