//! Cluster-scoped batch describes.
//!
//! Both describe endpoints only accept identifiers from one cluster per call,
//! so items are grouped by cluster, their distinct identifiers are described
//! in chunks, and every item is paired back with the description of its
//! identifier. Several items may share one identifier (tasks on the same
//! container instance); each of them gets its own pairing.

use crate::ecs::types::ClusterScoped;
use crate::Result;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tracing::debug;

/// Groups items by cluster, keeping clusters in first-seen order and items in
/// input order within each cluster.
pub fn group_by_cluster<R: ClusterScoped>(items: Vec<R>) -> Vec<(String, Vec<R>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<R>)> = Vec::new();

    for item in items {
        match index.get(item.cluster_arn()) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                let cluster = item.cluster_arn().to_string();
                index.insert(cluster.clone(), groups.len());
                groups.push((cluster, vec![item]));
            }
        }
    }

    groups
}

fn distinct_ids<R, K>(items: &[R], id_of: &K) -> Vec<String>
where
    K: Fn(&R) -> &str,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .map(id_of)
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Describes the identifiers of `items` cluster by cluster, at most
/// `batch_size` identifiers per call, and pairs each item with the
/// description of its identifier.
///
/// Items whose identifier is absent from the describe results are dropped.
/// The first failing call aborts the whole operation.
pub async fn describe_by_cluster<R, D, K, F, Fut>(
    items: Vec<R>,
    id_of: K,
    batch_size: usize,
    mut describe: F,
) -> Result<Vec<(R, D)>>
where
    R: ClusterScoped,
    D: Clone,
    K: Fn(&R) -> &str,
    F: FnMut(String, Vec<String>) -> Fut,
    Fut: Future<Output = Result<Vec<(String, D)>>>,
{
    let batch_size = batch_size.max(1);
    let mut resolved = Vec::with_capacity(items.len());

    for (cluster, group) in group_by_cluster(items) {
        let ids = distinct_ids(&group, &id_of);
        let mut described: HashMap<String, D> = HashMap::with_capacity(ids.len());

        for chunk in ids.chunks(batch_size) {
            debug!("Describing {} identifiers in {}", chunk.len(), cluster);
            described.extend(describe(cluster.clone(), chunk.to_vec()).await?);
        }

        for item in group {
            match described.get(id_of(&item)) {
                Some(description) => resolved.push((item, description.clone())),
                None => debug!("No description returned for {} in {}", id_of(&item), cluster),
            }
        }
    }

    Ok(resolved)
}
