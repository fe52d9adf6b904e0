use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use sriyan_core::domain::{
    entities::server_nodes::ServerNodeEntity, repositories::server_nodes::ServerNodeRepository,
    value_objects::server_nodes::ServerNodeDto,
};
use std::{ops::RangeInclusive, sync::Arc};
use tracing::{debug, error};

pub const CPU_LOAD_RANGE: RangeInclusive<i32> = 10..=70;
pub const MEMORY_USAGE_RANGE: RangeInclusive<i32> = 25..=75;
pub const NETWORK_USAGE_RANGE: RangeInclusive<i32> = 5..=45;

/// Serves the public status panel. The numbers are a cosmetic simulation, not telemetry.
pub struct ServerStatusUseCase<N>
where
    N: ServerNodeRepository + Send + Sync + 'static,
{
    server_node_repo: Arc<N>,
}

impl<N> ServerStatusUseCase<N>
where
    N: ServerNodeRepository + Send + Sync + 'static,
{
    pub fn new(server_node_repo: Arc<N>) -> Self {
        Self { server_node_repo }
    }

    /// Every call draws fresh metrics; stored nodes are not modified.
    pub async fn list_server_status(&self) -> Result<Vec<ServerNodeDto>> {
        let nodes = self.server_node_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "server_status: failed to list server nodes");
            err
        })?;

        debug!(node_count = nodes.len(), "server_status: simulating live metrics");
        Ok(simulate_fleet(nodes, Utc::now()))
    }
}

fn simulate_fleet(nodes: Vec<ServerNodeEntity>, now: DateTime<Utc>) -> Vec<ServerNodeDto> {
    let mut rng = rand::thread_rng();
    nodes
        .into_iter()
        .map(|node| simulate_live_metrics(node, &mut rng, now).into())
        .collect()
}

/// Replaces the load figures with random values inside the display ranges and stamps `now`.
pub fn simulate_live_metrics<R: Rng>(
    mut node: ServerNodeEntity,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ServerNodeEntity {
    node.cpu_load = rng.gen_range(CPU_LOAD_RANGE);
    node.memory_usage = rng.gen_range(MEMORY_USAGE_RANGE);
    node.network_usage = rng.gen_range(NETWORK_USAGE_RANGE);
    node.last_updated = now;
    node
}
