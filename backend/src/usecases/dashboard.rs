use anyhow::Result;
use sriyan_core::domain::{
    repositories::{
        plans::PlanRepository, server_nodes::ServerNodeRepository, staff::StaffRepository,
    },
    value_objects::dashboard::DashboardStatsDto,
};
use std::sync::Arc;
use tracing::{error, info};

/// Advertised uptime shown on the admin dashboard; not measured.
pub const ADVERTISED_UPTIME: &str = "99.9%";

pub struct DashboardUseCase<P, S, N>
where
    P: PlanRepository + Send + Sync + 'static,
    S: StaffRepository + Send + Sync + 'static,
    N: ServerNodeRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    staff_repo: Arc<S>,
    server_node_repo: Arc<N>,
}

impl<P, S, N> DashboardUseCase<P, S, N>
where
    P: PlanRepository + Send + Sync + 'static,
    S: StaffRepository + Send + Sync + 'static,
    N: ServerNodeRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, staff_repo: Arc<S>, server_node_repo: Arc<N>) -> Self {
        Self {
            plan_repo,
            staff_repo,
            server_node_repo,
        }
    }

    pub async fn stats(&self) -> Result<DashboardStatsDto> {
        let total_plans = self.plan_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "dashboard: failed to count plans");
            err
        })?;
        let total_staff = self.staff_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "dashboard: failed to count staff");
            err
        })?;
        let total_servers = self.server_node_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "dashboard: failed to count server nodes");
            err
        })?;

        let stats = DashboardStatsDto {
            total_plans: total_plans.len(),
            total_staff: total_staff.len(),
            total_servers: total_servers.len(),
            uptime: ADVERTISED_UPTIME.to_string(),
        };

        info!(
            total_plans = stats.total_plans,
            total_staff = stats.total_staff,
            total_servers = stats.total_servers,
            "dashboard: stats computed"
        );
        Ok(stats)
    }
}
