use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use sriyan_core::{
    domain::{
        repositories::{
            plans::PlanRepository, server_nodes::ServerNodeRepository, staff::StaffRepository,
        },
        value_objects::dashboard::DashboardStatsDto,
    },
    infra::memory::{
        memory_store::MemoryStore,
        repositories::{plans::PlanMemory, server_nodes::ServerNodeMemory, staff::StaffMemory},
    },
};

use crate::{
    auth::AuthUser,
    axum_http::{api_response::ApiResponse, error_responses::AppError},
    usecases::dashboard::DashboardUseCase,
};

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let dashboard_usecase = DashboardUseCase::new(
        Arc::new(PlanMemory::new(Arc::clone(&store))),
        Arc::new(StaffMemory::new(Arc::clone(&store))),
        Arc::new(ServerNodeMemory::new(store)),
    );

    Router::new()
        .route(
            "/dashboard",
            get(dashboard::<PlanMemory, StaffMemory, ServerNodeMemory>),
        )
        .with_state(Arc::new(dashboard_usecase))
}

/// The gate rejects non-admin sessions before this runs.
pub async fn dashboard<P, S, N>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<P, S, N>>>,
    _admin: AuthUser,
) -> Result<ApiResponse<DashboardStatsDto>, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
    S: StaffRepository + Send + Sync + 'static,
    N: ServerNodeRepository + Send + Sync + 'static,
{
    let stats = dashboard_usecase
        .stats()
        .await
        .map_err(|_| AppError::Internal("Failed to fetch dashboard stats".to_string()))?;

    Ok(ApiResponse::ok(stats))
}
