use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use sriyan_core::{
    domain::{
        repositories::server_nodes::ServerNodeRepository,
        value_objects::server_nodes::ServerNodeDto,
    },
    infra::memory::{memory_store::MemoryStore, repositories::server_nodes::ServerNodeMemory},
};

use crate::{
    axum_http::{api_response::ApiResponse, error_responses::AppError},
    usecases::server_status::ServerStatusUseCase,
};

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let server_node_repository = ServerNodeMemory::new(store);
    let server_status_usecase = ServerStatusUseCase::new(Arc::new(server_node_repository));

    Router::new()
        .route("/", get(list_server_status::<ServerNodeMemory>))
        .with_state(Arc::new(server_status_usecase))
}

pub async fn list_server_status<N>(
    State(server_status_usecase): State<Arc<ServerStatusUseCase<N>>>,
) -> Result<ApiResponse<Vec<ServerNodeDto>>, AppError>
where
    N: ServerNodeRepository + Send + Sync + 'static,
{
    let nodes = server_status_usecase
        .list_server_status()
        .await
        .map_err(|_| AppError::Internal("Failed to fetch server status".to_string()))?;

    Ok(ApiResponse::ok(nodes))
}
