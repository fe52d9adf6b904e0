use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use sriyan_core::{
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{InsertPlanModel, PlanDto, UpdatePlanModel},
    },
    infra::memory::{memory_store::MemoryStore, repositories::plans::PlanMemory},
};

use super::parse_id;
use crate::{
    auth::AuthUser,
    axum_http::{
        api_response::{self, ApiResponse},
        error_responses::AppError,
    },
    usecases::plans::{PlanError, PlanUseCase},
};

const PLAN_NOT_FOUND: &str = "Plan not found";

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    #[serde(rename = "type")]
    pub plan_type: Option<String>,
}

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let plan_repository = PlanMemory::new(store);
    let plan_usecase = PlanUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", get(list_plans::<PlanMemory>).post(create_plan::<PlanMemory>))
        .route(
            "/:id",
            get(get_plan::<PlanMemory>)
                .put(update_plan::<PlanMemory>)
                .delete(delete_plan::<PlanMemory>),
        )
        .with_state(Arc::new(plan_usecase))
}

fn failure(err: PlanError, context: &str) -> AppError {
    match err {
        PlanError::NotFound => AppError::NotFound(err.to_string()),
        PlanError::Internal(_) => AppError::Internal(context.to_string()),
    }
}

pub async fn list_plans<P>(
    State(plan_usecase): State<Arc<PlanUseCase<P>>>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<PlanDto>>, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let plans = plan_usecase
        .list_plans(query.plan_type.as_deref())
        .await
        .map_err(|err| failure(err, "Failed to fetch plans"))?;

    Ok(ApiResponse::ok(plans))
}

pub async fn get_plan<P>(
    State(plan_usecase): State<Arc<PlanUseCase<P>>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<PlanDto>, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let plan_id = parse_id(&id, PLAN_NOT_FOUND)?;
    let plan = plan_usecase
        .get_plan(plan_id)
        .await
        .map_err(|err| failure(err, "Failed to fetch plan"))?;

    Ok(ApiResponse::ok(plan))
}

pub async fn create_plan<P>(
    State(plan_usecase): State<Arc<PlanUseCase<P>>>,
    _auth: AuthUser,
    body: Result<Json<InsertPlanModel>, JsonRejection>,
) -> Result<Response, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let Json(insert_plan_model) = body?;
    let plan = plan_usecase
        .create_plan(insert_plan_model)
        .await
        .map_err(|err| failure(err, "Failed to create plan"))?;

    Ok(api_response::created(plan))
}

pub async fn update_plan<P>(
    State(plan_usecase): State<Arc<PlanUseCase<P>>>,
    _auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<UpdatePlanModel>, JsonRejection>,
) -> Result<ApiResponse<PlanDto>, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let plan_id = parse_id(&id, PLAN_NOT_FOUND)?;
    let Json(update_plan_model) = body?;
    let plan = plan_usecase
        .update_plan(plan_id, update_plan_model)
        .await
        .map_err(|err| failure(err, "Failed to update plan"))?;

    Ok(ApiResponse::ok(plan))
}

pub async fn delete_plan<P>(
    State(plan_usecase): State<Arc<PlanUseCase<P>>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let plan_id = parse_id(&id, PLAN_NOT_FOUND)?;
    plan_usecase
        .delete_plan(plan_id)
        .await
        .map_err(|err| failure(err, "Failed to delete plan"))?;

    Ok(ApiResponse::done())
}
