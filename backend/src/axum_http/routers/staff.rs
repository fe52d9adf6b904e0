use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use sriyan_core::{
    domain::{
        repositories::staff::StaffRepository,
        value_objects::staff::{InsertStaffModel, StaffMemberDto, UpdateStaffModel},
    },
    infra::memory::{memory_store::MemoryStore, repositories::staff::StaffMemory},
};

use super::parse_id;
use crate::{
    auth::AuthUser,
    axum_http::{
        api_response::{self, ApiResponse},
        error_responses::AppError,
    },
    usecases::staff::{StaffError, StaffUseCase},
};

const STAFF_NOT_FOUND: &str = "Staff member not found";

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let staff_repository = StaffMemory::new(store);
    let staff_usecase = StaffUseCase::new(Arc::new(staff_repository));

    Router::new()
        .route(
            "/",
            get(list_staff::<StaffMemory>).post(create_staff_member::<StaffMemory>),
        )
        .route(
            "/:id",
            get(get_staff_member::<StaffMemory>)
                .put(update_staff_member::<StaffMemory>)
                .delete(delete_staff_member::<StaffMemory>),
        )
        .with_state(Arc::new(staff_usecase))
}

fn failure(err: StaffError, context: &str) -> AppError {
    match err {
        StaffError::NotFound => AppError::NotFound(err.to_string()),
        StaffError::Internal(_) => AppError::Internal(context.to_string()),
    }
}

pub async fn list_staff<S>(
    State(staff_usecase): State<Arc<StaffUseCase<S>>>,
) -> Result<ApiResponse<Vec<StaffMemberDto>>, AppError>
where
    S: StaffRepository + Send + Sync + 'static,
{
    let staff = staff_usecase
        .list_staff()
        .await
        .map_err(|err| failure(err, "Failed to fetch staff"))?;

    Ok(ApiResponse::ok(staff))
}

pub async fn get_staff_member<S>(
    State(staff_usecase): State<Arc<StaffUseCase<S>>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<StaffMemberDto>, AppError>
where
    S: StaffRepository + Send + Sync + 'static,
{
    let staff_id = parse_id(&id, STAFF_NOT_FOUND)?;
    let member = staff_usecase
        .get_staff_member(staff_id)
        .await
        .map_err(|err| failure(err, "Failed to fetch staff member"))?;

    Ok(ApiResponse::ok(member))
}

pub async fn create_staff_member<S>(
    State(staff_usecase): State<Arc<StaffUseCase<S>>>,
    _auth: AuthUser,
    body: Result<Json<InsertStaffModel>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: StaffRepository + Send + Sync + 'static,
{
    let Json(insert_staff_model) = body?;
    let member = staff_usecase
        .create_staff_member(insert_staff_model)
        .await
        .map_err(|err| failure(err, "Failed to create staff member"))?;

    Ok(api_response::created(member))
}

pub async fn update_staff_member<S>(
    State(staff_usecase): State<Arc<StaffUseCase<S>>>,
    _auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<UpdateStaffModel>, JsonRejection>,
) -> Result<ApiResponse<StaffMemberDto>, AppError>
where
    S: StaffRepository + Send + Sync + 'static,
{
    let staff_id = parse_id(&id, STAFF_NOT_FOUND)?;
    let Json(update_staff_member_model) = body?;
    let member = staff_usecase
        .update_staff_member(staff_id, update_staff_member_model)
        .await
        .map_err(|err| failure(err, "Failed to update staff member"))?;

    Ok(ApiResponse::ok(member))
}

pub async fn delete_staff_member<S>(
    State(staff_usecase): State<Arc<StaffUseCase<S>>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    S: StaffRepository + Send + Sync + 'static,
{
    let staff_id = parse_id(&id, STAFF_NOT_FOUND)?;
    staff_usecase
        .delete_staff_member(staff_id)
        .await
        .map_err(|err| failure(err, "Failed to delete staff member"))?;

    Ok(ApiResponse::done())
}
