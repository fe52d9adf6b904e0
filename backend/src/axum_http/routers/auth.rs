use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
};
use sriyan_core::{
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{LoginModel, UserDto},
    },
    infra::memory::{memory_store::MemoryStore, repositories::users::UserMemory},
};
use tracing::info;

use crate::{
    auth::{AuthUser, session::SessionManager},
    axum_http::{api_response::ApiResponse, error_responses::AppError},
    usecases::auth::{AuthError, AuthUseCase},
};

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let user_repository = UserMemory::new(store);
    let auth_usecase = AuthUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/login", post(login::<UserMemory>))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(Arc::new(auth_usecase))
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => AppError::BadRequest(err.to_string()),
            AuthError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AuthError::Internal(_) => AppError::Internal("Login failed".to_string()),
        }
    }
}

pub async fn login<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    Extension(sessions): Extension<Arc<SessionManager>>,
    body: Result<Json<LoginModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    U: UserRepository + Send + Sync + 'static,
{
    let Json(login_model) = body?;
    let user = auth_usecase.login(login_model).await?;

    let jar = sessions.start(user.clone());
    Ok((jar, ApiResponse::ok(user)))
}

pub async fn logout(
    Extension(sessions): Extension<Arc<SessionManager>>,
    auth: AuthUser,
    headers: HeaderMap,
) -> impl IntoResponse {
    let jar = sessions.end(&headers);
    info!(user_id = %auth.user.id, session_id = %auth.session_id, "auth: logged out");

    (jar, ApiResponse::done())
}

pub async fn me(auth: AuthUser) -> ApiResponse<UserDto> {
    ApiResponse::ok(auth.user)
}
