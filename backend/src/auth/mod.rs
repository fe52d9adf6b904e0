pub mod session;

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use sriyan_core::domain::value_objects::users::UserDto;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;
use session::{ActiveSession, SessionManager};

/// Paths under this prefix additionally require the admin role.
pub const ADMIN_PATH_PREFIX: &str = "/api/admin";

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub session_id: Uuid,
    pub user: UserDto,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Admin privileges required")]
    Forbidden,
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Unauthenticated => AppError::Unauthorized(err.to_string()),
            GateError::Forbidden => AppError::Forbidden(err.to_string()),
        }
    }
}

/// Admission decision for a request to `path` made by `session`.
pub fn authorize(session: Option<ActiveSession>, path: &str) -> Result<AuthUser, GateError> {
    let session = session.ok_or(GateError::Unauthenticated)?;

    if path.starts_with(ADMIN_PATH_PREFIX) && !session.user.role.is_admin() {
        return Err(GateError::Forbidden);
    }

    Ok(AuthUser {
        session_id: session.session_id,
        user: session.user,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1. Session store is installed as an extension by the HTTP layer
        let sessions = parts
            .extensions
            .get::<Arc<SessionManager>>()
            .cloned()
            .ok_or_else(|| {
                error!("auth: session manager extension missing");
                AppError::Internal("Session store unavailable".to_string())
            })?;

        // 2. Nested routers see a stripped URI, so prefer the original one
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        // 3. Decide
        authorize(sessions.current(&parts.headers), &path).map_err(|err| {
            warn!(%path, reason = %err, "auth: request rejected");
            AppError::from(err)
        })
    }
}
