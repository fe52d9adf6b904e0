use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{
        StatusCode,
        header::{ALLOW, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use super::api_response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The message is what the client sees; the cause is logged where it happened.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "http: rejected request body");
        AppError::BadRequest("Invalid request body".to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(reason = %rejection.body_text(), "http: rejected query string");
        AppError::BadRequest("Invalid query string".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::failure(self.to_string()));

        (status, body).into_response()
    }
}

/// Rewrites error responses produced outside the handlers (method routing, timeout,
/// body limit) into the envelope. Bodies that are already JSON pass through.
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if is_json {
        return response;
    }

    let message = status.canonical_reason().unwrap_or("Request failed");
    let mut enveloped = (status, Json(ApiResponse::failure(message))).into_response();
    if let Some(allow) = response.headers().get(ALLOW) {
        enveloped.headers_mut().insert(ALLOW, allow.clone());
    }

    enveloped
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn plain_text_errors_are_enveloped() {
        let bare = Response::builder()
            .status(StatusCode::PAYLOAD_TOO_LARGE)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Body::from("length limit exceeded"))
            .unwrap();

        let response = envelope_bare_errors(bare).await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "error": "Payload Too Large" })
        );
    }

    #[tokio::test]
    async fn json_errors_and_successes_pass_through() {
        let already = AppError::NotFound("Plan not found".to_string()).into_response();
        let response = envelope_bare_errors(already).await;
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "error": "Plan not found" })
        );

        let ok = Response::new(Body::from("OK"));
        assert_eq!(envelope_bare_errors(ok).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn method_not_allowed_keeps_allow_header() {
        let bare = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(ALLOW, "GET,HEAD,POST")
            .body(Body::empty())
            .unwrap();

        let response = envelope_bare_errors(bare).await;

        assert_eq!(response.headers().get(ALLOW).unwrap(), "GET,HEAD,POST");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "error": "Method Not Allowed" })
        );
    }
}
