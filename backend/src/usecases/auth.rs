use std::sync::Arc;

use axum::http::StatusCode;
use sriyan_core::{
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{LoginModel, UserDto},
    },
    infra::security::password,
};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

pub struct AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
}

impl<U> AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn login(&self, login_model: LoginModel) -> UseCaseResult<UserDto> {
        let (username, password) = match (login_model.username, login_model.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                (username, password)
            }
            _ => {
                warn!("auth: login attempted without credentials");
                return Err(AuthError::MissingCredentials);
            }
        };

        match self.validate_credentials(&username, &password).await? {
            Some(user) => {
                info!(user_id = %user.id, role = %user.role, "auth: login succeeded");
                Ok(user)
            }
            None => {
                warn!(%username, "auth: login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Exact username match plus argon2 verification. The returned user carries no password.
    pub async fn validate_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> UseCaseResult<Option<UserDto>> {
        let Some(user) = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(|err| {
                error!(%username, db_error = ?err, "auth: failed to load user");
                AuthError::Internal(err)
            })?
        else {
            let password = password.to_string();
            tokio::task::spawn_blocking(move || password::verify_decoy(&password))
                .await
                .map_err(|err| AuthError::Internal(err.into()))?;
            return Ok(None);
        };

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || {
            password::verify_password(&password, &password_hash)
        })
        .await
        .map_err(|err| AuthError::Internal(err.into()))?
        .map_err(|err| {
            error!(user_id = %user.id, error = ?err, "auth: stored password hash unusable");
            AuthError::Internal(err)
        })?;

        Ok(verified.then(|| user.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sriyan_core::domain::{
        entities::users::UserEntity, repositories::users::MockUserRepository,
        value_objects::enums::user_roles::UserRole,
    };
    use uuid::Uuid;

    fn repo_with_admin() -> MockUserRepository {
        let admin = UserEntity {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: password::hash_password("password").unwrap(),
            role: UserRole::Admin,
        };

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_username().returning(move |username| {
            Ok((username == admin.username).then(|| admin.clone()))
        });
        user_repo
    }

    #[tokio::test]
    async fn valid_credentials_return_the_user_without_password() {
        let usecase = AuthUseCase::new(Arc::new(repo_with_admin()));

        let user = usecase
            .validate_credentials("admin", "password")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.username, "admin");
        assert_eq!(user.role, UserRole::Admin);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn wrong_password_or_unknown_user_is_none() {
        let usecase = AuthUseCase::new(Arc::new(repo_with_admin()));

        assert!(
            usecase
                .validate_credentials("admin", "wrong")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            usecase
                .validate_credentials("nouser", "x")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_username().never();
        let usecase = AuthUseCase::new(Arc::new(user_repo));

        let err = usecase
            .login(LoginModel {
                username: Some("admin".to_string()),
                password: Some(String::new()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_with_bad_password_is_unauthorized() {
        let usecase = AuthUseCase::new(Arc::new(repo_with_admin()));

        let err = usecase
            .login(LoginModel {
                username: Some("admin".to_string()),
                password: Some("letmein".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
