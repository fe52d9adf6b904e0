use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::users::{InsertUserEntity, UserEntity};

#[automock]
#[async_trait]
pub trait UserRepository {
    /// Fails when the username is already taken.
    async fn create(&self, insert_user_entity: InsertUserEntity) -> Result<UserEntity>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>>;
}
