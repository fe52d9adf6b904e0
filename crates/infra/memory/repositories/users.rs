use anyhow::{Result, bail};
use async_trait::async_trait;
use std::{collections::hash_map::Entry, sync::Arc};
use uuid::Uuid;

use crate::domain::{
    entities::users::{InsertUserEntity, UserEntity},
    repositories::users::UserRepository,
};
use crate::infra::memory::memory_store::MemoryStore;

pub struct UserMemory {
    store: Arc<MemoryStore>,
}

impl UserMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserMemory {
    async fn create(&self, insert_user_entity: InsertUserEntity) -> Result<UserEntity> {
        let mut users = self.store.users.write();

        match users.entry(insert_user_entity.username.clone()) {
            Entry::Occupied(_) => bail!(
                "username already exists: {}",
                insert_user_entity.username
            ),
            Entry::Vacant(slot) => {
                let user = UserEntity {
                    id: Uuid::new_v4(),
                    username: insert_user_entity.username,
                    password_hash: insert_user_entity.password_hash,
                    role: insert_user_entity.role,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>> {
        Ok(self.store.users.read().get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::user_roles::UserRole;

    fn insert_user(username: &str) -> InsertUserEntity {
        InsertUserEntity {
            username: username.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let repo = UserMemory::new(Arc::new(MemoryStore::new()));

        let created = repo.create(insert_user("sayan")).await.unwrap();
        assert!(repo.create(insert_user("sayan")).await.is_err());

        let fetched = repo.find_by_username("sayan").await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let repo = UserMemory::new(Arc::new(MemoryStore::new()));
        repo.create(insert_user("admin")).await.unwrap();

        assert!(repo.find_by_username("Admin").await.unwrap().is_none());
        assert!(repo.find_by_username("admin ").await.unwrap().is_none());
    }
}
