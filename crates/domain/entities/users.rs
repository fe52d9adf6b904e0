use uuid::Uuid;

use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertUserEntity {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}
