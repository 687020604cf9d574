use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Confirmation returned by write operations (no password hash).
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Hard delete. Rows referencing the account (its profile) go with it
    /// through `ON DELETE CASCADE`.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
