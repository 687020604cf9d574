use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserRepositoryError> for DeleteUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            other => DeleteUserError::DatabaseError(other.to_string()),
        }
    }
}

/// Removes the account for good. The profile row is removed by the
/// database cascade, never by this use case.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError>;
}

#[derive(Clone)]
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        self.repository.delete_user(user_id.value()).await?;
        tracing::info!(user_id = %user_id, "User account deleted");
        Ok(())
    }
}
