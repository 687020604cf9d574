use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetMyProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMyProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Profile, GetMyProfileError>;
}
