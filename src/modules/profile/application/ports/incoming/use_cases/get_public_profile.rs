use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPublicProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid) -> Result<Profile, GetPublicProfileError>;
}
