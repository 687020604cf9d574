use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateAgentError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),

    #[error("Profile not found")]
    NotFound,

    #[error("Profile does not belong to an agent")]
    NotAnAgent,

    #[error("You cannot rate your own profile")]
    CannotRateSelf,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RateAgentUseCase: Send + Sync {
    async fn execute(
        &self,
        rater: UserId,
        profile_id: Uuid,
        score: i64,
    ) -> Result<Profile, RateAgentError>;
}
