use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile already exists for this account")]
    ProfileAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Provisions the default profile of a freshly registered account.
#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Profile, CreateProfileError>;
}
