use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileValidationError};
use crate::profile::application::ports::outgoing::profile_repository::PatchField;

/// Unvalidated owner changes. Fields outside this struct are not editable
/// by the owner.
#[derive(Debug, Clone, Default)]
pub struct PatchProfileInput {
    pub phone_number: PatchField<String>,
    pub about_me: PatchField<String>,
    pub license: PatchField<String>,
    pub profile_photo: PatchField<String>,
    pub gender: PatchField<String>,
    pub country: PatchField<String>,
    pub city: PatchField<String>,
    pub is_buyer: PatchField<bool>,
    pub is_seller: PatchField<bool>,
    pub is_agent: PatchField<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchProfileError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),

    #[error("No fields to update")]
    EmptyPatch,

    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: PatchProfileInput,
    ) -> Result<Profile, PatchProfileError>;
}
