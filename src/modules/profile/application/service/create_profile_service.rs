use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

pub struct CreateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> CreateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Profile, CreateProfileError> {
        let profile = self
            .profile_repository
            .create_default_profile(user_id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileAlreadyExists => {
                    CreateProfileError::ProfileAlreadyExists
                }
                ProfileRepositoryError::DatabaseError(msg) => {
                    CreateProfileError::RepositoryError(msg)
                }
                ProfileRepositoryError::NotFound => CreateProfileError::RepositoryError(
                    "unexpected not found while creating profile".to_string(),
                ),
            })?;

        tracing::info!(user_id = %user_id, profile_id = %profile.id, "Profile created");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::domain::entities::ReviewScore;
    use crate::profile::application::ports::outgoing::profile_repository::PatchProfileData;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        Repo {}

        #[async_trait]
        impl ProfileRepository for Repo {
            async fn create_default_profile(&self, user_id: UserId) -> Result<Profile, ProfileRepositoryError>;
            async fn patch_profile(&self, user_id: UserId, data: PatchProfileData) -> Result<Profile, ProfileRepositoryError>;
            async fn record_review(&self, profile_id: Uuid, score: ReviewScore) -> Result<Profile, ProfileRepositoryError>;
        }
    }

    #[tokio::test]
    async fn test_create_profile_success() {
        let user_id = UserId::from(Uuid::new_v4());

        let mut repo = MockRepo::new();
        repo.expect_create_default_profile()
            .with(eq(user_id))
            .times(1)
            .returning(|uid| Ok(Profile::with_defaults(uid)));

        let service = CreateProfileService::new(repo);
        let profile = service.execute(user_id).await.unwrap();

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.country, "IL");
    }

    #[tokio::test]
    async fn test_create_profile_already_exists() {
        let mut repo = MockRepo::new();
        repo.expect_create_default_profile()
            .returning(|_| Err(ProfileRepositoryError::ProfileAlreadyExists));

        let service = CreateProfileService::new(repo);
        let err = service
            .execute(UserId::from(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, CreateProfileError::ProfileAlreadyExists);
    }

    #[tokio::test]
    async fn test_create_profile_database_error() {
        let mut repo = MockRepo::new();
        repo.expect_create_default_profile()
            .returning(|_| Err(ProfileRepositoryError::DatabaseError("db down".to_string())));

        let service = CreateProfileService::new(repo);
        let err = service
            .execute(UserId::from(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, CreateProfileError::RepositoryError("db down".to_string()));
    }
}
