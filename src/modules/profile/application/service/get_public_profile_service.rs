use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    GetPublicProfileError, GetPublicProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};

pub struct GetPublicProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetPublicProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicProfileUseCase for GetPublicProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, profile_id: Uuid) -> Result<Profile, GetPublicProfileError> {
        self.query
            .find_by_public_id(profile_id)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| {
                GetPublicProfileError::QueryFailed(msg)
            })?
            .ok_or(GetPublicProfileError::NotFound)
    }
}
