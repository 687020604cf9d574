use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    GetMyProfileError, GetMyProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};

pub struct GetMyProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetMyProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyProfileUseCase for GetMyProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Profile, GetMyProfileError> {
        self.query
            .find_by_user_id(user_id)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| GetMyProfileError::QueryFailed(msg))?
            .ok_or(GetMyProfileError::NotFound)
    }
}
