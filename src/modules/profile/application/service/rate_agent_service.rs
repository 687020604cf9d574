use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ReviewScore};
use crate::profile::application::ports::incoming::use_cases::{RateAgentError, RateAgentUseCase};
use crate::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

/// Checks the target before folding the score in. The repository update is
/// itself filtered on `is_agent`, so a profile that stops being an agent in
/// between is still never rated.
pub struct RateAgentService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    profile_repository: R,
}

impl<Q, R> RateAgentService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, profile_repository: R) -> Self {
        Self {
            query,
            profile_repository,
        }
    }
}

#[async_trait]
impl<Q, R> RateAgentUseCase for RateAgentService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        rater: UserId,
        profile_id: Uuid,
        score: i64,
    ) -> Result<Profile, RateAgentError> {
        let score = ReviewScore::new(score)?;

        let target = self
            .query
            .find_by_public_id(profile_id)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| RateAgentError::RepositoryError(msg))?
            .ok_or(RateAgentError::NotFound)?;

        if target.is_owned_by(rater) {
            return Err(RateAgentError::CannotRateSelf);
        }

        if !target.is_agent {
            return Err(RateAgentError::NotAnAgent);
        }

        let updated = self
            .profile_repository
            .record_review(profile_id, score)
            .await
            .map_err(|e| match e {
                // Row exists but no longer matches `is_agent`
                ProfileRepositoryError::NotFound => RateAgentError::NotAnAgent,
                ProfileRepositoryError::DatabaseError(msg) => RateAgentError::RepositoryError(msg),
                ProfileRepositoryError::ProfileAlreadyExists => RateAgentError::RepositoryError(
                    "unexpected uniqueness conflict while rating".to_string(),
                ),
            })?;

        tracing::info!(
            profile_id = %profile_id,
            rater = %rater,
            score = score.value(),
            num_reviews = ?updated.num_reviews,
            "Agent rated"
        );

        Ok(updated)
    }
}
