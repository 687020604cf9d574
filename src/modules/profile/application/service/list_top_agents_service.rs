use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    ListTopAgentsError, ListTopAgentsUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};

pub const MAX_TOP_AGENTS: u64 = 50;

pub struct ListTopAgentsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> ListTopAgentsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopAgentsUseCase for ListTopAgentsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<Profile>, ListTopAgentsError> {
        self.query
            .list_top_agents(limit.clamp(1, MAX_TOP_AGENTS))
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| ListTopAgentsError::QueryFailed(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::ports::outgoing::profile_query::{
        AgentListFilter, PageRequest, PageResult,
    };
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        Query {}

        #[async_trait]
        impl ProfileQuery for Query {
            async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError>;
            async fn find_by_public_id(&self, profile_id: Uuid) -> Result<Option<Profile>, ProfileQueryError>;
            async fn list_agents(&self, filter: AgentListFilter, page: PageRequest) -> Result<PageResult<Profile>, ProfileQueryError>;
            async fn list_top_agents(&self, limit: u64) -> Result<Vec<Profile>, ProfileQueryError>;
        }
    }

    #[tokio::test]
    async fn test_list_top_agents_clamps_limit() {
        let mut query = MockQuery::new();
        query
            .expect_list_top_agents()
            .with(eq(MAX_TOP_AGENTS))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ListTopAgentsService::new(query);

        assert!(service.execute(10_000).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_top_agents_query_error() {
        let mut query = MockQuery::new();
        query
            .expect_list_top_agents()
            .returning(|_| Err(ProfileQueryError::DatabaseError("boom".to_string())));

        let service = ListTopAgentsService::new(query);

        assert_eq!(
            service.execute(10).await.unwrap_err(),
            ListTopAgentsError::QueryFailed("boom".to_string())
        );
    }
}
