use async_trait::async_trait;

use crate::profile::application::domain::entities::{Profile, ProfileValidationError};
use crate::profile::application::ports::outgoing::profile_query::{
    PageRequest, PageResult, ProfileQueryError,
};

/// Raw listing filter as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct AgentListQuery {
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListAgentsError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileQueryError> for ListAgentsError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::DatabaseError(msg) => ListAgentsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListAgentsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: AgentListQuery,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ListAgentsError>;
}
