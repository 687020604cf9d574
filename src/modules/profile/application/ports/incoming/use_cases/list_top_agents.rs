use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListTopAgentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopAgentsUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<Profile>, ListTopAgentsError>;
}
