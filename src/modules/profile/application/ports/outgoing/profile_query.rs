use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

pub const MAX_PER_PAGE: u32 = 100;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentListFilter {
    /// Exact, case-insensitive match
    pub city: Option<String>,
    /// Upper-cased ISO 3166-1 alpha-2
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl PageRequest {
    /// Clamps to `page >= 1` and `1..=MAX_PER_PAGE`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId)
        -> Result<Option<Profile>, ProfileQueryError>;

    async fn find_by_public_id(&self, profile_id: Uuid)
        -> Result<Option<Profile>, ProfileQueryError>;

    /// Agents only, best rated first, unrated last, then oldest first.
    async fn list_agents(
        &self,
        filter: AgentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ProfileQueryError>;

    /// Profiles flagged both `is_agent` and `top_agent`.
    async fn list_top_agents(&self, limit: u64) -> Result<Vec<Profile>, ProfileQueryError>;
}
