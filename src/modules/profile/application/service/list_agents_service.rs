use async_trait::async_trait;

use crate::profile::application::domain::entities::{validate_city, CountryCode, Profile};
use crate::profile::application::ports::incoming::use_cases::{
    AgentListQuery, ListAgentsError, ListAgentsUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::{
    AgentListFilter, PageRequest, PageResult, ProfileQuery,
};

pub struct ListAgentsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> ListAgentsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAgentsUseCase for ListAgentsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        query: AgentListQuery,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ListAgentsError> {
        // Blank parameters count as absent
        let city = query
            .city
            .filter(|c| !c.trim().is_empty())
            .map(|c| validate_city(&c))
            .transpose()?;

        let country = query
            .country
            .filter(|c| !c.trim().is_empty())
            .map(|c| CountryCode::parse(&c).map(CountryCode::into_inner))
            .transpose()?;

        let filter = AgentListFilter { city, country };

        Ok(self.query.list_agents(filter, page.normalized()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::domain::entities::ProfileValidationError;
    use crate::profile::application::ports::outgoing::profile_query::ProfileQueryError;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingQuery {
        seen: Mutex<Option<(AgentListFilter, PageRequest)>>,
    }

    #[async_trait]
    impl ProfileQuery for RecordingQuery {
        async fn find_by_user_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<Profile>, ProfileQueryError> {
            unimplemented!("not used")
        }

        async fn find_by_public_id(
            &self,
            _profile_id: Uuid,
        ) -> Result<Option<Profile>, ProfileQueryError> {
            unimplemented!("not used")
        }

        async fn list_agents(
            &self,
            filter: AgentListFilter,
            page: PageRequest,
        ) -> Result<PageResult<Profile>, ProfileQueryError> {
            let result = PageResult {
                items: vec![],
                page: page.page,
                per_page: page.per_page,
                total: 0,
            };
            *self.seen.lock().unwrap() = Some((filter, page));
            Ok(result)
        }

        async fn list_top_agents(&self, _limit: u64) -> Result<Vec<Profile>, ProfileQueryError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn test_list_agents_normalizes_filter_and_page() {
        let service = ListAgentsService::new(RecordingQuery::default());

        let result = service
            .execute(
                AgentListQuery {
                    city: Some(" Haifa ".to_string()),
                    country: Some("il".to_string()),
                },
                PageRequest {
                    page: 0,
                    per_page: 1000,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.page, 1);
        assert_eq!(result.per_page, 100);

        let (filter, _) = service.query.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.city.as_deref(), Some("Haifa"));
        assert_eq!(filter.country.as_deref(), Some("IL"));
    }

    #[tokio::test]
    async fn test_list_agents_blank_filters_are_ignored() {
        let service = ListAgentsService::new(RecordingQuery::default());

        service
            .execute(
                AgentListQuery {
                    city: Some("  ".to_string()),
                    country: Some("".to_string()),
                },
                PageRequest::default(),
            )
            .await
            .unwrap();

        let (filter, _) = service.query.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter, AgentListFilter::default());
    }

    #[tokio::test]
    async fn test_list_agents_rejects_unknown_country() {
        let service = ListAgentsService::new(RecordingQuery::default());

        let err = service
            .execute(
                AgentListQuery {
                    city: None,
                    country: Some("XX".to_string()),
                },
                PageRequest::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ListAgentsError::Validation(ProfileValidationError::InvalidCountry(_))
        ));
        assert!(service.query.seen.lock().unwrap().is_none());
    }
}
