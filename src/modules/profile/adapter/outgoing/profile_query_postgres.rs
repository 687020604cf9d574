use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, NullOrdering};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::{Column, Entity};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::profile_query::{
    AgentListFilter, PageRequest, PageResult, ProfileQuery, ProfileQueryError,
};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Best rated first, unrated last, then oldest profile first.
fn agent_ranking(query: Select<Entity>) -> Select<Entity> {
    query
        .order_by_with_nulls(Column::Rating, Order::Desc, NullOrdering::Last)
        .order_by_asc(Column::CreatedAt)
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError> {
        let owner: Uuid = user_id.into();

        let model = Entity::find()
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Profile::from))
    }

    async fn find_by_public_id(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        let model = Entity::find()
            .filter(Column::Id.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Profile::from))
    }

    async fn list_agents(
        &self,
        filter: AgentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ProfileQueryError> {
        let mut query = Entity::find().filter(Column::IsAgent.eq(true));

        if let Some(city) = filter.city {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::City))).eq(city.to_lowercase()),
            );
        }

        if let Some(country) = filter.country {
            query = query.filter(Column::Country.eq(country));
        }

        let query = agent_ranking(query);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.into_iter().map(Profile::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_top_agents(&self, limit: u64) -> Result<Vec<Profile>, ProfileQueryError> {
        let query = Entity::find()
            .filter(Column::IsAgent.eq(true))
            .filter(Column::TopAgent.eq(true));

        let models = agent_ranking(query)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Profile::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    tracing::error!(error = %e, "Profile query database error");
    ProfileQueryError::DatabaseError(e.to_string())
}
