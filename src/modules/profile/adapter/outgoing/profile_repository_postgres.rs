use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::{
    ActiveModel, Column, Entity, GenderColumn,
};
use crate::profile::application::domain::entities::{Profile, ReviewScore};
use crate::profile::application::ports::outgoing::profile_repository::{
    PatchField, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};

/// Running mean over every review so far, rounded to the column scale.
/// Right-hand sides of an UPDATE read the pre-update row, so `num_reviews`
/// here is still the old count.
const RATING_WITH_NEW_SCORE: &str = "ROUND((COALESCE(\"rating\", 0) * COALESCE(\"num_reviews\", 0) + ?) / (COALESCE(\"num_reviews\", 0) + 1), 2)";
const NUM_REVIEWS_PLUS_ONE: &str = "COALESCE(\"num_reviews\", 0) + 1";

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_default_profile(
        &self,
        user_id: UserId,
    ) -> Result<Profile, ProfileRepositoryError> {
        let defaults = Profile::with_defaults(user_id);

        let model = ActiveModel {
            pkid: NotSet,
            id: Set(defaults.id),
            created_at: NotSet,
            updated_at: NotSet,
            phone_number: Set(defaults.phone_number),
            about_me: Set(defaults.about_me),
            license: Set(defaults.license),
            profile_photo: Set(defaults.profile_photo),
            gender: Set(defaults.gender.into()),
            country: Set(defaults.country),
            city: Set(defaults.city),
            is_buyer: Set(defaults.is_buyer),
            is_seller: Set(defaults.is_seller),
            is_agent: Set(defaults.is_agent),
            top_agent: Set(defaults.top_agent),
            rating: Set(defaults.rating),
            num_reviews: Set(defaults.num_reviews),
            user_id: Set(user_id.into()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let owner: Uuid = user_id.into();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(v) = data.phone_number {
            model.phone_number = Set(v);
        }
        if let PatchField::Value(v) = data.about_me {
            model.about_me = Set(v);
        }
        match data.license {
            PatchField::Unset => {}
            PatchField::Null => model.license = Set(None),
            PatchField::Value(v) => model.license = Set(Some(v)),
        }
        if let PatchField::Value(v) = data.profile_photo {
            model.profile_photo = Set(v);
        }
        if let PatchField::Value(v) = data.gender {
            model.gender = Set(GenderColumn::from(v));
        }
        if let PatchField::Value(v) = data.country {
            model.country = Set(v);
        }
        if let PatchField::Value(v) = data.city {
            model.city = Set(v);
        }
        if let PatchField::Value(v) = data.is_buyer {
            model.is_buyer = Set(v);
        }
        if let PatchField::Value(v) = data.is_seller {
            model.is_seller = Set(v);
        }
        if let PatchField::Value(v) = data.is_agent {
            model.is_agent = Set(v);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::UserId.eq(owner))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Profile::from)
            .ok_or(ProfileRepositoryError::NotFound)
    }

    async fn record_review(
        &self,
        profile_id: Uuid,
        score: ReviewScore,
    ) -> Result<Profile, ProfileRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(
                Column::Rating,
                Expr::cust_with_values(RATING_WITH_NEW_SCORE, [score.as_decimal()]),
            )
            .col_expr(Column::NumReviews, Expr::cust(NUM_REVIEWS_PLUS_ONE))
            .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(Column::Id.eq(profile_id))
            .filter(Column::IsAgent.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Profile::from)
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return ProfileRepositoryError::ProfileAlreadyExists;
    }
    tracing::error!(error = %e, "Profile repository database error");
    ProfileRepositoryError::DatabaseError(e.to_string())
}
