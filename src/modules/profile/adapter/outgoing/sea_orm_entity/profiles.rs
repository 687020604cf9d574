use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::profile::application::domain::entities::Gender;

/// `gender` is a VARCHAR(20) guarded by a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum GenderColumn {
    #[sea_orm(string_value = "Male")]
    Male,
    #[sea_orm(string_value = "Female")]
    Female,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl From<Gender> for GenderColumn {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderColumn::Male,
            Gender::Female => GenderColumn::Female,
            Gender::Other => GenderColumn::Other,
        }
    }
}

impl From<GenderColumn> for Gender {
    fn from(column: GenderColumn) -> Self {
        match column {
            GenderColumn::Male => Gender::Male,
            GenderColumn::Female => Gender::Female,
            GenderColumn::Other => Gender::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pkid: i64,

    #[sea_orm(unique, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub phone_number: String,

    #[sea_orm(column_type = "Text")]
    pub about_me: String,

    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub license: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub profile_photo: String,

    pub gender: GenderColumn,

    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub country: String,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub city: String,

    pub is_buyer: bool,
    pub is_seller: bool,
    pub is_agent: bool,
    pub top_agent: bool,

    #[sea_orm(column_type = "Decimal(Some((4, 2)))", nullable)]
    pub rating: Option<Decimal>,

    #[sea_orm(nullable)]
    pub num_reviews: Option<i32>,

    #[sea_orm(unique, column_type = "Uuid")]
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(country) = &self.country {
            self.country = Set(country.trim().to_ascii_uppercase());
        }

        Ok(self)
    }
}

impl From<Model> for crate::profile::application::domain::entities::Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id.into(),
            phone_number: model.phone_number,
            about_me: model.about_me,
            license: model.license,
            profile_photo: model.profile_photo,
            gender: model.gender.into(),
            country: model.country,
            city: model.city,
            is_buyer: model.is_buyer,
            is_seller: model.is_seller,
            is_agent: model.is_agent,
            top_agent: model.top_agent,
            rating: model.rating,
            num_reviews: model.num_reviews,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
