use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::profile::application::domain::entities::{Profile, ProfileValidationError};
use crate::profile::application::ports::outgoing::profile_query::PageResult;
use crate::shared::api::ApiResponse;

/// Profile as exposed over HTTP. The storage key `pkid` is never part of it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "0b6f3f0e-8f7a-4c55-9a3c-0d9a4f1b2c3d")]
    pub id: Uuid,

    pub user_id: Uuid,

    #[schema(example = "+972549843454")]
    pub phone_number: String,

    #[schema(example = "Say something about yourself")]
    pub about_me: String,

    #[schema(example = "RE-20391")]
    pub license: Option<String>,

    #[schema(example = "/profile_default.png")]
    pub profile_photo: String,

    /// One of `Male`, `Female`, `Other`
    #[schema(value_type = String, example = "Other")]
    pub gender: String,

    /// ISO 3166-1 alpha-2
    #[schema(example = "IL")]
    pub country: String,

    #[schema(example = "Tel-Aviv")]
    pub city: String,

    pub is_buyer: bool,
    pub is_seller: bool,
    pub is_agent: bool,
    pub top_agent: bool,

    /// Mean review score, two decimals
    #[schema(value_type = Option<String>, example = "4.50")]
    pub rating: Option<Decimal>,

    #[schema(example = 0)]
    pub num_reviews: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id.value(),
            phone_number: p.phone_number,
            about_me: p.about_me,
            license: p.license,
            profile_photo: p.profile_photo,
            gender: p.gender.to_string(),
            country: p.country,
            city: p.city,
            is_buyer: p.is_buyer,
            is_seller: p.is_seller,
            is_agent: p.is_agent,
            top_agent: p.top_agent,
            rating: p.rating,
            num_reviews: p.num_reviews,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AgentPageResponse {
    pub items: Vec<ProfileResponse>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 42)]
    pub total: u64,
}

impl From<PageResult<Profile>> for AgentPageResponse {
    fn from(page: PageResult<Profile>) -> Self {
        let page = page.map(ProfileResponse::from);
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }
}

pub(super) fn validation_error_response(err: &ProfileValidationError) -> HttpResponse {
    let code = match err {
        ProfileValidationError::InvalidPhoneNumber(_) => "INVALID_PHONE_NUMBER",
        ProfileValidationError::InvalidCountry(_) => "INVALID_COUNTRY",
        ProfileValidationError::InvalidGender(_) => "INVALID_GENDER",
        ProfileValidationError::InvalidScore(_) => "INVALID_SCORE",
        ProfileValidationError::InvalidField { .. } => "VALIDATION_ERROR",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
