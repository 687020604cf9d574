use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    PatchProfileError, PatchProfileInput,
};
use crate::profile::application::ports::outgoing::profile_repository::PatchField;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{validation_error_response, ProfileResponse};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields are left alone. `null` is only accepted for `license`.
/// Unknown keys such as `id`, `rating` or `top_agent` are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchProfileRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "+972 54-111-2222")]
    pub phone_number: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub about_me: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, nullable, example = "RE-20391")]
    pub license: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "/photos/me.png")]
    pub profile_photo: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Female")]
    pub gender: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "IL")]
    pub country: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Haifa")]
    pub city: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_buyer: PatchField<bool>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_seller: PatchField<bool>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_agent: PatchField<bool>,
}

impl From<PatchProfileRequest> for PatchProfileInput {
    fn from(req: PatchProfileRequest) -> Self {
        PatchProfileInput {
            phone_number: req.phone_number,
            about_me: req.about_me,
            license: req.license,
            profile_photo: req.profile_photo,
            gender: req.gender,
            country: req.country,
            city: req.city,
            is_buyer: req.is_buyer,
            is_seller: req.is_seller,
            is_agent: req.is_agent,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Partially update the calling account's profile
#[utoipa::path(
    patch,
    path = "/api/profiles/me",
    tag = "profiles",
    security(("BearerAuth" = [])),
    request_body = PatchProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile for this account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/profiles/me")]
pub async fn patch_my_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<PatchProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(user.user_id);
    let input: PatchProfileInput = req.into_inner().into();

    match data.profile.patch.execute(user_id, input).await {
        Ok(updated) => {
            info!(user_id = %user_id, profile_id = %updated.id, "Profile updated");
            ApiResponse::success(ProfileResponse::from(updated))
        }

        Err(PatchProfileError::Validation(e)) => validation_error_response(&e),

        Err(PatchProfileError::EmptyPatch) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "No fields to update")
        }

        Err(PatchProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(PatchProfileError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Repository error patching profile");
            ApiResponse::internal_error()
        }
    }
}
