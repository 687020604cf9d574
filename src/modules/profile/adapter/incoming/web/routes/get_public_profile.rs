use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::ports::incoming::use_cases::GetPublicProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ProfileResponse;

/// Public profile by its UUID
#[utoipa::path(
    get,
    path = "/api/profiles/{profile_id}",
    tag = "profiles",
    params(("profile_id" = Uuid, Path, description = "Public profile id")),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 404, description = "Unknown profile", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles/{profile_id}")]
pub async fn get_public_profile_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.profile.get_public.execute(profile_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(GetPublicProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetPublicProfileError::QueryFailed(e)) => {
            error!(profile_id = %profile_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
