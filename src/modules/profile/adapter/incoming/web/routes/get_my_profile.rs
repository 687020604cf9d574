use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::GetMyProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ProfileResponse;

/// Profile of the calling account
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    tag = "profiles",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Own profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile for this account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles/me")]
pub async fn get_my_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(user.user_id);

    match data.profile.get_mine.execute(user_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(GetMyProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetMyProfileError::QueryFailed(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load own profile");
            ApiResponse::internal_error()
        }
    }
}
