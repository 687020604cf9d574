use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::RateAgentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{validation_error_response, ProfileResponse};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RateAgentRequest {
    /// Whole number from 1 to 5
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub score: i64,
}

/// Rate an agent
///
/// Folds the score into the agent's running average and review count.
#[utoipa::path(
    post,
    path = "/api/profiles/{profile_id}/ratings",
    tag = "profiles",
    security(("BearerAuth" = [])),
    params(("profile_id" = Uuid, Path, description = "Public id of the agent's profile")),
    request_body = RateAgentRequest,
    responses(
        (status = 200, description = "Profile with the new rating", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Score out of range", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Own profile", body = ErrorResponse),
        (status = 404, description = "Unknown profile", body = ErrorResponse),
        (status = 422, description = "Profile is not an agent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/profiles/{profile_id}/ratings")]
pub async fn rate_agent_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<RateAgentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();
    let rater = UserId::from(user.user_id);

    match data
        .profile
        .rate_agent
        .execute(rater, profile_id, req.score)
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(RateAgentError::Validation(e)) => validation_error_response(&e),

        Err(RateAgentError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(RateAgentError::NotAnAgent) => {
            ApiResponse::unprocessable("NOT_AN_AGENT", "Only agents can be rated")
        }

        Err(RateAgentError::CannotRateSelf) => {
            ApiResponse::forbidden("CANNOT_RATE_SELF", "You cannot rate your own profile")
        }

        Err(RateAgentError::RepositoryError(e)) => {
            error!(profile_id = %profile_id, rater = %rater, error = %e, "Failed to record review");
            ApiResponse::internal_error()
        }
    }
}
