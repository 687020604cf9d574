use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};

/// Delete the calling account
///
/// The account's profile goes with it.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/me")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(user.user_id);

    match data.delete_user_use_case.execute(user_id).await {
        Ok(()) => {
            info!(user_id = %user_id, "Account deleted");
            ApiResponse::no_content()
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::DatabaseError(e)) => {
            error!(user_id = %user_id, error = %e, "Database error deleting user");
            ApiResponse::internal_error()
        }
    }
}
