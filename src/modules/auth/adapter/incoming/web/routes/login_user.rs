use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "dana@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "dana_levi")]
    username: String,

    #[schema(example = "dana@example.com")]
    email: String,
}

/// User login
///
/// Authenticates with email and password and returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "dana_levi",
                        "email": "dana@example.com"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Malformed credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email format"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");

            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
