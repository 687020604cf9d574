use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (unique identifier)
    #[schema(example = "dana_levi")]
    pub username: String,

    /// Email address
    #[schema(example = "dana@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "Dana")]
    pub first_name: String,

    #[schema(example = "Levi")]
    pub last_name: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "User created successfully. Your profile is ready to be completed.")]
    message: String,

    /// Created user details
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "dana_levi")]
    username: String,

    #[schema(example = "dana@example.com")]
    email: String,

    #[schema(example = "Dana")]
    first_name: String,

    #[schema(example = "Levi")]
    last_name: String,

    /// Public id of the profile provisioned with the account
    #[schema(example = "0b6f3f0e-8f7a-4c55-9a3c-0d9a4f1b2c3d")]
    profile_id: String,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    let (code, msg) = match &err {
        CreateUserError::InvalidUsername(msg) => ("INVALID_USERNAME", msg),
        CreateUserError::InvalidEmail(msg) => ("INVALID_EMAIL", msg),
        CreateUserError::InvalidPassword(msg) => ("INVALID_PASSWORD", msg),
        CreateUserError::InvalidName(msg) => ("INVALID_NAME", msg),

        CreateUserError::UserAlreadyExists => {
            warn!(username = %req.username, email = %req.email, "User already exists");
            return ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists");
        }

        CreateUserError::HashingFailed(_) | CreateUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "User creation failed"
            );
            return ApiResponse::internal_error();
        }
    };

    warn!(
        username = %req.username,
        email = %req.email,
        error = %err,
        "Invalid registration input"
    );
    ApiResponse::bad_request(code, msg)
}

/// Register a new user
///
/// Creates the account together with its default profile.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User and profile created",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "User created successfully. Your profile is ready to be completed.",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "dana_levi",
                        "email": "dana@example.com",
                        "first_name": "Dana",
                        "last_name": "Levi",
                        "profile_id": "0b6f3f0e-8f7a-4c55-9a3c-0d9a4f1b2c3d"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid username" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_USERNAME",
                        "message": "Username must be between 3 and 30 characters"
                    }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "User already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "User already exists"
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
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let orchestrator = &data.register_user_orchestrator;

    info!(
        username = %req.username,
        email = %req.email,
        "User registration attempt"
    );

    let user_input = CreateUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
    };

    match orchestrator.register_user(user_input).await {
        Ok(user) => {
            info!(
                user_id = %user.user_id,
                profile_id = %user.profile_id,
                "User registered"
            );

            ApiResponse::created(RegisterUserResponse {
                message: user.message,
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                    email: user.email,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    profile_id: user.profile_id.to_string(),
                },
            })
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),

        Err(
            e @ (UserRegistrationError::ProfileProvisioningFailed(_)
            | UserRegistrationError::AccountRollbackFailed { .. }),
        ) => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %e,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}
