use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisterUserResponse,
    RegisteredUser,
};
// Profiles
use crate::profile::adapter::incoming::web::routes::{
    AgentPageResponse, PatchProfileRequest, ProfileResponse, RateAgentRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estate Backend API",
        version = "1.0.0",
        description = "Accounts and profiles for buyers, sellers and real-estate agents",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::delete_user::delete_user_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_my_profile::get_my_profile_handler,
        crate::profile::adapter::incoming::web::routes::patch_my_profile::patch_my_profile_handler,
        crate::profile::adapter::incoming::web::routes::list_agents::list_agents_handler,
        crate::profile::adapter::incoming::web::routes::list_top_agents::list_top_agents_handler,
        crate::profile::adapter::incoming::web::routes::get_public_profile::get_public_profile_handler,
        crate::profile::adapter::incoming::web::routes::rate_agent::rate_agent_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,

            // Profile DTOs
            ProfileResponse,
            AgentPageResponse,
            PatchProfileRequest,
            RateAgentRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "profiles", description = "Profile and agent directory endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
