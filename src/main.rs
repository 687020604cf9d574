pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
};
use crate::profile::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    CreateProfileService, GetMyProfileService, GetPublicProfileService, ListAgentsService,
    ListTopAgentsService, PatchProfileService, RateAgentService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub profile: ProfileUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_env_files();

    let config = AppConfig::from_env().map_err(|e| startup_error("config", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("jwt config", e))?;
    let password_hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("password hasher", e))?;

    let server_url = config.server_url();
    info!(environment = %config.environment, %server_url, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("database connection", e))?;
    let db_arc = Arc::new(conn);

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&*db_arc, None)
            .await
            .map_err(|e| startup_error("migrations", e))?;
    }

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let password_hasher = Arc::new(password_hasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
        ));
    let delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync> =
        Arc::new(DeleteUserUseCase::new(user_repo));
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        password_hasher,
        Arc::new(jwt_service.clone()),
    );

    // Profiles
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));

    let profile = ProfileUseCases {
        create: Arc::new(CreateProfileService::new(profile_repo.clone())),
        get_mine: Arc::new(GetMyProfileService::new(profile_query.clone())),
        get_public: Arc::new(GetPublicProfileService::new(profile_query.clone())),
        patch: Arc::new(PatchProfileService::new(profile_repo.clone())),
        list_agents: Arc::new(ListAgentsService::new(profile_query.clone())),
        list_top_agents: Arc::new(ListTopAgentsService::new(profile_query.clone())),
        rate_agent: Arc::new(RateAgentService::new(profile_query, profile_repo)),
    };

    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        create_user_use_case,
        profile.create.clone(),
        delete_user_use_case.clone(),
    );

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        delete_user_use_case,
        profile,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Profiles: fixed segments before `{profile_id}`
    cfg.service(crate::profile::adapter::incoming::web::routes::get_my_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::patch_my_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::list_agents_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::list_top_agents_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::rate_agent_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        tracing::error!(error = %e, "Error starting app");
        eprintln!("Error starting app: {e}");
    }
}
