use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::ports::incoming::use_cases::ListTopAgentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ProfileResponse;

const DEFAULT_TOP_AGENTS: u64 = 10;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopAgentsParams {
    /// Defaults to 10, capped at 50
    pub limit: Option<u64>,
}

/// Agents flagged as top agents
#[utoipa::path(
    get,
    path = "/api/profiles/top-agents",
    tag = "profiles",
    params(TopAgentsParams),
    responses(
        (status = 200, description = "Top agents", body = inline(SuccessResponse<Vec<ProfileResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles/top-agents")]
pub async fn list_top_agents_handler(
    params: web::Query<TopAgentsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_AGENTS);

    match data.profile.list_top_agents.execute(limit).await {
        Ok(agents) => ApiResponse::success(
            agents
                .into_iter()
                .map(ProfileResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListTopAgentsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list top agents");
            ApiResponse::internal_error()
        }
    }
}
