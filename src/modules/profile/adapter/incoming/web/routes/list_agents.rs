use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::ports::incoming::use_cases::{AgentListQuery, ListAgentsError};
use crate::profile::application::ports::outgoing::profile_query::PageRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{validation_error_response, AgentPageResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AgentListParams {
    /// Case-insensitive exact city match
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 code
    pub country: Option<String>,
    /// 1-based, defaults to 1
    pub page: Option<u32>,
    /// Defaults to 20, capped at 100
    pub per_page: Option<u32>,
}

/// Paginated agent directory, best rated first
#[utoipa::path(
    get,
    path = "/api/profiles/agents",
    tag = "profiles",
    params(AgentListParams),
    responses(
        (status = 200, description = "Page of agents", body = inline(SuccessResponse<AgentPageResponse>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles/agents")]
pub async fn list_agents_handler(
    params: web::Query<AgentListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: params.page.unwrap_or(defaults.page),
        per_page: params.per_page.unwrap_or(defaults.per_page),
    };
    let query = AgentListQuery {
        city: params.city,
        country: params.country,
    };

    match data.profile.list_agents.execute(query, page).await {
        Ok(result) => ApiResponse::success(AgentPageResponse::from(result)),

        Err(ListAgentsError::Validation(e)) => validation_error_response(&e),

        Err(ListAgentsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list agents");
            ApiResponse::internal_error()
        }
    }
}
