//! Agent Routes - Command execution

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use relax_hub::MissionRequest;

use crate::error::ApiError;
use crate::models::{AgentRequest, ErrorResponse, ExecuteResponse};
use crate::AppState;

/// Route a command to an agent and return its output
#[utoipa::path(
    post,
    path = "/api/agents/execute",
    request_body = AgentRequest,
    responses(
        (status = 200, description = "Mission completed or guidance returned", body = ExecuteResponse),
        (status = 500, description = "Any failure", body = ErrorResponse)
    ),
    tag = "Agents"
)]
pub async fn execute_agent(
    State(state): State<AppState>,
    payload: Result<Json<AgentRequest>, JsonRejection>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = MissionRequest::from(payload);

    tracing::info!("Command for tenant {}: {}", request.tenant_id, request.command);

    let data = state.orchestrator.handle_command(&request.command).await?;

    Ok(Json(ExecuteResponse::success(data, request.tenant_id)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/agents/execute", post(execute_agent))
}
