//! Hub status route

use axum::{routing::get, Json, Router};

use crate::models::HubStatus;
use crate::AppState;

/// Report that the hub is up
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Hub operational", body = HubStatus)),
    tag = "Health"
)]
pub async fn root() -> Json<HubStatus> {
    Json(HubStatus {
        status: "AE6 Agent Hub Operational".to_string(),
        mode: "Relax".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
