//! Hub status and error bodies

use serde::Serialize;
use utoipa::ToSchema;

/// Root status payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HubStatus {
    pub status: String,
    pub mode: String,
}

/// Error body for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
