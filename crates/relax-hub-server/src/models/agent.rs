//! Agent execution DTOs

use relax_hub::{MissionOutcome, MissionRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Command execution request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AgentRequest {
    /// Free-text command, e.g. "Find me 5 condos in Phuket"
    pub command: String,
    /// Tenant identifier, defaults to `ae6_admin_01`
    #[serde(rename = "tenantId", default)]
    pub tenant_id: Option<String>,
}

impl From<AgentRequest> for MissionRequest {
    fn from(request: AgentRequest) -> Self {
        MissionRequest::new(request.command, request.tenant_id)
    }
}

/// Command execution response
#[derive(Debug, Serialize, ToSchema)]
pub struct ExecuteResponse {
    pub success: bool,
    /// `{agent, result}` for a mission, `{status, message}` when no agent matched
    #[schema(value_type = Object)]
    pub data: MissionOutcome,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

impl ExecuteResponse {
    pub fn success(data: MissionOutcome, tenant_id: String) -> Self {
        Self {
            success: true,
            data,
            tenant_id,
        }
    }
}
