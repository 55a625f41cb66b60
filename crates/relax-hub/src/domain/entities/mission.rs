//! Mission - One command in, one outcome out

use serde::{Deserialize, Serialize};

/// Tenant used when a request does not name one
pub const DEFAULT_TENANT_ID: &str = "ae6_admin_01";

/// Help text returned when no mission matches
pub const GUIDANCE_MESSAGE: &str = "I'm not sure which agent should handle this. Try asking to \
                                    'find properties', 'create a listing', or 'schedule viewings'.";

/// A command submitted on behalf of a tenant
#[derive(Debug, Clone)]
pub struct MissionRequest {
    pub command: String,
    pub tenant_id: String,
}

impl MissionRequest {
    pub fn new(command: impl Into<String>, tenant_id: Option<String>) -> Self {
        Self {
            command: command.into(),
            tenant_id: tenant_id.unwrap_or_else(|| DEFAULT_TENANT_ID.to_string()),
        }
    }
}

/// Output of a completed mission, tagged with the persona that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionResult {
    pub agent: String,
    pub result: String,
}

/// Successful reply for commands no mission recognises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub status: String,
    pub message: String,
}

impl Default for Guidance {
    fn default() -> Self {
        Self {
            status: "confused".to_string(),
            message: GUIDANCE_MESSAGE.to_string(),
        }
    }
}

/// Either a mission result or guidance text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionOutcome {
    Completed(MissionResult),
    Unrecognized(Guidance),
}

impl MissionOutcome {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, MissionOutcome::Unrecognized(_))
    }
}
