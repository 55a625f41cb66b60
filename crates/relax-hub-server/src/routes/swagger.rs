//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{AgentRequest, ErrorResponse, ExecuteResponse, HubStatus};

#[derive(OpenApi)]
#[openapi(
    paths(super::health::root, super::agents::execute_agent),
    info(
        title = "AE6 Relax Mode Agent Hub",
        version = "0.1.0",
        description = "Routes free-text commands to the Property Scout, Listing Writer, Social Sync and Admin Assistant agents.",
        license(name = "MIT"),
    ),
    servers((url = "/", description = "Current server")),
    tags(
        (name = "Health", description = "Hub status"),
        (name = "Agents", description = "Command execution"),
    ),
    components(schemas(HubStatus, AgentRequest, ExecuteResponse, ErrorResponse)),
)]
pub struct ApiDoc;
