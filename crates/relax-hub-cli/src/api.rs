//! Relax Hub API Client

use anyhow::{bail, Context, Result};
use relax_hub::MissionOutcome;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the agent hub
pub struct HubClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ExecuteRequest<'a> {
    pub command: &'a str,
    #[serde(rename = "tenantId", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct ExecuteResponse {
    pub success: bool,
    pub data: MissionOutcome,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

#[derive(Debug, Deserialize)]
pub struct HubStatus {
    pub status: String,
    pub mode: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl HubClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch hub status
    pub async fn status(&self) -> Result<HubStatus> {
        let url = format!("{}/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to agent hub")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Send a command to the hub
    pub async fn execute(&self, command: &str, tenant_id: Option<&str>) -> Result<ExecuteResponse> {
        let url = format!("{}/api/agents/execute", self.base_url);
        let request = ExecuteRequest { command, tenant_id };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to agent hub")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Agent hub error ({}): {}", status, error_detail(&body));
        }

        resp.json().await.context("Failed to parse response")
    }
}

/// Pull `detail` out of an error body, falling back to the raw text
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}
