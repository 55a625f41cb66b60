//! Agent Engine Port
//!
//! Runs a crew of personas over their tasks and returns the final text.

use async_trait::async_trait;

use crate::domain::entities::Crew;
use crate::domain::errors::HubError;

/// Agent-execution engine interface
///
/// A call may block for as long as the upstream model takes; no timeout
/// or cancellation is applied at this layer.
#[async_trait]
pub trait AgentEngine: Send + Sync {
    /// Run every task of the crew and return the final output
    async fn kickoff(&self, crew: &Crew) -> Result<String, HubError>;

    /// Engine name for logging
    fn engine_name(&self) -> &str;
}
