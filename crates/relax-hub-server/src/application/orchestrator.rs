//! Relax Mode Orchestrator
//!
//! Dispatches a command to a mission, builds that mission's persona and
//! task, and runs them as a one-agent crew. Engine errors are returned
//! untouched.

use std::sync::Arc;

use relax_hub::{
    dispatch, AgentEngine, Crew, Guidance, HubError, MissionKind, MissionOutcome, MissionResult,
    ModelSettings, Persona, Task,
};

/// Application service for command handling
pub struct RelaxModeOrchestrator {
    engine: Arc<dyn AgentEngine>,
    model: Arc<ModelSettings>,
}

impl RelaxModeOrchestrator {
    pub fn new(engine: Arc<dyn AgentEngine>, model: Arc<ModelSettings>) -> Self {
        Self { engine, model }
    }

    /// Route a command and run the matching mission
    pub async fn handle_command(&self, command: &str) -> Result<MissionOutcome, HubError> {
        if command.is_empty() {
            return Err(HubError::validation("command must not be empty"));
        }

        match dispatch(command) {
            Some(kind) => self
                .execute_mission(kind, command)
                .await
                .map(MissionOutcome::Completed),
            None => {
                tracing::info!("No mission matched command: {}", command);
                Ok(MissionOutcome::Unrecognized(Guidance::default()))
            }
        }
    }

    /// Run one mission with the raw (not lower-cased) command
    pub async fn execute_mission(
        &self,
        kind: MissionKind,
        command: &str,
    ) -> Result<MissionResult, HubError> {
        let persona = Persona::for_mission(kind, self.model.clone());
        let agent = persona.name.clone();
        let crew = Crew::solo(Task::for_mission(kind, command, persona));

        tracing::info!(
            "Mission {} -> {} via {} ({})",
            kind,
            agent,
            self.engine.engine_name(),
            self.model.model
        );

        let result = self.engine.kickoff(&crew).await.map_err(|e| {
            tracing::warn!("Mission {} failed: {}", kind, e);
            e
        })?;

        Ok(MissionResult { agent, result })
    }
}
