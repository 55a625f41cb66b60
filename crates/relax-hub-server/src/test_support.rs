//! Test doubles shared by the server's unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use relax_hub::{AgentEngine, Crew, HubError};

/// What the fake engine saw for one kickoff
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub role: String,
    pub description: String,
}

/// AgentEngine that returns a canned reply or error
pub struct FakeEngine {
    reply: Result<String, String>,
    runs: Mutex<Vec<RecordedRun>>,
}

impl FakeEngine {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentEngine for FakeEngine {
    async fn kickoff(&self, crew: &Crew) -> Result<String, HubError> {
        for task in &crew.tasks {
            self.runs.lock().unwrap().push(RecordedRun {
                role: task.agent.role.clone(),
                description: task.description.clone(),
            });
        }
        self.reply.clone().map_err(HubError::external)
    }

    fn engine_name(&self) -> &str {
        "fake"
    }
}
