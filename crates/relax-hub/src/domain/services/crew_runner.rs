//! Crew Runner - Sequential agent execution over an LLM provider
//!
//! Each task becomes one chat completion: the agent's role, goal and
//! backstory form the system prompt, the task forms the user prompt.
//! Later tasks receive the previous task's output as context, and the
//! crew's result is the final task's output.

use async_trait::async_trait;

use crate::domain::entities::{Crew, Persona, Process, Task};
use crate::domain::errors::HubError;
use crate::ports::{AgentEngine, ChatMessage, CompletionOptions, LlmProvider};

/// `AgentEngine` backed by a chat-completion provider
pub struct CrewRunner<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> CrewRunner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    async fn run_task(&self, task: &Task, context: Option<&str>) -> Result<String, HubError> {
        let agent = &task.agent;
        let messages = vec![
            ChatMessage::system(build_system_prompt(agent)),
            ChatMessage::user(build_task_prompt(task, context)),
        ];
        let options =
            CompletionOptions::for_model(agent.model.model.clone(), agent.model.temperature);

        if agent.verbose {
            tracing::debug!(agent = %agent.role, "Task started: {}", task.description);
        }

        let response = self.provider.complete(&messages, &options).await?;

        if agent.verbose {
            tracing::debug!(
                agent = %agent.role,
                model = %response.model,
                tokens = response.usage.total_tokens,
                "Task finished: {}",
                response.content
            );
        }

        Ok(response.content)
    }
}

#[async_trait]
impl<P: LlmProvider> AgentEngine for CrewRunner<P> {
    async fn kickoff(&self, crew: &Crew) -> Result<String, HubError> {
        if crew.tasks.is_empty() {
            return Err(HubError::validation("Crew has no tasks to run"));
        }

        match crew.process {
            Process::Sequential => {
                let mut output: Option<String> = None;
                for task in &crew.tasks {
                    output = Some(self.run_task(task, output.as_deref()).await?);
                }
                output.ok_or_else(|| HubError::validation("Crew produced no output"))
            }
        }
    }

    fn engine_name(&self) -> &str {
        self.provider.provider_name()
    }
}

/// System prompt carrying the agent's identity
fn build_system_prompt(agent: &Persona) -> String {
    format!(
        "You are {}. {}\nYour personal goal is: {}",
        agent.role, agent.backstory, agent.goal
    )
}

/// User prompt carrying the task, its expected output and prior context
fn build_task_prompt(task: &Task, context: Option<&str>) -> String {
    let mut prompt = format!(
        "Current Task: {}\n\nThis is the expected criteria for your final answer: {}",
        task.description, task.expected_output
    );

    if let Some(context) = context {
        prompt.push_str("\n\nThis is the context you're working with:\n");
        prompt.push_str(context);
    }

    prompt.push_str("\n\nBegin! Provide your complete final answer.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{MissionKind, ModelSettings};
    use crate::ports::{CompletionResponse, TokenUsage};
    use std::sync::{Arc, Mutex};

    /// Records every call and replies with numbered answers
    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            options: &CompletionOptions,
        ) -> Result<CompletionResponse, HubError> {
            if let Some(message) = &self.fail_with {
                return Err(HubError::external(message.clone()));
            }
            let mut calls = self.calls.lock().unwrap();
            calls.push((messages.to_vec(), options.clone()));
            Ok(CompletionResponse {
                content: format!("answer {}", calls.len()),
                model: options.model.clone().unwrap_or_default(),
                usage: TokenUsage::default(),
                finish_reason: Some("stop".to_string()),
            })
        }

        fn provider_name(&self) -> &str {
            "recording"
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }

    fn scout_task(command: &str) -> Task {
        let model = Arc::new(ModelSettings::new("gpt-4o-mini", 0.2));
        let agent = Persona::for_mission(MissionKind::Scout, model);
        Task::for_mission(MissionKind::Scout, command, agent)
    }

    #[tokio::test]
    async fn test_solo_crew_prompts_and_options() {
        let runner = CrewRunner::new(RecordingProvider::default());
        let crew = Crew::solo(scout_task("Find condos in Phuket"));

        let output = runner.kickoff(&crew).await.unwrap();
        assert_eq!(output, "answer 1");

        let calls = runner.provider().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (messages, options) = &calls[0];
        assert_eq!(messages[0].role, crate::ports::MessageRole::System);
        assert!(messages[0].content.contains("Property Scout"));
        assert!(messages[0].content.contains("luxury property listings in Thailand"));
        assert!(messages[1].content.contains("find properties: Find condos in Phuket."));
        assert!(messages[1]
            .content
            .contains("A list of 5-10 property listings with price, location, and type."));
        assert!(!messages[1].content.contains("context you're working with"));
        assert_eq!(options.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(options.temperature, Some(0.2));
    }

    #[tokio::test]
    async fn test_sequential_tasks_pass_context_forward() {
        let runner = CrewRunner::new(RecordingProvider::default());
        let first = scout_task("find villas");
        let second = scout_task("find more villas");
        let crew = Crew::new(vec![first.agent.clone()], vec![first, second], Process::Sequential);

        let output = runner.kickoff(&crew).await.unwrap();
        assert_eq!(output, "answer 2");

        let calls = runner.provider().calls.lock().unwrap();
        assert!(calls[1].0[1].content.contains("answer 1"));
    }

    #[tokio::test]
    async fn test_empty_crew_is_rejected() {
        let runner = CrewRunner::new(RecordingProvider::default());
        let crew = Crew::new(vec![], vec![], Process::Sequential);
        let err = runner.kickoff(&crew).await.unwrap_err();
        assert!(matches!(err, HubError::Validation(_)));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate_unchanged() {
        let runner = CrewRunner::new(RecordingProvider {
            fail_with: Some("quota exceeded".to_string()),
            ..Default::default()
        });
        let err = runner.kickoff(&Crew::solo(scout_task("find"))).await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
