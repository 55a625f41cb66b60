//! Task and Crew - Work submitted to an agent-execution engine

use crate::domain::entities::Persona;
use crate::domain::value_objects::MissionKind;

/// A single unit of work assigned to one agent
#[derive(Debug, Clone)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    pub agent: Persona,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: Persona,
    ) -> Self {
        Self {
            description: description.into(),
            expected_output: expected_output.into(),
            agent,
        }
    }

    /// Build the mission task for a kind, interpolating the raw command verbatim
    pub fn for_mission(kind: MissionKind, command: &str, agent: Persona) -> Self {
        let (description, expected_output) = match kind {
            MissionKind::Scout => (
                format!(
                    "Analyze this request and find properties: {command}. \
                     Output should be a JSON list of 5-10 pre-vetted listings."
                ),
                "A list of 5-10 property listings with price, location, and type.",
            ),
            MissionKind::Writer => (
                format!(
                    "Create a luxury listing description based on: {command}. \
                     Include TH, EN, and ZH versions."
                ),
                "A multi-lingual property description in TH, EN, and ZH.",
            ),
            MissionKind::Social => (
                format!("Plan social media activity for: {command}."),
                "A social media posting schedule and sample engagement responses.",
            ),
            MissionKind::Admin => (
                format!(
                    "Perform administrative tasks: {command}. \
                     Focus on qualification and scheduling."
                ),
                "A report of scheduled viewings and qualified lead status.",
            ),
        };

        Self::new(description, expected_output, agent)
    }
}

/// How a crew works through its tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Process {
    /// One task after another, each seeing the previous output
    #[default]
    Sequential,
}

/// A group of agents and the tasks they run
#[derive(Debug, Clone)]
pub struct Crew {
    pub agents: Vec<Persona>,
    pub tasks: Vec<Task>,
    pub process: Process,
}

impl Crew {
    pub fn new(agents: Vec<Persona>, tasks: Vec<Task>, process: Process) -> Self {
        Self {
            agents,
            tasks,
            process,
        }
    }

    /// One agent running one task sequentially
    pub fn solo(task: Task) -> Self {
        Self::new(vec![task.agent.clone()], vec![task], Process::Sequential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ModelSettings;
    use std::sync::Arc;

    #[test]
    fn test_scout_task_interpolates_command_verbatim() {
        let agent = Persona::property_scout(Arc::new(ModelSettings::default()));
        let task = Task::for_mission(MissionKind::Scout, "Find {5} condos", agent);
        assert_eq!(
            task.description,
            "Analyze this request and find properties: Find {5} condos. \
             Output should be a JSON list of 5-10 pre-vetted listings."
        );
        assert_eq!(
            task.expected_output,
            "A list of 5-10 property listings with price, location, and type."
        );
    }

    #[test]
    fn test_social_task_template() {
        let agent = Persona::social_sync(Arc::new(ModelSettings::default()));
        let task = Task::for_mission(MissionKind::Social, "share the villa", agent);
        assert_eq!(task.description, "Plan social media activity for: share the villa.");
    }

    #[test]
    fn test_solo_crew_has_one_agent_and_one_task() {
        let agent = Persona::admin_assistant(Arc::new(ModelSettings::default()));
        let crew = Crew::solo(Task::for_mission(MissionKind::Admin, "manage leads", agent));
        assert_eq!(crew.agents.len(), 1);
        assert_eq!(crew.tasks.len(), 1);
        assert_eq!(crew.process, Process::Sequential);
        assert_eq!(crew.agents[0].role, "Admin Assistant");
    }
}
