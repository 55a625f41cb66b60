//! Persona - Agent configuration handed to the execution engine
//!
//! Personas are built fresh for every mission and dropped afterwards.

use std::sync::Arc;

use crate::domain::value_objects::{MissionKind, ModelSettings};

/// A named agent configuration
#[derive(Debug, Clone)]
pub struct Persona {
    /// Tag reported back to callers in mission results
    pub name: String,
    /// Role string given to the engine
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub model: Arc<ModelSettings>,
    /// Log prompts and outputs while running
    pub verbose: bool,
    pub allow_delegation: bool,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
        model: Arc<ModelSettings>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            model,
            verbose: true,
            allow_delegation: false,
        }
    }

    /// Build the persona that handles a given mission kind
    pub fn for_mission(kind: MissionKind, model: Arc<ModelSettings>) -> Self {
        match kind {
            MissionKind::Scout => Self::property_scout(model),
            MissionKind::Writer => Self::listing_writer(model),
            MissionKind::Social => Self::social_sync(model),
            MissionKind::Admin => Self::admin_assistant(model),
        }
    }

    pub fn property_scout(model: Arc<ModelSettings>) -> Self {
        Self::new(
            "Property Scout",
            "Property Scout",
            "Scan social media and competitor sites for new luxury property listings in Thailand",
            "You are an expert real estate researcher. You have 24/7 access to \
             LINE VOOM, Facebook groups, and major real estate portals. You filter listings \
             based on strict luxury criteria (price, zone, type) and save the best ones.",
            model,
        )
    }

    pub fn listing_writer(model: Arc<ModelSettings>) -> Self {
        Self::new(
            "Listing Writer",
            "Listing Writer",
            "Create compelling, multi-lingual (TH/EN/ZH) property descriptions",
            "You are a world-class copywriter specializing in luxury real estate. \
             You take raw data and transform it into emotional, high-converting narratives \
             tailored for high-net-worth individuals.",
            model,
        )
    }

    pub fn social_sync(model: Arc<ModelSettings>) -> Self {
        Self::new(
            "Social Sync",
            "Social Sync Manager",
            "Optimize social media presence and engagement",
            "You manage all social channels. You know the best times to post \
             and how to engage with potential leads. You ensure a consistent, premium \
             brand presence without human intervention.",
            model,
        )
    }

    pub fn admin_assistant(model: Arc<ModelSettings>) -> Self {
        Self::new(
            "Admin Assistant",
            "Admin Assistant",
            "Handle lead qualification and scheduling",
            "You are the backbone of the agency. You qualify leads, schedule \
             viewings, send follow-ups, and generate reports. You ensure the agent only \
             focuses on high-value meetings.",
            model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_has_non_empty_fields() {
        let model = Arc::new(ModelSettings::default());
        for kind in MissionKind::PRIORITY {
            let persona = Persona::for_mission(kind, model.clone());
            assert!(!persona.name.is_empty());
            assert!(!persona.role.is_empty());
            assert!(!persona.goal.is_empty());
            assert!(!persona.backstory.is_empty());
            assert!(!persona.allow_delegation);
        }
    }

    #[test]
    fn test_social_persona_name_differs_from_role() {
        let persona = Persona::social_sync(Arc::new(ModelSettings::default()));
        assert_eq!(persona.name, "Social Sync");
        assert_eq!(persona.role, "Social Sync Manager");
    }

    #[test]
    fn test_personas_share_model_settings() {
        let model = Arc::new(ModelSettings::new("gpt-4o", 0.5));
        let scout = Persona::for_mission(MissionKind::Scout, model.clone());
        let admin = Persona::for_mission(MissionKind::Admin, model.clone());
        assert!(Arc::ptr_eq(&scout.model, &admin.model));
        assert_eq!(scout.model.model, "gpt-4o");
    }
}
