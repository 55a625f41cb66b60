//! Relax Hub Domain Library
//!
//! Core domain types and interfaces for the AE6 Relax Mode agent hub.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Personas, tasks, crews and mission results
//!   - `value_objects/`: Immutable value types (MissionKind, ModelSettings)
//!   - `services/`: Keyword dispatcher and sequential crew runner
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Agent-execution engine and LLM provider interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use relax_hub::{dispatch, CrewRunner, MissionKind};
//!
//! let kind = dispatch("Find me 5 condos in Phuket");
//! assert_eq!(kind, Some(MissionKind::Scout));
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    dispatch, Crew, CrewRunner, Guidance, HubError, MissionKind, MissionOutcome, MissionRequest,
    MissionResult, ModelSettings, Persona, Process, Task, DEFAULT_TENANT_ID, GUIDANCE_MESSAGE,
};
pub use ports::{
    AgentEngine, ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole,
    TokenUsage,
};
