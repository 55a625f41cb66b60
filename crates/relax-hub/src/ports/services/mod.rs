//! Service Ports
//!
//! Abstract interfaces for external services.

mod agent_engine;
mod llm_provider;

pub use agent_engine::*;
pub use llm_provider::*;
