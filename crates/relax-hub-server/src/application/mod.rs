//! Application Layer (Use Cases)
//!
//! Turns commands into missions and runs them on the agent engine.

mod orchestrator;

pub use orchestrator::RelaxModeOrchestrator;
