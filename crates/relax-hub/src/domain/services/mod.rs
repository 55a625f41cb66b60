//! Domain Services
//!
//! - Dispatcher: keyword routing of commands to missions
//! - CrewRunner: sequential crew execution over an LLM provider

mod crew_runner;
mod dispatcher;

pub use crew_runner::*;
pub use dispatcher::*;
