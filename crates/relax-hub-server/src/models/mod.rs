//! Relax Hub API Models
//!
//! - Agent: command execution request/response DTOs
//! - Hub: service status and error bodies

mod agent;
mod hub;

pub use agent::*;
pub use hub::*;
