//! Domain Entities
//!
//! - Persona: Agent configuration (role, goal, backstory, model)
//! - Task / Crew: Units of work submitted to an agent engine
//! - Mission: Request and outcome of one command

mod crew;
mod mission;
mod persona;

pub use crew::*;
pub use mission::*;
pub use persona::*;
