//! Value Objects
//!
//! Immutable value types with no identity.

mod mission_kind;
mod model_settings;

pub use mission_kind::*;
pub use model_settings::*;
