//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod names;
mod protocol;
mod step;

pub use names::target_group_name;
pub use protocol::Protocol;
pub use step::Step;
