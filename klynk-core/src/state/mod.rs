//! Session state machine
//!
//! Defines which screen the client is showing and how events move it.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::SessionState;
