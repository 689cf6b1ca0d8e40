//! Configuration types
//!
//! Platform-agnostic settings. The host decides where they come from.

pub mod types;

pub use types::*;
