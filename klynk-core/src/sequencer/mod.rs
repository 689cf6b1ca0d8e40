//! Guided cooking step sequencer
//!
//! Walks an ordered list of cooking steps and runs the optional
//! countdown attached to each one. The host owns the clock and calls
//! `tick` once per elapsed second.

pub mod steps;
pub mod timer;

pub use steps::{SequencerError, StepSequencer, DEFAULT_AUTO_ADVANCE_DELAY_S};
pub use timer::{format_clock, ClockText, TimerState};
