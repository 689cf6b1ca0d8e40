//! Countdown state

use core::fmt::Write;

use heapless::String;

use crate::model::CookingStep;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendered `m:ss` clock
pub type ClockText = String<12>;

/// Timer state of the current step
///
/// Derived and transient. Rebuilt from the step's duration every time
/// the current step changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerState {
    /// Current step index (0-based)
    pub current_index: usize,
    /// Seconds left on the countdown; `None` for untimed steps
    pub remaining_s: Option<u32>,
    /// Countdown is running
    pub active: bool,
}

impl TimerState {
    /// Fresh timer state for a step
    pub fn for_step(index: usize, step: &CookingStep) -> Self {
        Self {
            current_index: index,
            remaining_s: step.duration_s,
            active: false,
        }
    }

    /// Check if a countdown exists and has hit zero
    pub fn is_finished(&self) -> bool {
        self.remaining_s == Some(0)
    }

    /// Check whether this state is reachable for `step`
    pub fn is_consistent_with(&self, step: &CookingStep) -> bool {
        match (step.duration_s, self.remaining_s) {
            (None, None) => !self.active,
            (Some(duration), Some(remaining)) => {
                remaining <= duration && !(self.active && remaining == 0)
            }
            _ => false,
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_clock(seconds: u32) -> ClockText {
    let mut text = ClockText::new();
    let _ = write!(text, "{}:{:02}", seconds / 60, seconds % 60);
    text
}
