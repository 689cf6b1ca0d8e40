//! Cooking steps

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One instruction of a guided cooking sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CookingStep {
    /// Data store identifier
    pub id: u32,
    /// 1-based position in the sequence
    pub position: u16,
    /// Instruction text
    pub instruction: String,
    /// Countdown length in seconds (never `Some(0)`)
    pub duration_s: Option<u32>,
    /// Tips shown under the instruction
    pub tips: Vec<String>,
}

impl CookingStep {
    /// Create an untimed step
    pub fn new(id: u32, position: u16, instruction: impl Into<String>) -> Self {
        Self {
            id,
            position,
            instruction: instruction.into(),
            duration_s: None,
            tips: Vec::new(),
        }
    }

    /// Set the countdown length; zero means untimed
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_s = if seconds == 0 { None } else { Some(seconds) };
        self
    }

    /// Add a tip
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// Check if this step has a countdown
    pub fn is_timed(&self) -> bool {
        self.duration_s.is_some()
    }
}
