//! Step sequencer
//!
//! Tracks the current step and its countdown, and generates events for
//! the session state machine and the renderer.

use alloc::vec::Vec;
use core::fmt;

use super::timer::TimerState;
use crate::model::CookingStep;
use crate::state::Event;

/// Ticks between a finished countdown and the automatic step change
pub const DEFAULT_AUTO_ADVANCE_DELAY_S: u32 = 1;

/// Sequencer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// Recipe has no steps
    EmptySequence,
    /// Snapshot could not be decoded or does not fit the steps
    InvalidSnapshot,
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequencerError::EmptySequence => write!(f, "recipe has no cooking steps"),
            SequencerError::InvalidSnapshot => write!(f, "sequencer snapshot is invalid"),
        }
    }
}

/// Guided cooking sequencer
///
/// Steps are read-only input. Every step change rebuilds the timer and
/// drops a pending auto-advance before anything else can happen, so a
/// countdown that finished on one step never moves another.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    /// Steps in cooking order (never empty)
    steps: Vec<CookingStep>,
    /// Current step and countdown
    timer: TimerState,
    /// Ticks left until an armed auto-advance fires
    pending_advance: Option<u32>,
    /// Ticks to wait after a countdown finishes
    auto_advance_delay_s: u32,
}

impl StepSequencer {
    /// Create a sequencer positioned on the first step
    ///
    /// # Errors
    ///
    /// `EmptySequence` if `steps` is empty.
    pub fn new(steps: Vec<CookingStep>) -> Result<Self, SequencerError> {
        let first = steps.first().ok_or(SequencerError::EmptySequence)?;
        let timer = TimerState::for_step(0, first);
        Ok(Self {
            steps,
            timer,
            pending_advance: None,
            auto_advance_delay_s: DEFAULT_AUTO_ADVANCE_DELAY_S,
        })
    }

    /// Set the auto-advance grace period (at least one tick)
    pub fn with_auto_advance_delay(mut self, delay_s: u32) -> Self {
        self.auto_advance_delay_s = delay_s.max(1);
        self
    }

    /// All steps
    pub fn steps(&self) -> &[CookingStep] {
        &self.steps
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Current step index (0-based)
    pub fn current_index(&self) -> usize {
        self.timer.current_index
    }

    /// Current step
    pub fn current_step(&self) -> &CookingStep {
        &self.steps[self.timer.current_index]
    }

    /// Timer state snapshot
    pub fn timer(&self) -> TimerState {
        self.timer
    }

    /// Seconds left on the countdown (None for untimed steps)
    pub fn remaining_s(&self) -> Option<u32> {
        self.timer.remaining_s
    }

    /// Check if the countdown is running
    pub fn is_active(&self) -> bool {
        self.timer.active
    }

    /// Check if an automatic step change is armed
    pub fn is_auto_advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Check if the current step is the final one
    pub fn is_last_step(&self) -> bool {
        self.timer.current_index + 1 == self.steps.len()
    }

    /// Check if the step indicator at `index` is lit
    pub fn is_step_reached(&self, index: usize) -> bool {
        index <= self.timer.current_index
    }

    /// Progress through the sequence as a rounded percentage
    pub fn progress_percent(&self) -> u8 {
        let done = self.timer.current_index + 1;
        let total = self.steps.len();
        ((done * 200 + total) / (total * 2)) as u8
    }

    /// Advance to the next step
    ///
    /// No-op on the last step.
    pub fn go_to_next(&mut self) -> Option<Event> {
        if self.is_last_step() {
            return None;
        }
        Some(self.enter_step(self.timer.current_index + 1))
    }

    /// Go back to the previous step
    ///
    /// No-op on the first step.
    pub fn go_to_previous(&mut self) -> Option<Event> {
        if self.timer.current_index == 0 {
            return None;
        }
        Some(self.enter_step(self.timer.current_index - 1))
    }

    /// Start or pause the countdown
    ///
    /// Inert on untimed steps and on a countdown that already hit zero.
    pub fn toggle_timer(&mut self) -> Option<Event> {
        if !self.current_step().is_timed() {
            return None;
        }
        match self.timer.remaining_s {
            Some(remaining) if remaining > 0 => {
                self.timer.active = !self.timer.active;
                if self.timer.active {
                    Some(Event::TimerStarted)
                } else {
                    Some(Event::TimerPaused)
                }
            }
            _ => None,
        }
    }

    /// Restore the countdown to the step's full duration and stop it
    ///
    /// Also disarms a pending auto-advance. No-op on untimed steps.
    pub fn reset_timer(&mut self) -> Option<Event> {
        let duration = self.current_step().duration_s?;
        self.timer.remaining_s = Some(duration);
        self.timer.active = false;
        self.pending_advance = None;
        Some(Event::TimerReset)
    }

    /// Account for one elapsed second
    ///
    /// Call this from the host's periodic trigger. Returns an event if a
    /// transition occurred.
    pub fn tick(&mut self) -> Option<Event> {
        if let Some(ticks_left) = self.pending_advance {
            if ticks_left <= 1 {
                self.pending_advance = None;
                return self.go_to_next();
            }
            self.pending_advance = Some(ticks_left - 1);
            return None;
        }

        if !self.timer.active {
            return None;
        }

        match self.timer.remaining_s {
            Some(remaining) if remaining > 1 => {
                self.timer.remaining_s = Some(remaining - 1);
                None
            }
            Some(_) => self.finish_countdown(),
            None => {
                self.timer.active = false;
                None
            }
        }
    }

    /// Countdown reached zero
    fn finish_countdown(&mut self) -> Option<Event> {
        self.timer.remaining_s = Some(0);
        self.timer.active = false;

        if self.is_last_step() {
            return Some(Event::TimerFinished);
        }

        self.pending_advance = Some(self.auto_advance_delay_s);
        Some(Event::AutoAdvanceArmed)
    }

    /// Switch steps, cancelling any countdown and pending advance
    fn enter_step(&mut self, index: usize) -> Event {
        self.pending_advance = None;
        self.timer = TimerState::for_step(index, &self.steps[index]);
        Event::StepChanged { index }
    }

    /// Serialize the timer state
    ///
    /// A pending auto-advance is transient and not included.
    #[cfg(feature = "serde")]
    pub fn snapshot(&self) -> Result<Vec<u8>, SequencerError> {
        postcard::to_allocvec(&self.timer).map_err(|_| SequencerError::InvalidSnapshot)
    }

    /// Rebuild a sequencer from steps and a snapshot taken against them
    ///
    /// # Errors
    ///
    /// `EmptySequence` for an empty step list, `InvalidSnapshot` if the
    /// bytes do not decode or describe a state the steps cannot reach.
    #[cfg(feature = "serde")]
    pub fn restore(steps: Vec<CookingStep>, snapshot: &[u8]) -> Result<Self, SequencerError> {
        let mut sequencer = Self::new(steps)?;
        let timer: TimerState =
            postcard::from_bytes(snapshot).map_err(|_| SequencerError::InvalidSnapshot)?;

        let step = sequencer
            .steps
            .get(timer.current_index)
            .ok_or(SequencerError::InvalidSnapshot)?;
        if !timer.is_consistent_with(step) {
            return Err(SequencerError::InvalidSnapshot);
        }

        sequencer.timer = timer;
        Ok(sequencer)
    }
}
