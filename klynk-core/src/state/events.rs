//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Navigation events
    /// User opened a recipe from the catalog
    SelectRecipe,
    /// User pressed "Start cooking"
    StartCooking,
    /// User wants to go back
    Back,

    // Cooking control events
    /// User pressed next
    NextStep,
    /// User pressed previous
    PreviousStep,
    /// User pressed start/pause on the timer
    ToggleTimer,
    /// User pressed reset on the timer
    ResetTimer,
    /// User asked to hear the instruction again
    Repeat,
    /// User changed the serving count
    ServingsChanged,

    // Data events
    /// Recipe, ingredients, and steps arrived
    RecipeLoaded,
    /// Fetch failed or the recipe does not exist
    RecipeUnavailable,

    // Sequencer events
    /// Current step changed (manual or automatic)
    StepChanged { index: usize },
    /// Countdown started running
    TimerStarted,
    /// Countdown paused
    TimerPaused,
    /// Countdown restored to the step's full duration
    TimerReset,
    /// Countdown reached zero
    TimerFinished,
    /// Countdown reached zero and the next step will follow after a delay
    AutoAdvanceArmed,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::SelectRecipe
                | Event::StartCooking
                | Event::Back
                | Event::NextStep
                | Event::PreviousStep
                | Event::ToggleTimer
                | Event::ResetTimer
                | Event::Repeat
                | Event::ServingsChanged
        )
    }

    /// Check if this event is from the step sequencer
    pub fn is_sequencer_event(&self) -> bool {
        matches!(
            self,
            Event::StepChanged { .. }
                | Event::TimerStarted
                | Event::TimerPaused
                | Event::TimerReset
                | Event::TimerFinished
                | Event::AutoAdvanceArmed
        )
    }

    /// Check if this event reports a data failure
    pub fn is_error_event(&self) -> bool {
        matches!(self, Event::RecipeUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_events() {
        assert!(Event::NextStep.is_user_event());
        assert!(Event::ToggleTimer.is_user_event());
        assert!(!Event::TimerFinished.is_user_event());
        assert!(!Event::RecipeLoaded.is_user_event());
    }

    #[test]
    fn test_sequencer_events() {
        assert!(Event::StepChanged { index: 2 }.is_sequencer_event());
        assert!(Event::AutoAdvanceArmed.is_sequencer_event());
        assert!(!Event::NextStep.is_sequencer_event());
    }

    #[test]
    fn test_error_events() {
        assert!(Event::RecipeUnavailable.is_error_event());
        assert!(!Event::Back.is_error_event());
    }
}
