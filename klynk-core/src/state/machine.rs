//! State machine definition
//!
//! What the client shows is a function of the current state and an event.

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Catalog list with search and filters
    #[default]
    Browsing,
    /// Waiting for a recipe fetch
    Loading,
    /// Recipe detail with servings and ingredients
    Detail,
    /// Guided cooking, one step at a time
    Cooking,
    /// Recipe could not be fetched
    NotFound,
}

impl SessionState {
    /// Check if the step sequencer drives this state
    pub fn is_cooking(&self) -> bool {
        matches!(self, SessionState::Cooking)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use SessionState::*;

        match (self, event) {
            // Browsing transitions
            (Browsing, SelectRecipe) => Loading,

            // Loading transitions
            (Loading, RecipeLoaded) => Detail,
            (Loading, RecipeUnavailable) => NotFound,
            (Loading, Back) => Browsing,

            // Detail transitions
            (Detail, StartCooking) => Cooking,
            (Detail, Back) => Browsing,
            (Detail, RecipeUnavailable) => NotFound,

            // Cooking transitions
            (Cooking, Back) => Detail,
            (Cooking, RecipeUnavailable) => NotFound,

            // NotFound always leads back to the catalog
            (NotFound, Back) => Browsing,
            (NotFound, SelectRecipe) => Loading,

            // Default: stay in current state
            _ => self,
        }
    }
}
