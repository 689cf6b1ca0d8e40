//! Session controller
//!
//! The controller ties the pieces of a cooking session together:
//! - Fetches recipes from the data source
//! - Drives the session state machine
//! - Owns the servings selector, ingredient checklist, and step sequencer
//! - Turns keyboard commands and ticks into sequencer calls

use klynk_core::catalog::{filter_recipes, RecipeFilter};
use klynk_core::config::{CategoryConfig, ClientConfig};
use klynk_core::ingredients::{group_ingredients, IngredientChecklist, IngredientGroups};
use klynk_core::model::{CookingStep, Recipe};
use klynk_core::scaling::{scale_ingredients, QuantityScaler, ScaledIngredient, ServingsSelector};
use klynk_core::sequencer::StepSequencer;
use klynk_core::state::{Event, SessionState};
use klynk_protocol::{load_catalog, load_recipe, RecipeBundle, RecipeSource, SourceError};
use tracing::{debug, info, warn};

use crate::input::Command;

/// Controller state for one terminal session
pub struct Controller<S> {
    /// Where recipes come from
    source: S,
    /// Client settings
    config: ClientConfig,
    /// Quantity formatter built from the settings
    scaler: QuantityScaler,
    /// Which screen is showing
    state: SessionState,
    /// Id of the most recently requested recipe
    requested_id: Option<String>,
    /// Loaded recipe with ingredients and steps
    recipe: Option<RecipeBundle>,
    /// Serving picker for the loaded recipe
    servings: Option<ServingsSelector>,
    /// Ticked-off ingredients
    checklist: IngredientChecklist,
    /// Present while cooking
    sequencer: Option<StepSequencer>,
    /// Message for the user about the last command
    notice: Option<String>,
}

impl<S: RecipeSource> Controller<S> {
    /// Create a controller in the browsing state
    pub fn new(source: S, config: ClientConfig) -> Self {
        let scaler = config.scaling.scaler();
        Self {
            source,
            config,
            scaler,
            state: SessionState::Browsing,
            requested_id: None,
            recipe: None,
            servings: None,
            checklist: IngredientChecklist::new(),
            sequencer: None,
            notice: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Category pills
    pub fn categories(&self) -> &[CategoryConfig] {
        &self.config.categories
    }

    /// Recipes matching `filter`, in catalog order
    pub fn catalog(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, SourceError> {
        let recipes = load_catalog(&self.source)?;
        let matching = filter_recipes(&recipes, filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            total = recipes.len(),
            matching = matching.len(),
            "catalog filtered"
        );
        Ok(matching)
    }

    /// Id of the last recipe asked for
    pub fn requested_id(&self) -> Option<&str> {
        self.requested_id.as_deref()
    }

    /// Loaded recipe
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref().map(|bundle| &bundle.recipe)
    }

    /// Steps of the loaded recipe
    pub fn steps(&self) -> &[CookingStep] {
        self.recipe
            .as_ref()
            .map(|bundle| bundle.steps.as_slice())
            .unwrap_or(&[])
    }

    /// Serving picker of the loaded recipe
    pub fn servings(&self) -> Option<ServingsSelector> {
        self.servings
    }

    /// Ingredient checklist
    pub fn checklist(&self) -> &IngredientChecklist {
        &self.checklist
    }

    /// Step sequencer, while cooking
    pub fn sequencer(&self) -> Option<&StepSequencer> {
        self.sequencer.as_ref()
    }

    /// Feedback about the last command
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Ingredients scaled to the selected servings, grouped for display
    pub fn ingredient_groups(&self) -> IngredientGroups {
        let (Some(bundle), Some(selector)) = (&self.recipe, &self.servings) else {
            return IngredientGroups::default();
        };
        group_ingredients(scale_ingredients(
            &bundle.ingredients,
            bundle.recipe.servings,
            selector.value(),
            &self.scaler,
        ))
    }

    /// Check if the last step is showing and nothing is left to wait for
    pub fn is_complete(&self) -> bool {
        self.sequencer.as_ref().is_some_and(|seq| {
            seq.is_last_step() && seq.remaining_s().map_or(true, |remaining| remaining == 0)
        })
    }

    /// Fetch a recipe and show its detail screen
    ///
    /// Ignored unless browsing or on the not-found screen. Fetch failures
    /// are logged and lead to the not-found screen.
    pub fn open_recipe(&mut self, id: &str) -> Option<Event> {
        if !matches!(self.state, SessionState::Browsing | SessionState::NotFound) {
            return None;
        }

        self.transition(Event::SelectRecipe);
        self.requested_id = Some(id.to_string());
        self.sequencer = None;
        self.checklist.clear();

        let event = match load_recipe(&self.source, id) {
            Ok(bundle) => {
                info!(
                    recipe_id = %id,
                    title = %bundle.recipe.title,
                    steps = bundle.steps.len(),
                    "recipe opened"
                );
                self.servings = Some(ServingsSelector::new(
                    bundle.recipe.servings,
                    self.config.servings.max_servings(),
                ));
                self.recipe = Some(bundle);
                Event::RecipeLoaded
            }
            Err(e) => {
                warn!(recipe_id = %id, error = %e, "recipe unavailable");
                self.recipe = None;
                self.servings = None;
                Event::RecipeUnavailable
            }
        };

        self.transition(event);
        Some(event)
    }

    /// Jump to a serving count on the detail screen
    pub fn set_servings(&mut self, count: u16) -> Option<Event> {
        if self.state != SessionState::Detail {
            return None;
        }
        let selector = self.servings.as_mut()?;
        let before = selector.value();
        if selector.set(count) == before {
            return None;
        }
        Some(Event::ServingsChanged)
    }

    /// Begin guided cooking of the loaded recipe
    pub fn start_cooking(&mut self) -> Option<Event> {
        if self.state != SessionState::Detail {
            return None;
        }
        let steps = self.steps().to_vec();

        match StepSequencer::new(steps) {
            Ok(sequencer) => {
                self.sequencer = Some(
                    sequencer.with_auto_advance_delay(self.config.cooking.auto_advance_delay_s),
                );
                self.transition(Event::StartCooking);
                Some(Event::StartCooking)
            }
            Err(e) => {
                warn!(recipe_id = ?self.requested_id, error = %e, "cannot start cooking");
                self.notice = Some(format!("This recipe has no steps ({})", e));
                None
            }
        }
    }

    /// Process one keyboard command
    pub fn process_command(&mut self, command: Command) -> Option<Event> {
        self.notice = None;

        let event = match command {
            Command::Back => self.handle_back(),
            Command::Start => self.start_cooking(),
            Command::MoreServings | Command::FewerServings => self.handle_servings(command),
            Command::Check(number) => self.handle_check(number),
            Command::Next
            | Command::Previous
            | Command::ToggleTimer
            | Command::ResetTimer
            | Command::Repeat => self.handle_cooking(command),
            Command::Help | Command::Quit => None,
        };

        if let Some(event) = event {
            debug!(?command, ?event, "command handled");
        }
        event
    }

    /// Account for one elapsed tick
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.is_cooking() {
            return None;
        }
        let event = self.sequencer.as_mut()?.tick()?;

        match event {
            Event::StepChanged { index } => info!(step = index + 1, "auto-advanced"),
            Event::TimerFinished => info!("final countdown finished"),
            _ => debug!(?event, "sequencer"),
        }
        self.transition(event);
        Some(event)
    }

    fn handle_back(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Cooking => {
                self.sequencer = None;
            }
            SessionState::Detail | SessionState::NotFound => {
                self.recipe = None;
                self.servings = None;
                self.checklist.clear();
            }
            SessionState::Loading | SessionState::Browsing => {}
        }

        let before = self.state;
        self.transition(Event::Back);
        (self.state != before).then_some(Event::Back)
    }

    fn handle_servings(&mut self, command: Command) -> Option<Event> {
        if self.state != SessionState::Detail {
            return None;
        }
        let selector = self.servings.as_mut()?;
        let changed = match command {
            Command::MoreServings => selector.increase(),
            _ => selector.decrease(),
        };
        if !changed {
            self.notice = Some(format!("Servings stay at {}", selector.value()));
            return None;
        }
        Some(Event::ServingsChanged)
    }

    fn handle_check(&mut self, number: u32) -> Option<Event> {
        if self.state != SessionState::Detail {
            return None;
        }

        let id = nth_displayed(&self.ingredient_groups(), number).map(|item| item.id);
        match id {
            Some(id) => {
                self.checklist.toggle(id);
                None
            }
            None => {
                self.notice = Some(format!("There is no ingredient {}", number));
                None
            }
        }
    }

    fn handle_cooking(&mut self, command: Command) -> Option<Event> {
        if !self.state.is_cooking() {
            return None;
        }
        let sequencer = self.sequencer.as_mut()?;

        let event = match command {
            Command::Next => sequencer.go_to_next(),
            Command::Previous => sequencer.go_to_previous(),
            Command::ToggleTimer => sequencer.toggle_timer(),
            Command::ResetTimer => sequencer.reset_timer(),
            Command::Repeat => Some(Event::Repeat),
            _ => None,
        };

        if let Some(event) = event {
            self.transition(event);
        }
        event
    }

    fn transition(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, ?event, "state change");
            self.state = next;
        }
    }
}

/// Ingredient at 1-based display position `number` (prep section first)
pub fn nth_displayed(groups: &IngredientGroups, number: u32) -> Option<&ScaledIngredient> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    groups
        .sections()
        .flat_map(|(_, items)| items.iter())
        .nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klynk_protocol::TableDump;

    const DUMP: &str = r#"{
        "recipes": [
            { "id": "1", "title": "Masala Peanuts", "cooking_time": 1, "servings": 4,
              "difficulty": "Easy", "category": "Snacks" },
            { "id": "2", "title": "Empty", "cooking_time": 1, "servings": 2,
              "difficulty": "Easy", "category": "Snacks" }
        ],
        "recipe_ingredients": [
            { "id": 10, "recipe_id": "1", "quantity": 1, "unit": "tsp", "group_type": "COLLECT",
              "ingredient": { "name": "Salt" } },
            { "id": 11, "recipe_id": "1", "quantity": 2, "unit": "cup", "group_type": "PREP",
              "ingredient": { "name": "Peanuts" } }
        ],
        "recipe_steps": [
            { "id": 1, "recipe_id": "1", "step_number": 1, "instruction": "Roast", "duration": 2 },
            { "id": 2, "recipe_id": "1", "step_number": 2, "instruction": "Toss" }
        ]
    }"#;

    fn controller() -> Controller<TableDump> {
        Controller::new(TableDump::from_json(DUMP).unwrap(), ClientConfig::default())
    }

    #[test]
    fn test_open_recipe_shows_detail() {
        let mut c = controller();
        assert_eq!(c.open_recipe("1"), Some(Event::RecipeLoaded));
        assert_eq!(c.state(), SessionState::Detail);
        assert_eq!(c.servings().map(|s| s.value().get()), Some(4));
    }

    #[test]
    fn test_missing_recipe_not_found_then_back() {
        let mut c = controller();
        assert_eq!(c.open_recipe("99"), Some(Event::RecipeUnavailable));
        assert_eq!(c.state(), SessionState::NotFound);
        assert_eq!(c.requested_id(), Some("99"));

        c.process_command(Command::Back);
        assert_eq!(c.state(), SessionState::Browsing);
    }

    #[test]
    fn test_check_uses_display_order() {
        let mut c = controller();
        c.open_recipe("1");

        // Prep section comes first, so 1 is Peanuts (id 11)
        c.process_command(Command::Check(1));
        assert!(c.checklist().is_checked(11));
        assert!(!c.checklist().is_checked(10));

        c.process_command(Command::Check(7));
        assert_eq!(c.notice(), Some("There is no ingredient 7"));
    }

    #[test]
    fn test_servings_rescale_ingredients() {
        let mut c = controller();
        c.open_recipe("1");
        assert_eq!(c.set_servings(2), Some(Event::ServingsChanged));

        let groups = c.ingredient_groups();
        assert_eq!(groups.prep[0].amount(), "1 cup");
        assert_eq!(groups.collect[0].amount(), "1/2 tsp");
    }

    #[test]
    fn test_recipe_without_steps_stays_on_detail() {
        let mut c = controller();
        c.open_recipe("2");
        assert_eq!(c.process_command(Command::Start), None);
        assert_eq!(c.state(), SessionState::Detail);
        assert!(c.notice().is_some());
    }

    #[test]
    fn test_cooking_commands_ignored_outside_cooking() {
        let mut c = controller();
        c.open_recipe("1");
        assert_eq!(c.process_command(Command::Next), None);
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn test_back_from_cooking_drops_sequencer() {
        let mut c = controller();
        c.open_recipe("1");
        c.process_command(Command::Start);
        assert!(c.sequencer().is_some());

        c.process_command(Command::Back);
        assert_eq!(c.state(), SessionState::Detail);
        assert!(c.sequencer().is_none());
        assert!(c.recipe().is_some());
    }
}
