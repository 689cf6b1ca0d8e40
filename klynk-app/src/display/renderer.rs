//! Screen rendering
//!
//! Builds text screens for the catalog, recipe detail, guided cooking
//! and not-found views. Rendering never changes session state.

use klynk_core::config::CategoryConfig;
use klynk_core::ingredients::{IngredientChecklist, IngredientGroups};
use klynk_core::model::Recipe;
use klynk_core::scaling::ServingsSelector;
use klynk_core::sequencer::{format_clock, StepSequencer};

use super::screen::Screen;

/// Cells in the cooking progress bar
const PROGRESS_CELLS: usize = 20;

/// Screen renderer for the session views
#[derive(Debug, Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a new renderer
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render the recipe list
    ///
    /// `selected` is the id of the active category pill.
    pub fn render_catalog(
        &mut self,
        title: &str,
        categories: &[CategoryConfig],
        selected: &str,
        recipes: &[Recipe],
    ) {
        self.screen.clear();
        self.screen.push_line("=== KLYNK ===");

        let pills = categories
            .iter()
            .map(|c| {
                if c.id == selected {
                    format!("[{} {}]", c.icon, c.name)
                } else {
                    format!(" {} {} ", c.icon, c.name)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.screen.push_line(&pills);
        self.screen.blank();

        self.screen
            .push_line(&format!("{} ({})", title, recipes.len()));
        if recipes.is_empty() {
            self.screen.push_line("  No recipes found");
            return;
        }

        for recipe in recipes {
            self.screen.push_line(&format!(
                "{:>4}  {}  {} | {} | {} kcal",
                recipe.id,
                recipe.title,
                recipe.cooking_time_label(),
                recipe.difficulty.label(),
                recipe.calories
            ));
            if !recipe.tags.is_empty() {
                self.screen
                    .push_line(&format!("      {}", recipe.tags.join(", ")));
            }
        }
    }

    /// Render the recipe detail with scaled ingredients
    pub fn render_detail(
        &mut self,
        recipe: &Recipe,
        servings: ServingsSelector,
        groups: &IngredientGroups,
        checklist: &IngredientChecklist,
    ) {
        self.screen.clear();
        self.screen.push_line(&format!("=== {} ===", recipe.title));
        if !recipe.description.is_empty() {
            self.screen.push_line(&recipe.description);
        }

        let minus = if servings.can_decrease() { "-" } else { " " };
        let plus = if servings.can_increase() { "+" } else { " " };
        self.screen.push_line(&format!(
            "Serves ({}) {} ({}) | {} | {} | {} kcal",
            minus,
            servings.value(),
            plus,
            recipe.difficulty.label(),
            recipe.cooking_time_label(),
            recipe.calories
        ));
        if !recipe.tags.is_empty() {
            let tags = recipe
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            self.screen.push_line(&tags);
        }
        self.screen.blank();

        self.screen.push_line(&format!(
            "INGREDIENTS ({}/{} checked)",
            checklist.checked_count(),
            groups.len()
        ));

        let mut number = 0;
        for (group, items) in groups.sections() {
            self.screen.push_line(group.heading());
            for item in items {
                number += 1;
                let mark = if checklist.is_checked(item.id) { "x" } else { " " };
                let icon = item.icon.as_deref().unwrap_or("-");
                let mut line = format!(
                    "  [{}] {:>2}. {} {}  {}",
                    mark,
                    number,
                    icon,
                    item.name,
                    item.amount()
                );
                if let Some(note) = &item.note {
                    line.push_str(&format!("  ({})", note));
                }
                self.screen.push_line(&line);
            }
        }
        if groups.is_empty() {
            self.screen.push_line("  No ingredients listed");
        }

        self.screen.blank();
        self.screen
            .push_line("s start cooking  +/- servings  c N check  b back  q quit");
    }

    /// Render the current cooking step
    pub fn render_cooking(&mut self, title: &str, sequencer: &StepSequencer, complete: bool) {
        self.screen.clear();

        let step = sequencer.current_step();
        let count = sequencer.step_count();
        self.screen.push_line(&format!("=== {} ===", title));
        self.screen.push_line(&format!(
            "Step {} of {}",
            sequencer.current_index() + 1,
            count
        ));

        let percent = sequencer.progress_percent();
        self.screen
            .push_line(&format!("{} {}%", progress_bar(percent), percent));

        let indicator: String = (0..count)
            .map(|i| if sequencer.is_step_reached(i) { '*' } else { '.' })
            .collect();
        self.screen.push_line(&indicator);
        self.screen.blank();

        self.screen.push_line(&step.instruction);
        self.screen.blank();

        if let Some(remaining) = sequencer.remaining_s() {
            let status = if sequencer.is_active() {
                "running"
            } else if sequencer.timer().is_finished() {
                "done"
            } else {
                "paused"
            };
            self.screen
                .push_line(&format!("Timer {}  {}", format_clock(remaining), status));
            if sequencer.is_auto_advance_pending() {
                self.screen.push_line("Next step coming up...");
            }
            self.screen.blank();
        }

        if !step.tips.is_empty() {
            self.screen.push_line("Tips:");
            for tip in &step.tips {
                self.screen.push_line(&format!("  * {}", tip));
            }
            self.screen.blank();
        }

        if complete {
            self.screen.push_line("*** All done! Enjoy your meal. ***");
            self.screen.blank();
        }

        self.screen
            .push_line("n next  p prev  t timer  r reset  a again  b back  q quit");
    }

    /// Render the not-found screen
    pub fn render_not_found(&mut self, recipe_id: Option<&str>) {
        self.screen.clear();
        self.screen.push_line("=== Recipe not found ===");
        match recipe_id {
            Some(id) => self
                .screen
                .push_line(&format!("Recipe {} could not be loaded.", id)),
            None => self.screen.push_line("The recipe could not be loaded."),
        };
        self.screen.blank();
        self.screen.push_line("b back to recipes  q quit");
    }

    /// Render a block of help text
    pub fn render_text(&mut self, text: &str) {
        self.screen.clear();
        for line in text.lines() {
            self.screen.push_line(line);
        }
    }

    /// Append a one-line notice to the current screen
    pub fn push_notice(&mut self, notice: &str) {
        self.screen.push_line(&format!("! {}", notice));
    }
}

/// `[#####---------------]` for a percentage
fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_CELLS / 100;
    let mut bar = String::with_capacity(PROGRESS_CELLS + 2);
    bar.push('[');
    for i in 0..PROGRESS_CELLS {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use klynk_core::config::default_categories;
    use klynk_core::ingredients::group_ingredients;
    use klynk_core::model::{CookingStep, Difficulty, IngredientGroup};
    use klynk_core::scaling::{ScaledIngredient, Servings};

    fn recipe() -> Recipe {
        Recipe {
            id: "9".into(),
            title: "Rasam Rice".into(),
            description: "Tangy rasam tossed with rice".into(),
            cooking_time_min: 12,
            servings: Servings::new(4).unwrap(),
            difficulty: Difficulty::Semi,
            category: "South Indian".into(),
            tags: vec!["Vegan".into(), "Indian".into()],
            calories: 478,
            image: None,
        }
    }

    fn scaled(id: u32, name: &str, group: IngredientGroup) -> ScaledIngredient {
        ScaledIngredient {
            id,
            name: name.into(),
            quantity: "1/2".into(),
            unit: "tsp".into(),
            group,
            note: None,
            icon: None,
        }
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "[--------------------]");
        assert_eq!(progress_bar(50), "[##########----------]");
        assert_eq!(progress_bar(100), "[####################]");
    }

    #[test]
    fn test_catalog_marks_selected_pill() {
        let mut renderer = Renderer::new();
        renderer.render_catalog("Snacks", &default_categories(), "Snacks", &[recipe()]);

        let screen = renderer.screen();
        assert!(screen.contains("[🍿 Snacks]"));
        assert!(screen.contains("Snacks (1)"));
        assert!(screen.contains("Rasam Rice  12 mins | Semi | 478 kcal"));
    }

    #[test]
    fn test_empty_catalog() {
        let mut renderer = Renderer::new();
        renderer.render_catalog("Popular Recipes", &default_categories(), "All", &[]);
        assert!(renderer.screen().contains("No recipes found"));
    }

    #[test]
    fn test_detail_groups_and_checks() {
        let groups = group_ingredients(vec![
            scaled(1, "Salt", IngredientGroup::Collect),
            scaled(2, "Tomato", IngredientGroup::Prep),
        ]);
        let mut checklist = IngredientChecklist::new();
        checklist.toggle(1);
        let selector = ServingsSelector::new(Servings::ONE, Servings::new(10).unwrap());

        let mut renderer = Renderer::new();
        renderer.render_detail(&recipe(), selector, &groups, &checklist);
        let screen = renderer.screen();

        assert!(screen.contains("Serves ( ) 1 (+)"));
        assert!(screen.contains("INGREDIENTS (1/2 checked)"));
        let prep = screen.lines().position(|l| l == "PREP THESE").unwrap();
        let collect = screen.lines().position(|l| l == "COLLECT THESE").unwrap();
        assert!(prep < collect);
        assert!(screen.contains("[ ]  1. - Tomato  1/2 tsp"));
        assert!(screen.contains("[x]  2. - Salt  1/2 tsp"));
    }

    #[test]
    fn test_cooking_screen() {
        let steps = vec![
            CookingStep::new(1, 1, "Pre-heat the pan")
                .with_duration(60)
                .with_tip("Make sure the pan is completely dry"),
            CookingStep::new(2, 2, "Serve hot"),
        ];
        let sequencer = StepSequencer::new(steps).unwrap();

        let mut renderer = Renderer::new();
        renderer.render_cooking("Rasam Rice", &sequencer, false);
        let screen = renderer.screen();

        assert!(screen.contains("Step 1 of 2"));
        assert!(screen.contains("50%"));
        assert!(screen.contains("*."));
        assert!(screen.contains("Timer 1:00  paused"));
        assert!(screen.contains("  * Make sure the pan is completely dry"));
        assert!(!screen.contains("All done"));
    }

    #[test]
    fn test_finished_countdown_reads_done() {
        let steps = vec![
            CookingStep::new(1, 1, "Boil").with_duration(1),
            CookingStep::new(2, 2, "Serve"),
        ];
        let mut sequencer = StepSequencer::new(steps).unwrap();
        sequencer.toggle_timer();
        sequencer.tick();

        let mut renderer = Renderer::new();
        renderer.render_cooking("Rasam Rice", &sequencer, false);
        assert!(renderer.screen().contains("Timer 0:00  done"));
    }

    #[test]
    fn test_not_found_offers_back() {
        let mut renderer = Renderer::new();
        renderer.render_not_found(Some("42"));
        assert!(renderer.screen().contains("Recipe 42 could not be loaded."));
        assert!(renderer.screen().contains("b back"));
    }
}
