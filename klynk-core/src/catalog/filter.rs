//! Catalog filter

use alloc::string::String;
use alloc::vec::Vec;

use crate::model::Recipe;

/// Category id meaning "no category restriction"
pub const ALL_CATEGORIES_ID: &str = "All";

/// Category restriction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// Exactly this category
    Named(String),
}

impl CategoryFilter {
    /// Build from a category id; "All" (any case) means no restriction
    pub fn from_id(id: &str) -> Self {
        if id.eq_ignore_ascii_case(ALL_CATEGORIES_ID) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(id.into())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

/// Search query plus filters applied to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeFilter {
    /// Free-text search over title, description and tags
    pub query: String,
    /// Category restriction
    pub category: CategoryFilter,
    /// Upper bound on cooking time in minutes
    pub max_cooking_time_min: Option<u16>,
}

impl RecipeFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_max_cooking_time(mut self, minutes: u16) -> Self {
        self.max_cooking_time_min = Some(minutes);
        self
    }

    /// Check a recipe against every active filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.matches_query(recipe) {
            return false;
        }

        if !self.category.matches(&recipe.category) {
            return false;
        }

        if let Some(limit) = self.max_cooking_time_min {
            if recipe.cooking_time_min > limit {
                return false;
            }
        }

        true
    }

    /// Case-insensitive substring search; a blank query matches everything
    fn matches_query(&self, recipe: &Recipe) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();

        recipe.title.to_lowercase().contains(&needle)
            || recipe.description.to_lowercase().contains(&needle)
            || recipe
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Heading shown above the results
    pub fn section_title(&self) -> &str {
        match &self.category {
            CategoryFilter::All => "Popular Recipes",
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Recipes matching `filter`, in catalog order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|recipe| filter.matches(recipe)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::scaling::Servings;
    use alloc::string::ToString;
    use alloc::vec;

    fn make_recipe(id: &str, title: &str, category: &str, minutes: u16, tags: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: alloc::format!("{} description", title),
            cooking_time_min: minutes,
            servings: Servings::new(2).unwrap(),
            difficulty: Difficulty::Easy,
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            calories: 200,
            image: None,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            make_recipe("1", "Masala Peanuts", "Snacks", 1, &["Vegan", "Indian", "Chaat"]),
            make_recipe("2", "Thai Peanut Salad", "Healthy", 4, &["Veg", "Thai"]),
            make_recipe("4", "Tomato Peanut Chutney", "South Indian", 22, &["Andhra"]),
            make_recipe("8", "Bruschetta", "Snacks", 6, &["Vegan", "Italian"]),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let recipes = catalog();
        let result = filter_recipes(&recipes, &RecipeFilter::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let recipes = catalog();
        let filter = RecipeFilter::default().with_query("PEANUT");
        assert_eq!(ids(&filter_recipes(&recipes, &filter)), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_search_tags() {
        let recipes = catalog();
        let filter = RecipeFilter::default().with_query("italian");
        assert_eq!(ids(&filter_recipes(&recipes, &filter)), vec!["8"]);
    }

    #[test]
    fn test_search_description() {
        let recipes = catalog();
        let filter = RecipeFilter::default().with_query("chutney desc");
        assert_eq!(ids(&filter_recipes(&recipes, &filter)), vec!["4"]);
    }

    #[test]
    fn test_category_filter() {
        let recipes = catalog();
        let filter = RecipeFilter::default().with_category(CategoryFilter::from_id("Snacks"));
        assert_eq!(ids(&filter_recipes(&recipes, &filter)), vec!["1", "8"]);
        assert_eq!(filter.section_title(), "Snacks");
    }

    #[test]
    fn test_all_category_title() {
        let filter = RecipeFilter::default().with_category(CategoryFilter::from_id("all"));
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(filter.section_title(), "Popular Recipes");
    }

    #[test]
    fn test_combined_filters() {
        let recipes = catalog();
        let filter = RecipeFilter::default()
            .with_query("vegan")
            .with_category(CategoryFilter::from_id("Snacks"))
            .with_max_cooking_time(5);
        assert_eq!(ids(&filter_recipes(&recipes, &filter)), vec!["1"]);
    }

    #[test]
    fn test_no_results_is_empty() {
        let recipes = catalog();
        let filter = RecipeFilter::default().with_query("pizza");
        assert!(filter_recipes(&recipes, &filter).is_empty());
    }
}
