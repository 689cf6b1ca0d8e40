//! Recipe data source

use klynk_core::model::{CookingStep, Ingredient, Recipe};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::convert::{into_ingredients, into_recipe, into_steps, RecordError};
use crate::records::{RecipeIngredientRecord, RecipeRecord, RecipeStepRecord, RecipeTagRecord};

/// Fetch failures
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("recipe {0} not found")]
    NotFound(String),

    #[error("data store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed data store payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Read access to the recipe tables
///
/// Implementations return raw rows. An unknown recipe id is
/// [`SourceError::NotFound`]; a recipe without ingredients or steps is
/// an empty list, not an error.
pub trait RecipeSource {
    /// All rows of `recipes`
    fn list_recipes(&self) -> Result<Vec<RecipeRecord>, SourceError>;

    /// One row of `recipes`
    fn fetch_recipe(&self, id: &str) -> Result<RecipeRecord, SourceError>;

    /// All rows of `recipe_tags`
    fn fetch_tags(&self) -> Result<Vec<RecipeTagRecord>, SourceError>;

    /// Ingredient rows of one recipe
    fn fetch_ingredients(&self, recipe_id: &str)
        -> Result<Vec<RecipeIngredientRecord>, SourceError>;

    /// Step rows of one recipe
    fn fetch_steps(&self, recipe_id: &str) -> Result<Vec<RecipeStepRecord>, SourceError>;
}

/// A recipe with everything the detail and cooking views need
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeBundle {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<CookingStep>,
}

/// Load every valid recipe
///
/// A row that fails conversion is skipped with a warning so one bad
/// record does not empty the catalog.
pub fn load_catalog<S: RecipeSource + ?Sized>(source: &S) -> Result<Vec<Recipe>, SourceError> {
    let tags = source.fetch_tags()?;
    let mut recipes = Vec::new();

    for record in source.list_recipes()? {
        let id = record.id.clone();
        match into_recipe(record, &tags) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => warn!(recipe_id = %id, error = %e, "skipping invalid recipe"),
        }
    }

    debug!(count = recipes.len(), "catalog loaded");
    Ok(recipes)
}

/// Load one recipe with its ingredients and steps
pub fn load_recipe<S: RecipeSource + ?Sized>(
    source: &S,
    id: &str,
) -> Result<RecipeBundle, SourceError> {
    let tags = source.fetch_tags()?;
    let recipe = into_recipe(source.fetch_recipe(id)?, &tags)?;
    let ingredients = into_ingredients(source.fetch_ingredients(id)?)?;
    let steps = into_steps(source.fetch_steps(id)?)?;

    debug!(
        recipe_id = %id,
        ingredients = ingredients.len(),
        steps = steps.len(),
        "recipe loaded"
    );

    Ok(RecipeBundle {
        recipe,
        ingredients,
        steps,
    })
}

/// In-memory copy of the recipe tables
///
/// Deserialized from a JSON object with one array per table. Missing
/// tables are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDump {
    pub recipes: Vec<RecipeRecord>,
    pub recipe_tags: Vec<RecipeTagRecord>,
    pub recipe_ingredients: Vec<RecipeIngredientRecord>,
    pub recipe_steps: Vec<RecipeStepRecord>,
}

impl TableDump {
    /// Parse a JSON table dump
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    fn require_recipe(&self, id: &str) -> Result<(), SourceError> {
        if self.recipes.iter().any(|r| r.id == id) {
            Ok(())
        } else {
            Err(SourceError::NotFound(id.to_string()))
        }
    }
}

impl RecipeSource for TableDump {
    fn list_recipes(&self) -> Result<Vec<RecipeRecord>, SourceError> {
        Ok(self.recipes.clone())
    }

    fn fetch_recipe(&self, id: &str) -> Result<RecipeRecord, SourceError> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    fn fetch_tags(&self) -> Result<Vec<RecipeTagRecord>, SourceError> {
        Ok(self.recipe_tags.clone())
    }

    fn fetch_ingredients(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<RecipeIngredientRecord>, SourceError> {
        self.require_recipe(recipe_id)?;
        Ok(self
            .recipe_ingredients
            .iter()
            .filter(|r| r.recipe_id == recipe_id)
            .cloned()
            .collect())
    }

    fn fetch_steps(&self, recipe_id: &str) -> Result<Vec<RecipeStepRecord>, SourceError> {
        self.require_recipe(recipe_id)?;
        Ok(self
            .recipe_steps
            .iter()
            .filter(|r| r.recipe_id == recipe_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "recipes": [
            { "id": "1", "title": "Masala Peanuts", "cooking_time": 20, "servings": 4,
              "difficulty": "Semi", "category": "Snacks", "calories": 478 },
            { "id": "2", "title": "Broken", "cooking_time": 5, "servings": 0,
              "difficulty": "Easy" }
        ],
        "recipe_tags": [ { "recipe_id": "1", "tag": "Vegan" } ],
        "recipe_steps": [
            { "id": 2, "recipe_id": "1", "step_number": 2, "instruction": "Toss", "duration": null },
            { "id": 1, "recipe_id": "1", "step_number": 1, "instruction": "Roast", "duration": 300 }
        ]
    }"#;

    #[test]
    fn test_catalog_skips_invalid_rows() {
        let dump = TableDump::from_json(DUMP).unwrap();
        let recipes = load_catalog(&dump).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].tags, vec!["Vegan".to_string()]);
    }

    #[test]
    fn test_load_recipe_orders_steps() {
        let dump = TableDump::from_json(DUMP).unwrap();
        let bundle = load_recipe(&dump, "1").unwrap();
        assert!(bundle.ingredients.is_empty());
        assert_eq!(bundle.steps.len(), 2);
        assert_eq!(bundle.steps[0].instruction, "Roast");
        assert_eq!(bundle.steps[0].duration_s, Some(300));
    }

    #[test]
    fn test_unknown_recipe_not_found() {
        let dump = TableDump::from_json(DUMP).unwrap();
        assert!(matches!(
            load_recipe(&dump, "42"),
            Err(SourceError::NotFound(id)) if id == "42"
        ));
        assert!(matches!(dump.fetch_steps("42"), Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_invalid_recipe_fails_load() {
        let dump = TableDump::from_json(DUMP).unwrap();
        assert!(matches!(
            load_recipe(&dump, "2"),
            Err(SourceError::Record(RecordError::InvalidServings { .. }))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            TableDump::from_json("{ \"recipes\": 5 }"),
            Err(SourceError::Decode(_))
        ));
    }
}
