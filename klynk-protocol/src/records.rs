//! Row shapes as returned by the data store

use klynk_core::model::IngredientGroup;
use serde::{Deserialize, Serialize};

/// Row of the `recipes` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes
    pub cooking_time: u16,
    pub servings: u16,
    /// "Easy", "Semi" or "Hard"
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Row of the `recipe_tags` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeTagRecord {
    pub recipe_id: String,
    pub tag: String,
}

/// Joined `ingredients` columns of an ingredient row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedIngredient {
    pub name: String,
}

/// Row of the `recipe_ingredients` table with the ingredient name joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRecord {
    pub id: u32,
    pub recipe_id: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    /// "PREP" or "COLLECT"
    pub group_type: IngredientGroup,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub ingredient: JoinedIngredient,
}

/// Row of the `recipe_steps` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStepRecord {
    pub id: u32,
    pub recipe_id: String,
    /// 1-based
    pub step_number: u16,
    pub instruction: String,
    /// Seconds; null or 0 for untimed steps
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub tips: Vec<String>,
}
