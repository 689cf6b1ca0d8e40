//! Record to model conversion
//!
//! Conversion is where untrusted rows are checked: zero servings,
//! unknown difficulty labels, non-positive quantities and broken step
//! numbering all stop here instead of reaching the core.

use klynk_core::model::{CookingStep, Difficulty, Ingredient, Recipe};
use klynk_core::scaling::Servings;
use thiserror::Error;

use crate::records::{RecipeIngredientRecord, RecipeRecord, RecipeStepRecord, RecipeTagRecord};

/// A record that cannot become a model value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("recipe {recipe_id}: servings must be at least 1")]
    InvalidServings { recipe_id: String },

    #[error("recipe {recipe_id}: unknown difficulty {label:?}")]
    UnknownDifficulty { recipe_id: String, label: String },

    #[error("ingredient {id}: quantity must be a positive number, got {quantity}")]
    InvalidQuantity { id: u32, quantity: f64 },

    #[error("step numbering broken: expected step {expected}, found {found}")]
    StepOrder { expected: u16, found: u16 },
}

/// Build a recipe from its row and the tag table
///
/// Only tags whose `recipe_id` matches are used. Duplicates are dropped,
/// first occurrence wins.
pub fn into_recipe(record: RecipeRecord, tags: &[RecipeTagRecord]) -> Result<Recipe, RecordError> {
    let servings = Servings::new(record.servings).map_err(|_| RecordError::InvalidServings {
        recipe_id: record.id.clone(),
    })?;

    let difficulty =
        Difficulty::from_label(&record.difficulty).ok_or_else(|| RecordError::UnknownDifficulty {
            recipe_id: record.id.clone(),
            label: record.difficulty.clone(),
        })?;

    let mut recipe_tags: Vec<String> = Vec::new();
    for tag in tags.iter().filter(|t| t.recipe_id == record.id) {
        if !recipe_tags.contains(&tag.tag) {
            recipe_tags.push(tag.tag.clone());
        }
    }

    Ok(Recipe {
        id: record.id,
        title: record.title,
        description: record.description,
        cooking_time_min: record.cooking_time,
        servings,
        difficulty,
        category: record.category,
        tags: recipe_tags,
        calories: record.calories,
        image: record.image,
    })
}

/// Convert ingredient rows, keeping their order
pub fn into_ingredients(
    records: Vec<RecipeIngredientRecord>,
) -> Result<Vec<Ingredient>, RecordError> {
    records
        .into_iter()
        .map(|record| {
            if !record.quantity.is_finite() || record.quantity <= 0.0 {
                return Err(RecordError::InvalidQuantity {
                    id: record.id,
                    quantity: record.quantity,
                });
            }
            Ok(Ingredient {
                id: record.id,
                name: record.ingredient.name,
                quantity: record.quantity,
                unit: record.unit,
                group: record.group_type,
                note: record.note,
                icon: record.icon,
            })
        })
        .collect()
}

/// Convert step rows into a sequence ordered by step number
///
/// Step numbers must run 1, 2, 3, ... without gaps or repeats once
/// sorted. A duration of zero becomes an untimed step.
pub fn into_steps(mut records: Vec<RecipeStepRecord>) -> Result<Vec<CookingStep>, RecordError> {
    records.sort_by_key(|r| r.step_number);

    let mut steps = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let expected = u16::try_from(index + 1).unwrap_or(u16::MAX);
        if record.step_number != expected {
            return Err(RecordError::StepOrder {
                expected,
                found: record.step_number,
            });
        }

        let mut step = CookingStep::new(record.id, record.step_number, record.instruction)
            .with_duration(record.duration.unwrap_or(0));
        step.tips = record.tips;
        steps.push(step);
    }

    Ok(steps)
}
