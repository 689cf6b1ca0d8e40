//! Data store records for Klynk
//!
//! This crate describes the rows the hosted recipe database returns and
//! turns them into the core model. Network access stays behind the
//! [`RecipeSource`] trait; the core never sees a record.
//!
//! # Tables
//!
//! ```text
//! recipes             id, title, description, cooking_time, servings,
//!                     difficulty, category, calories, image
//! recipe_tags         recipe_id, tag
//! recipe_ingredients  id, recipe_id, quantity, unit, group_type, note,
//!                     icon, ingredient { name }
//! recipe_steps        id, recipe_id, step_number, instruction, duration
//! ```

#![deny(unsafe_code)]

pub mod convert;
pub mod records;
pub mod source;

pub use convert::{into_ingredients, into_recipe, into_steps, RecordError};
pub use records::{
    JoinedIngredient, RecipeIngredientRecord, RecipeRecord, RecipeStepRecord, RecipeTagRecord,
};
pub use source::{load_catalog, load_recipe, RecipeBundle, RecipeSource, SourceError, TableDump};
