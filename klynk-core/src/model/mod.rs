//! Recipe domain model
//!
//! Records fetched from the data store are converted into these types
//! before any logic runs. All of them are immutable once built.

pub mod ingredient;
pub mod recipe;
pub mod step;

pub use ingredient::{Ingredient, IngredientGroup};
pub use recipe::{Difficulty, Recipe};
pub use step::CookingStep;
