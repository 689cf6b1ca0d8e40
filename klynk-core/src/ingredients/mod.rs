//! Ingredient list presentation logic
//!
//! Grouping into prep/collect sections and the shopping checklist.

pub mod checklist;
pub mod groups;

pub use checklist::IngredientChecklist;
pub use groups::{group_ingredients, IngredientGroups};
