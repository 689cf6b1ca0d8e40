//! Recipe catalog search and filtering

pub mod filter;

pub use filter::{filter_recipes, CategoryFilter, RecipeFilter, ALL_CATEGORIES_ID};
