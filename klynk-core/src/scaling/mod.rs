//! Serving-based quantity scaling
//!
//! Converts an ingredient's base quantity into the quantity shown for
//! the serving count the user picked.

pub mod fraction;
pub mod quantity;
pub mod servings;

pub use fraction::{match_fraction, Fraction, COMMON_FRACTIONS, DEFAULT_FRACTION_TOLERANCE};
pub use quantity::{scale, scale_ingredients, scale_quantity, QuantityScaler, ScaleError, ScaledIngredient};
pub use servings::{Servings, ServingsSelector, DEFAULT_MAX_SERVINGS};
