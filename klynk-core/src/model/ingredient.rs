//! Recipe-scoped ingredients

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ingredient classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum IngredientGroup {
    /// Needs preparation first (chopping, slitting, cooking)
    Prep,
    /// Used as-is
    #[default]
    Collect,
}

impl IngredientGroup {
    /// Section heading for this group
    pub fn heading(&self) -> &'static str {
        match self {
            IngredientGroup::Prep => "PREP THESE",
            IngredientGroup::Collect => "COLLECT THESE",
        }
    }
}

/// An ingredient of one recipe
///
/// `quantity` is relative to the owning recipe's base servings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ingredient {
    /// Data store identifier
    pub id: u32,
    /// Ingredient name
    pub name: String,
    /// Base quantity (finite, > 0)
    pub quantity: f64,
    /// Unit label ("tsp", "cup", "sprig", ...)
    pub unit: String,
    /// Prep or collect
    pub group: IngredientGroup,
    /// Preparation note ("Finely chopped")
    pub note: Option<String>,
    /// Icon glyph
    pub icon: Option<String>,
}
