//! Prep / collect grouping

use alloc::vec::Vec;

use crate::model::IngredientGroup;
use crate::scaling::ScaledIngredient;

/// Ingredients split by group, each in original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientGroups {
    /// Needs preparation
    pub prep: Vec<ScaledIngredient>,
    /// Used as-is
    pub collect: Vec<ScaledIngredient>,
}

impl IngredientGroups {
    /// Non-empty sections in display order (prep first)
    pub fn sections(&self) -> impl Iterator<Item = (IngredientGroup, &[ScaledIngredient])> {
        [
            (IngredientGroup::Prep, self.prep.as_slice()),
            (IngredientGroup::Collect, self.collect.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
    }

    /// Total number of ingredients
    pub fn len(&self) -> usize {
        self.prep.len() + self.collect.len()
    }

    /// Check if there are no ingredients at all
    pub fn is_empty(&self) -> bool {
        self.prep.is_empty() && self.collect.is_empty()
    }
}

/// Split scaled ingredients into prep and collect groups
pub fn group_ingredients(ingredients: Vec<ScaledIngredient>) -> IngredientGroups {
    let (prep, collect) = ingredients
        .into_iter()
        .partition(|ingredient| ingredient.group == IngredientGroup::Prep);
    IngredientGroups { prep, collect }
}
