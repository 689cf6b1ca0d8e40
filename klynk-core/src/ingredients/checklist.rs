//! Ingredient checklist

use alloc::collections::BTreeSet;

/// Tracks which ingredients the user has ticked off
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientChecklist {
    checked: BTreeSet<u32>,
}

impl IngredientChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an ingredient's checked flag. Returns the new flag.
    pub fn toggle(&mut self, ingredient_id: u32) -> bool {
        if self.checked.remove(&ingredient_id) {
            false
        } else {
            self.checked.insert(ingredient_id);
            true
        }
    }

    pub fn is_checked(&self, ingredient_id: u32) -> bool {
        self.checked.contains(&ingredient_id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.checked.clear();
    }
}
