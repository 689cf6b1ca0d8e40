//! Recipe definition

use alloc::string::String;
use alloc::vec::Vec;

use crate::scaling::Servings;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recipe difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    #[default]
    Easy,
    Semi,
    Hard,
}

impl Difficulty {
    /// Parse the label used by the data store
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Difficulty::Easy),
            "Semi" => Some(Difficulty::Semi),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Semi => "Semi",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A recipe in the catalog
///
/// Ingredient quantities of this recipe are authored against `servings`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recipe {
    /// Data store identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Cooking time in minutes
    pub cooking_time_min: u16,
    /// Base serving count
    pub servings: Servings,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Catalog category (e.g. "Snacks")
    pub category: String,
    /// Tags in data store order
    pub tags: Vec<String>,
    /// Calories per serving
    pub calories: u32,
    /// Image reference
    pub image: Option<String>,
}

impl Recipe {
    /// Check whether any tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Cooking time label, e.g. "1 min" or "16 mins"
    pub fn cooking_time_label(&self) -> String {
        let suffix = if self.cooking_time_min == 1 { "" } else { "s" };
        alloc::format!("{} min{}", self.cooking_time_min, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn make_recipe(minutes: u16) -> Recipe {
        Recipe {
            id: "1".into(),
            title: "Masala Peanuts".into(),
            description: "Crunchy spiced peanuts".into(),
            cooking_time_min: minutes,
            servings: Servings::new(4).unwrap(),
            difficulty: Difficulty::Easy,
            category: "Snacks".into(),
            tags: vec!["Vegan".into(), "Indian".into()],
            calories: 150,
            image: None,
        }
    }

    #[test]
    fn test_difficulty_labels() {
        for d in [Difficulty::Easy, Difficulty::Semi, Difficulty::Hard] {
            assert_eq!(Difficulty::from_label(d.label()), Some(d));
        }
        assert_eq!(Difficulty::from_label("Medium"), None);
    }

    #[test]
    fn test_cooking_time_label() {
        assert_eq!(make_recipe(1).cooking_time_label(), "1 min");
        assert_eq!(make_recipe(16).cooking_time_label(), "16 mins");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let recipe = make_recipe(1);
        assert!(recipe.has_tag("vegan"));
        assert!(!recipe.has_tag("Thai"));
    }
}
