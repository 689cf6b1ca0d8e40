//! Configuration type definitions

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::scaling::{QuantityScaler, Servings, DEFAULT_FRACTION_TOLERANCE, DEFAULT_MAX_SERVINGS};
use crate::sequencer::DEFAULT_AUTO_ADVANCE_DELAY_S;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Servings upper bound is zero
    ZeroMaxServings,
    /// Fraction tolerance is negative, not finite, or 0.5 or more
    InvalidTolerance,
    /// Auto-advance delay is zero
    ZeroAutoAdvanceDelay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMaxServings => write!(f, "servings.max must be at least 1"),
            ConfigError::InvalidTolerance => {
                write!(f, "scaling.fraction_tolerance must be in [0, 0.5)")
            }
            ConfigError::ZeroAutoAdvanceDelay => {
                write!(f, "cooking.auto_advance_delay_s must be at least 1")
            }
        }
    }
}

/// Guided cooking behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CookingConfig {
    /// Seconds between a finished countdown and the next step
    pub auto_advance_delay_s: u32,
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self {
            auto_advance_delay_s: DEFAULT_AUTO_ADVANCE_DELAY_S,
        }
    }
}

/// Quantity display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScalingConfig {
    /// Max absolute distance from a common fraction to render it as one
    pub fraction_tolerance: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            fraction_tolerance: DEFAULT_FRACTION_TOLERANCE,
        }
    }
}

impl ScalingConfig {
    /// Build the scaler these settings describe
    pub fn scaler(&self) -> QuantityScaler {
        QuantityScaler::new(self.fraction_tolerance)
    }
}

/// Servings selector bounds
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServingsConfig {
    /// Largest selectable serving count
    pub max: u16,
}

impl Default for ServingsConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_SERVINGS,
        }
    }
}

impl ServingsConfig {
    /// Upper bound as a serving count (zero falls back to one)
    pub fn max_servings(&self) -> Servings {
        Servings::new(self.max).unwrap_or(Servings::ONE)
    }
}

/// A category pill in the catalog filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryConfig {
    /// Filter id ("All" or a recipe category)
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon glyph
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
}

impl CategoryConfig {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Built-in category pills
pub fn default_categories() -> Vec<CategoryConfig> {
    alloc::vec![
        CategoryConfig::new("All", "All", "🍽️"),
        CategoryConfig::new("Healthy", "Healthy", "🥗"),
        CategoryConfig::new("Drinks", "Drinks", "🧋"),
        CategoryConfig::new("North Indian", "North Indian", "🍛"),
        CategoryConfig::new("South Indian", "South Indian", "🥘"),
        CategoryConfig::new("Snacks", "Snacks", "🍿"),
    ]
}

/// Complete client settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClientConfig {
    pub cooking: CookingConfig,
    pub scaling: ScalingConfig,
    pub servings: ServingsConfig,
    pub categories: Vec<CategoryConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cooking: CookingConfig::default(),
            scaling: ScalingConfig::default(),
            servings: ServingsConfig::default(),
            categories: default_categories(),
        }
    }
}

impl ClientConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servings.max == 0 {
            return Err(ConfigError::ZeroMaxServings);
        }

        let tolerance = self.scaling.fraction_tolerance;
        if !tolerance.is_finite() || !(0.0..0.5).contains(&tolerance) {
            return Err(ConfigError::InvalidTolerance);
        }

        if self.cooking.auto_advance_delay_s == 0 {
            return Err(ConfigError::ZeroAutoAdvanceDelay);
        }

        Ok(())
    }

    /// Look up a category pill by id
    pub fn category(&self, id: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.id == id)
    }
}
