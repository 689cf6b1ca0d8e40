//! Quantity scaling and display formatting

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use super::fraction::{match_fraction, DEFAULT_FRACTION_TOLERANCE};
use super::servings::Servings;
use crate::model::{Ingredient, IngredientGroup};

/// Values this close to a whole number render as integers
const INTEGER_EPSILON: f64 = 1e-9;

/// Scaling input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleError {
    /// A serving count of zero
    ZeroServings,
    /// Quantity is zero, negative, or not finite
    InvalidQuantity,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::ZeroServings => write!(f, "serving count must be at least 1"),
            ScaleError::InvalidQuantity => write!(f, "quantity must be a positive number"),
        }
    }
}

/// Quantity scaler
///
/// Computes `base_quantity * target / base` and formats the result:
/// whole numbers without a decimal point, values below one as a common
/// fraction when one is close enough, everything else with one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuantityScaler {
    fraction_tolerance: f64,
}

impl Default for QuantityScaler {
    fn default() -> Self {
        Self::new(DEFAULT_FRACTION_TOLERANCE)
    }
}

impl QuantityScaler {
    /// Create a scaler with the given fraction matching tolerance
    pub fn new(fraction_tolerance: f64) -> Self {
        Self { fraction_tolerance }
    }

    /// Scale a base quantity to the target serving count
    pub fn scale(&self, base_quantity: f64, base: Servings, target: Servings) -> String {
        self.format(scaled_value(base_quantity, base, target))
    }

    /// Format an already scaled quantity
    pub fn format(&self, value: f64) -> String {
        let fract = value % 1.0;
        if fract < INTEGER_EPSILON || 1.0 - fract < INTEGER_EPSILON {
            return format!("{:.0}", value);
        }

        if value < 1.0 {
            if let Some(fraction) = match_fraction(value, self.fraction_tolerance) {
                return fraction.to_string();
            }
        }

        format!("{:.1}", value)
    }
}

/// Scale with the default fraction tolerance
pub fn scale(base_quantity: f64, base: Servings, target: Servings) -> String {
    QuantityScaler::default().scale(base_quantity, base, target)
}

/// Validate raw inputs, then scale
///
/// # Errors
///
/// `ZeroServings` if either serving count is zero, `InvalidQuantity` if
/// the quantity is not a positive finite number. Nothing is computed in
/// either case.
pub fn scale_quantity(
    base_quantity: f64,
    base_servings: u16,
    target_servings: u16,
) -> Result<String, ScaleError> {
    let base = Servings::new(base_servings)?;
    let target = Servings::new(target_servings)?;
    if !base_quantity.is_finite() || base_quantity <= 0.0 {
        return Err(ScaleError::InvalidQuantity);
    }
    Ok(scale(base_quantity, base, target))
}

fn scaled_value(base_quantity: f64, base: Servings, target: Servings) -> f64 {
    if base == target {
        return base_quantity;
    }
    base_quantity * f64::from(target.get()) / f64::from(base.get())
}

/// An ingredient with its quantity rendered for a serving count
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaledIngredient {
    pub id: u32,
    pub name: String,
    /// Display quantity ("1/2", "4", "1.5")
    pub quantity: String,
    pub unit: String,
    pub group: IngredientGroup,
    pub note: Option<String>,
    pub icon: Option<String>,
}

impl ScaledIngredient {
    /// Quantity and unit, e.g. "1/2 tsp"
    pub fn amount(&self) -> String {
        if self.unit.is_empty() {
            self.quantity.clone()
        } else {
            format!("{} {}", self.quantity, self.unit)
        }
    }
}

/// Render every ingredient of a recipe for `target` servings
///
/// Order is preserved.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    base: Servings,
    target: Servings,
    scaler: &QuantityScaler,
) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            id: ingredient.id,
            name: ingredient.name.clone(),
            quantity: scaler.scale(ingredient.quantity, base, target),
            unit: ingredient.unit.clone(),
            group: ingredient.group,
            note: ingredient.note.clone(),
            icon: ingredient.icon.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn servings(n: u16) -> Servings {
        Servings::new(n).unwrap()
    }

    #[test]
    fn test_half_quantity_as_fraction() {
        assert_eq!(scale(1.0, servings(4), servings(2)), "1/2");
    }

    #[test]
    fn test_integer_result() {
        assert_eq!(scale(2.0, servings(4), servings(8)), "4");
    }

    #[test]
    fn test_huge_whole_numbers_stay_integers() {
        let scaler = QuantityScaler::default();
        assert_eq!(scaler.format(2e19), "20000000000000000000");
        assert_eq!(scaler.format(1.8446744073709552e19 * 4.0), "73786976294838206464");
        assert_eq!(scaler.format(3.0 - 1e-12), "3");
    }

    #[test]
    fn test_decimal_result() {
        // 1 * 6 / 4 = 1.5
        assert_eq!(scale(1.0, servings(4), servings(6)), "1.5");
        // 2 * 5 / 3 = 3.333...
        assert_eq!(scale(2.0, servings(3), servings(5)), "3.3");
    }

    #[test]
    fn test_thirds_and_quarters() {
        assert_eq!(scale(1.0, servings(3), servings(1)), "1/3");
        assert_eq!(scale(1.0, servings(3), servings(2)), "2/3");
        assert_eq!(scale(0.5, servings(2), servings(1)), "1/4");
        assert_eq!(scale(1.0, servings(4), servings(3)), "3/4");
    }

    #[test]
    fn test_small_value_without_fraction() {
        // 0.5 * 1 / 4 = 0.125, not near any candidate
        assert_eq!(scale(0.5, servings(4), servings(1)), "0.1");
    }

    #[test]
    fn test_float_noise_still_integer() {
        // 0.1 * 30 / 3 is not exactly 1.0 in binary floating point
        assert_eq!(scale(0.1, servings(3), servings(30)), "1");
    }

    #[test]
    fn test_same_servings_reproduces_base() {
        let scaler = QuantityScaler::default();
        for q in [0.5, 1.0, 1.25, 2.0, 0.1] {
            assert_eq!(scale(q, servings(3), servings(3)), scaler.format(q));
        }
    }

    #[test]
    fn test_zero_servings_rejected() {
        assert_eq!(scale_quantity(1.0, 0, 2), Err(ScaleError::ZeroServings));
        assert_eq!(scale_quantity(1.0, 4, 0), Err(ScaleError::ZeroServings));
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        assert_eq!(scale_quantity(0.0, 4, 2), Err(ScaleError::InvalidQuantity));
        assert_eq!(scale_quantity(-1.0, 4, 2), Err(ScaleError::InvalidQuantity));
        assert_eq!(scale_quantity(f64::NAN, 4, 2), Err(ScaleError::InvalidQuantity));
        assert_eq!(scale_quantity(1.0, 4, 2).as_deref(), Ok("1/2"));
    }

    #[test]
    fn test_custom_tolerance() {
        let strict = QuantityScaler::new(0.001);
        assert_eq!(strict.format(0.33), "0.3");
        let loose = QuantityScaler::new(0.05);
        assert_eq!(loose.format(0.3), "1/3");
    }

    #[test]
    fn test_scale_ingredients_keeps_order() {
        let ingredients = vec![
            Ingredient {
                id: 5,
                name: "Rice".into(),
                quantity: 2.0,
                unit: "cup".into(),
                group: IngredientGroup::Prep,
                note: Some("Cooked".into()),
                icon: None,
            },
            Ingredient {
                id: 9,
                name: "Turmeric Powder".into(),
                quantity: 0.5,
                unit: "tsp".into(),
                group: IngredientGroup::Collect,
                note: None,
                icon: None,
            },
        ];

        let scaled = scale_ingredients(
            &ingredients,
            servings(4),
            servings(2),
            &QuantityScaler::default(),
        );

        assert_eq!(scaled.len(), 2);
        assert_eq!(scaled[0].name, "Rice");
        assert_eq!(scaled[0].amount(), "1 cup");
        assert_eq!(scaled[1].amount(), "1/4 tsp");
        assert_eq!(scaled[0].note.as_deref(), Some("Cooked"));
    }
}
