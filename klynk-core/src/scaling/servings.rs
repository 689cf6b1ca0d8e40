//! Serving counts

use core::fmt;

use super::quantity::ScaleError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default upper bound of the servings selector
pub const DEFAULT_MAX_SERVINGS: u16 = 99;

/// A serving count that is never zero
///
/// Scaling divides by the base serving count, so zero is rejected here
/// before any quantity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct Servings(u16);

impl Servings {
    /// One serving
    pub const ONE: Servings = Servings(1);

    /// Create a serving count, rejecting zero
    pub fn new(count: u16) -> Result<Self, ScaleError> {
        if count == 0 {
            Err(ScaleError::ZeroServings)
        } else {
            Ok(Self(count))
        }
    }

    /// Serving count as an integer
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Servings {
    type Error = ScaleError;

    fn try_from(count: u16) -> Result<Self, Self::Error> {
        Servings::new(count)
    }
}

impl From<Servings> for u16 {
    fn from(servings: Servings) -> Self {
        servings.0
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plus/minus serving picker
///
/// Starts at the recipe's base servings and never leaves `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServingsSelector {
    value: Servings,
    max: Servings,
}

impl ServingsSelector {
    /// Create a selector starting at `initial`
    ///
    /// `initial` is clamped to `max`.
    pub fn new(initial: Servings, max: Servings) -> Self {
        Self {
            value: initial.min(max),
            max,
        }
    }

    /// Current serving count
    pub fn value(&self) -> Servings {
        self.value
    }

    /// Whether the minus control is enabled
    pub fn can_decrease(&self) -> bool {
        self.value > Servings::ONE
    }

    /// Whether the plus control is enabled
    pub fn can_increase(&self) -> bool {
        self.value < self.max
    }

    /// Add one serving. Returns false at the upper bound.
    pub fn increase(&mut self) -> bool {
        if !self.can_increase() {
            return false;
        }
        self.value = Servings(self.value.0 + 1);
        true
    }

    /// Remove one serving. Returns false at one serving.
    pub fn decrease(&mut self) -> bool {
        if !self.can_decrease() {
            return false;
        }
        self.value = Servings(self.value.0 - 1);
        true
    }

    /// Jump to a serving count, clamped to `1..=max`
    pub fn set(&mut self, count: u16) -> Servings {
        self.value = Servings(count.clamp(1, self.max.0));
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servings(n: u16) -> Servings {
        Servings::new(n).unwrap()
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Servings::new(0), Err(ScaleError::ZeroServings));
        assert_eq!(Servings::try_from(3).map(Servings::get), Ok(3));
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut selector = ServingsSelector::new(servings(2), servings(DEFAULT_MAX_SERVINGS));
        assert!(selector.decrease());
        assert_eq!(selector.value(), Servings::ONE);
        assert!(!selector.can_decrease());
        assert!(!selector.decrease());
        assert_eq!(selector.value(), Servings::ONE);
    }

    #[test]
    fn test_increase_stops_at_max() {
        let mut selector = ServingsSelector::new(servings(5), servings(6));
        assert!(selector.increase());
        assert!(!selector.increase());
        assert_eq!(selector.value().get(), 6);
    }

    #[test]
    fn test_initial_clamped_to_max() {
        let selector = ServingsSelector::new(servings(12), servings(8));
        assert_eq!(selector.value().get(), 8);
    }

    #[test]
    fn test_set_clamps() {
        let mut selector = ServingsSelector::new(servings(4), servings(10));
        assert_eq!(selector.set(0).get(), 1);
        assert_eq!(selector.set(50).get(), 10);
        assert_eq!(selector.set(7).get(), 7);
    }
}
