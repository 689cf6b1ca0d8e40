//! Culinary fraction matching

use core::fmt;

/// Default absolute tolerance when matching a value to a fraction
pub const DEFAULT_FRACTION_TOLERANCE: f64 = 0.02;

/// A simple fraction such as 1/2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fraction {
    pub numerator: u8,
    pub denominator: u8,
}

impl Fraction {
    pub const fn new(numerator: u8, denominator: u8) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Decimal value of this fraction
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Candidate fractions, simplest first (denominator, then numerator)
pub const COMMON_FRACTIONS: [Fraction; 5] = [
    Fraction::new(1, 2),
    Fraction::new(1, 3),
    Fraction::new(2, 3),
    Fraction::new(1, 4),
    Fraction::new(3, 4),
];

/// Find the common fraction nearest to `value`
///
/// Only candidates within `tolerance` (absolute difference) qualify.
/// Equal distances resolve to the earlier, simpler candidate.
pub fn match_fraction(value: f64, tolerance: f64) -> Option<Fraction> {
    let mut best: Option<(Fraction, f64)> = None;

    for candidate in COMMON_FRACTIONS {
        let diff = abs_diff(value, candidate.value());
        if diff > tolerance {
            continue;
        }
        match best {
            Some((_, best_diff)) if best_diff <= diff => {}
            _ => best = Some((candidate, diff)),
        }
    }

    best.map(|(fraction, _)| fraction)
}

fn abs_diff(a: f64, b: f64) -> f64 {
    if a > b {
        a - b
    } else {
        b - a
    }
}
