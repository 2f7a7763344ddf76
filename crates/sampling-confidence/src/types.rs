//! Common types for proportion intervals

use bigdecimal::BigDecimal;
use sampling_core::{DecimalContext, Result};
use std::fmt;

/// An interval of proportions with lower and upper bounds
///
/// Bounds come straight from the normal approximation and are not clamped
/// to `[0, 1]`; extreme inputs can push a bound slightly outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Centre of the interval
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval (bounds inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Bounds as a `(lower, upper)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        interval.as_tuple()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Interval bounds before conversion to native floats
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalInterval {
    pub lower: BigDecimal,
    pub upper: BigDecimal,
}

impl DecimalInterval {
    /// Symmetric interval `centre ∓ margin`, rounded under `ctx`
    pub fn around(ctx: &DecimalContext, centre: &BigDecimal, margin: &BigDecimal) -> Self {
        Self {
            lower: ctx.sub(centre, margin),
            upper: ctx.add(centre, margin),
        }
    }

    /// Inclusive containment, compared in decimal
    pub fn contains(&self, value: &BigDecimal) -> bool {
        &self.lower <= value && value <= &self.upper
    }

    /// Convert both bounds to `f64`
    pub fn to_interval(&self, ctx: &DecimalContext) -> Result<Interval> {
        Ok(Interval::new(ctx.to_f64(&self.lower)?, ctx.to_f64(&self.upper)?))
    }
}

impl fmt::Display for DecimalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
