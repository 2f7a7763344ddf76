//! Per-instance decimal precision context
//!
//! Every arithmetic step performed by an estimator goes through a
//! [`DecimalContext`] owned by that estimator. The context is a plain value:
//! nothing is stored in thread-local or process-wide state, so two
//! estimators configured with different precisions can be used from
//! different threads at the same time without affecting each other.
//!
//! Each operation computes its exact (or high precision) result and then
//! rounds it to the configured number of significant digits, so chained
//! computations accumulate rounding the same way a decimal calculator with a
//! fixed display width would.

use crate::error::{Error, Result};
use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Rounding applied after each decimal operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest, ties away from zero
    HalfUp,
    /// Nearest, ties towards zero
    HalfDown,
    /// Nearest, ties to the even neighbour
    #[default]
    HalfEven,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Up => RoundingMode::Up,
            Rounding::Down => RoundingMode::Down,
            Rounding::Ceiling => RoundingMode::Ceiling,
            Rounding::Floor => RoundingMode::Floor,
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::HalfDown => RoundingMode::HalfDown,
            Rounding::HalfEven => RoundingMode::HalfEven,
        }
    }
}

/// Significant-digit precision and rounding mode for decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalContext {
    precision: NonZeroU64,
    rounding: Rounding,
}

impl DecimalContext {
    /// Default number of significant digits
    pub const DEFAULT_PRECISION: u64 = 8;

    /// Extra digits carried by intermediate results before final rounding
    pub const GUARD_DIGITS: u64 = 10;

    /// Create a context with the given number of significant digits
    ///
    /// Fails with [`Error::InvalidParameter`] when `precision` is zero.
    pub fn new(precision: u64) -> Result<Self> {
        let precision = NonZeroU64::new(precision).ok_or_else(|| {
            Error::InvalidParameter("Decimal precision must be at least 1 digit".to_string())
        })?;
        Ok(Self {
            precision,
            rounding: Rounding::default(),
        })
    }

    /// Replace the rounding mode
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Number of significant digits
    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    /// Rounding mode
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Round a value to this context's precision
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.precision, self.rounding.into())
    }

    /// Rounded sum
    pub fn add(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs + rhs))
    }

    /// Rounded difference
    pub fn sub(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs - rhs))
    }

    /// Rounded product
    pub fn mul(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs * rhs))
    }

    /// Divide, failing on a zero divisor instead of panicking
    ///
    /// The reciprocal is taken at the instance precision plus
    /// [`GUARD_DIGITS`](Self::GUARD_DIGITS) so the final rounding sees
    /// computed digits at any precision.
    pub fn div(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> Result<BigDecimal> {
        if rhs.is_zero() {
            return Err(Error::division_by_zero("decimal division"));
        }
        let reciprocal = rhs.inverse_with_context(&self.working_context());
        Ok(self.round(&(lhs * reciprocal)))
    }

    /// Principal square root
    ///
    /// A negative radicand cannot come out of validated inputs, so it is
    /// reported as a computation error rather than an input error.
    pub fn sqrt(&self, value: &BigDecimal) -> Result<BigDecimal> {
        if *value < BigDecimal::zero() {
            return Err(Error::Computation(format!(
                "Square root of negative value {value}"
            )));
        }
        let context = Context::new(self.precision, self.rounding.into());
        value
            .sqrt_with_context(&context)
            .map(|root| self.round(&root))
            .ok_or_else(|| Error::Computation(format!("Square root of {value} failed")))
    }

    fn working_context(&self) -> Context {
        let precision = self.precision.saturating_add(Self::GUARD_DIGITS);
        Context::new(precision, self.rounding.into())
    }

    /// Convert a decimal result into a native float at the API boundary
    pub fn to_f64(&self, value: &BigDecimal) -> Result<f64> {
        value
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::Computation(format!("{value} is not representable as f64")))
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: NonZeroU64::new(Self::DEFAULT_PRECISION).unwrap_or(NonZeroU64::MIN),
            rounding: Rounding::default(),
        }
    }
}

impl fmt::Display for DecimalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits ({:?})", self.precision, self.rounding)
    }
}
