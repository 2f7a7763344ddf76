//! Applicability of the normal approximation to the binomial
//!
//! The approximation is used only when `N >= 30`, `N * p >= 5` and
//! `N * (1 - p) >= 5`. All three bounds are inclusive and the products are
//! evaluated under the estimator's decimal context.

use bigdecimal::BigDecimal;
use num_traits::One;
use sampling_core::{DecimalContext, Error, Result};

/// Smallest sample size for which the approximation is used
pub const MIN_SAMPLE_SIZE: u32 = 30;

/// Smallest expected count on either side of the proportion
pub const MIN_EXPECTED_COUNT: u32 = 5;

/// Which proportion the check is run against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProportionKind {
    /// A hypothesised population proportion (`P`)
    Expected,
    /// The frequency observed in the sample (`F`)
    Observed,
}

impl ProportionKind {
    fn symbol(self) -> char {
        match self {
            ProportionKind::Expected => 'P',
            ProportionKind::Observed => 'F',
        }
    }

    /// The three conditions, spelled out for error messages
    pub fn requirement(self) -> String {
        let s = self.symbol();
        format!(
            "N >= {MIN_SAMPLE_SIZE}, (N * {s}) >= {MIN_EXPECTED_COUNT}, N * (1 - {s}) >= {MIN_EXPECTED_COUNT}"
        )
    }
}

/// Whether the normal approximation holds for `n` trials at proportion `p`
pub fn is_normal_approximation_valid(ctx: &DecimalContext, n: &BigDecimal, p: &BigDecimal) -> bool {
    let min_size = BigDecimal::from(MIN_SAMPLE_SIZE);
    let min_count = BigDecimal::from(MIN_EXPECTED_COUNT);
    let complement = ctx.sub(&BigDecimal::one(), p);

    *n >= min_size && ctx.mul(n, p) >= min_count && ctx.mul(n, &complement) >= min_count
}

/// Fail with [`Error::Precondition`] unless the approximation holds
pub fn require_normal_approximation(
    ctx: &DecimalContext,
    n: &BigDecimal,
    p: &BigDecimal,
    kind: ProportionKind,
) -> Result<()> {
    if is_normal_approximation_valid(ctx, n, p) {
        Ok(())
    } else {
        Err(Error::precondition(&kind.requirement()))
    }
}
