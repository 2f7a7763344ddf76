//! Fluctuation and confidence intervals for proportions
//!
//! [`IntervalEstimator`] owns a [`DecimalContext`] and a [`ConfidenceTable`].
//! Every operation threads that context through each arithmetic step, so
//! results depend only on the inputs and on the instance's own configuration.

use crate::levels::{ConfidenceTable, DEFAULT_CONFIDENCE_LEVEL};
use crate::types::{DecimalInterval, Interval};
use crate::validity::{require_normal_approximation, ProportionKind};
use bigdecimal::BigDecimal;
use num_traits::One;
use sampling_core::{DecimalContext, Error, Result, Rounding, ToDecimal};
use tracing::{debug, instrument, trace};

/// Interval estimator for proportions under the normal approximation
///
/// # Example
///
/// ```rust
/// use sampling_confidence::IntervalEstimator;
///
/// let estimator = IntervalEstimator::default();
///
/// let fluctuation = estimator.fluctuation_interval(10_000, 0.001).unwrap();
/// assert!(fluctuation.contains(0.001));
///
/// assert!(estimator.validate_sample(15, 10_000, 0.001).unwrap());
///
/// let estimate = estimator.estimate_interval(22, 100, false).unwrap();
/// assert!((estimate.lower - 0.12).abs() < 1e-12);
/// assert!((estimate.upper - 0.32).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalEstimator {
    context: DecimalContext,
    levels: ConfidenceTable,
}

impl IntervalEstimator {
    /// Create an estimator computing with `precision` significant digits
    pub fn new(precision: u64) -> Result<Self> {
        Ok(Self::from_parts(
            DecimalContext::new(precision)?,
            ConfidenceTable::standard(),
        ))
    }

    /// Create an estimator from an explicit context and level table
    pub fn from_parts(context: DecimalContext, levels: ConfidenceTable) -> Self {
        Self { context, levels }
    }

    /// Replace the rounding mode of the decimal context
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.context = self.context.with_rounding(rounding);
        self
    }

    /// Add or override a confidence level
    pub fn with_confidence_level(
        mut self,
        key: impl Into<String>,
        multiplier: impl ToDecimal,
    ) -> Result<Self> {
        self.levels.insert(key, multiplier)?;
        Ok(self)
    }

    /// Significant digits used by every computation of this instance
    pub fn precision(&self) -> u64 {
        self.context.precision()
    }

    pub fn context(&self) -> &DecimalContext {
        &self.context
    }

    pub fn confidence_levels(&self) -> &ConfidenceTable {
        &self.levels
    }

    /// Standard error of a proportion: `sqrt(p * (1 - p)) / sqrt(n)`
    pub fn standard_error(&self, n: &BigDecimal, p: &BigDecimal) -> Result<BigDecimal> {
        let ctx = &self.context;
        let complement = ctx.sub(&BigDecimal::one(), p);
        let variance = ctx.mul(p, &complement);
        ctx.div(&ctx.sqrt(&variance)?, &ctx.sqrt(n)?)
    }

    /// Margin of error: `z * standard_error(n, p)`
    pub fn margin_of_error(
        &self,
        multiplier: &BigDecimal,
        n: &BigDecimal,
        p: &BigDecimal,
    ) -> Result<BigDecimal> {
        Ok(self.context.mul(multiplier, &self.standard_error(n, p)?))
    }

    /// Fluctuation interval at the default 95% level
    pub fn fluctuation_interval(
        &self,
        population_size: impl ToDecimal,
        proportion: impl ToDecimal,
    ) -> Result<Interval> {
        self.fluctuation_interval_at(population_size, proportion, DEFAULT_CONFIDENCE_LEVEL)
    }

    /// Expected range of observed proportions in a sample of
    /// `population_size` drawn with true proportion `proportion`
    ///
    /// Fails with [`Error::UnknownConfidenceLevel`] for an unknown `level`
    /// and with [`Error::Precondition`] when the normal approximation does
    /// not apply.
    #[instrument(level = "debug", skip(self, population_size, proportion), fields(precision = self.context.precision()))]
    pub fn fluctuation_interval_at(
        &self,
        population_size: impl ToDecimal,
        proportion: impl ToDecimal,
        level: &str,
    ) -> Result<Interval> {
        let n = population_size.to_decimal()?;
        let p = proportion.to_decimal()?;
        let bounds = self.fluctuation_bounds(&n, &p, level)?;
        debug!(%n, %p, %bounds, "Fluctuation interval computed");
        bounds.to_interval(&self.context)
    }

    /// Sample check at the default 95% level
    pub fn validate_sample(
        &self,
        feature_count: impl ToDecimal,
        total_count: impl ToDecimal,
        expected_proportion: impl ToDecimal,
    ) -> Result<bool> {
        self.validate_sample_at(
            feature_count,
            total_count,
            expected_proportion,
            DEFAULT_CONFIDENCE_LEVEL,
        )
    }

    /// Whether the observed frequency `feature_count / total_count` lies in
    /// the fluctuation interval of `expected_proportion` (bounds inclusive)
    #[instrument(level = "debug", skip(self, feature_count, total_count, expected_proportion), fields(precision = self.context.precision()))]
    pub fn validate_sample_at(
        &self,
        feature_count: impl ToDecimal,
        total_count: impl ToDecimal,
        expected_proportion: impl ToDecimal,
        level: &str,
    ) -> Result<bool> {
        let features = feature_count.to_decimal()?;
        let total = total_count.to_decimal()?;
        let p = expected_proportion.to_decimal()?;

        let bounds = self.fluctuation_bounds(&total, &p, level)?;
        let frequency = self.observed_frequency(&features, &total)?;
        let accepted = bounds.contains(&frequency);
        debug!(%frequency, %bounds, accepted, "Sample checked against fluctuation interval");
        Ok(accepted)
    }

    /// Confidence interval at the default 95% level
    pub fn estimate_interval(
        &self,
        feature_count: impl ToDecimal,
        total_count: impl ToDecimal,
        strict: bool,
    ) -> Result<Interval> {
        self.estimate_interval_at(feature_count, total_count, strict, DEFAULT_CONFIDENCE_LEVEL)
    }

    /// Range for the population proportion given `feature_count` hits out
    /// of `total_count` observations
    ///
    /// With `strict = false` the margin is `1 / sqrt(N)` and the level's
    /// multiplier is not used, though `level` must still name a known entry.
    /// With `strict = true` the margin is `z * sqrt(F * (1 - F)) / sqrt(N)`.
    #[instrument(level = "debug", skip(self, feature_count, total_count), fields(precision = self.context.precision()))]
    pub fn estimate_interval_at(
        &self,
        feature_count: impl ToDecimal,
        total_count: impl ToDecimal,
        strict: bool,
        level: &str,
    ) -> Result<Interval> {
        let multiplier = self.levels.multiplier(level)?;
        let features = feature_count.to_decimal()?;
        let n = total_count.to_decimal()?;
        let ctx = &self.context;

        let frequency = self.observed_frequency(&features, &n)?;
        require_normal_approximation(ctx, &n, &frequency, ProportionKind::Observed)?;

        let margin = if strict {
            self.margin_of_error(multiplier, &n, &frequency)?
        } else {
            ctx.div(&BigDecimal::one(), &ctx.sqrt(&n)?)?
        };
        trace!(%frequency, %margin, "Estimation margin");

        let bounds = DecimalInterval::around(ctx, &frequency, &margin);
        debug!(%n, %frequency, %bounds, "Confidence interval computed");
        bounds.to_interval(ctx)
    }

    fn fluctuation_bounds(
        &self,
        n: &BigDecimal,
        p: &BigDecimal,
        level: &str,
    ) -> Result<DecimalInterval> {
        let multiplier = self.levels.multiplier(level)?;
        require_normal_approximation(&self.context, n, p, ProportionKind::Expected)?;

        let margin = self.margin_of_error(multiplier, n, p)?;
        trace!(%margin, "Fluctuation margin");
        Ok(DecimalInterval::around(&self.context, p, &margin))
    }

    fn observed_frequency(&self, features: &BigDecimal, total: &BigDecimal) -> Result<BigDecimal> {
        self.context
            .div(features, total)
            .map_err(|_| Error::division_by_zero("observed frequency (total count is zero)"))
    }
}

impl Default for IntervalEstimator {
    /// Eight significant digits with the standard 95%/99% levels
    fn default() -> Self {
        Self::from_parts(DecimalContext::default(), ConfidenceTable::standard())
    }
}
