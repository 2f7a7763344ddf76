//! Fluctuation and confidence intervals for proportions
//!
//! This crate computes intervals for proportions under the normal
//! approximation to the binomial distribution:
//!
//! - **Fluctuation intervals**: expected range of sample proportions for a
//!   hypothesised population proportion
//! - **Sample validation**: whether an observed frequency falls inside that range
//! - **Estimation intervals**: range for the population proportion given an
//!   observed sample, with a simplified (`1 / sqrt(N)`) or strict formula
//!
//! All intermediate arithmetic is decimal, rounded to a number of
//! significant digits chosen per estimator.
//!
//! # Examples
//!
//! ```rust
//! use sampling_confidence::IntervalEstimator;
//!
//! let estimator = IntervalEstimator::new(8).unwrap();
//!
//! let interval = estimator.estimate_interval(22, 100, true).unwrap();
//! println!("95% CI: {}", interval);
//! assert!(interval.contains(0.22));
//!
//! // 99% level
//! let wide = estimator.estimate_interval_at(22, 100, true, "99").unwrap();
//! assert!(wide.width() > interval.width());
//! ```

mod batch;
mod config;
mod estimator;
mod levels;
mod types;
pub mod validity;

// Re-exports
pub use config::EstimatorConfig;
pub use estimator::IntervalEstimator;
pub use levels::{ConfidenceTable, DEFAULT_CONFIDENCE_LEVEL};
pub use types::{DecimalInterval, Interval};
pub use validity::{is_normal_approximation_valid, ProportionKind, MIN_EXPECTED_COUNT, MIN_SAMPLE_SIZE};

pub use sampling_core::{DecimalContext, Error, Result, Rounding, ToDecimal};
