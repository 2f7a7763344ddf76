//! # sampling-stats
//!
//! Fluctuation and confidence intervals for proportions, computed with the
//! normal approximation to the binomial distribution in decimal arithmetic.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`sampling_core`]: error type, decimal precision context, numeric conversion
//! - [`sampling_confidence`]: the interval estimator, confidence table, configuration
//!
//! # Quick Start
//!
//! ```rust
//! use sampling_stats::prelude::*;
//!
//! let estimator = IntervalEstimator::default();
//!
//! // Is 15 hits out of 10 000 consistent with a 0.1% rate?
//! assert!(estimator.validate_sample(15, 10_000, 0.001).unwrap());
//!
//! // Where does the true rate lie given 22 hits out of 100?
//! let interval = estimator.estimate_interval(22, 100, true).unwrap();
//! assert!(interval.lower > 0.13 && interval.upper < 0.31);
//! ```

pub use sampling_confidence;
pub use sampling_core;

/// Commonly used items
pub mod prelude {
    pub use sampling_confidence::{
        ConfidenceTable, EstimatorConfig, Interval, IntervalEstimator,
        DEFAULT_CONFIDENCE_LEVEL,
    };
    pub use sampling_core::{DecimalContext, Error, Result, Rounding, ToDecimal};
}
