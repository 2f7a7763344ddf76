//! Batch estimation over many samples
//!
//! With the `parallel` feature the samples are spread over the rayon pool.
//! The estimator carries its own decimal context, so parallel and
//! sequential runs produce identical results.

use crate::estimator::IntervalEstimator;
use crate::types::Interval;
use sampling_core::{Result, ToDecimal};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl IntervalEstimator {
    /// Confidence interval for each `(feature_count, total_count)` pair
    ///
    /// One result per sample, in input order; a failing sample does not
    /// stop the others.
    pub fn estimate_intervals<F, T>(
        &self,
        samples: &[(F, T)],
        strict: bool,
        level: &str,
    ) -> Vec<Result<Interval>>
    where
        F: ToDecimal + Sync,
        T: ToDecimal + Sync,
    {
        debug!("Estimating {} intervals (strict = {}, level = {})", samples.len(), strict, level);

        #[cfg(feature = "parallel")]
        let results: Vec<Result<Interval>> = samples
            .par_iter()
            .map(|(features, total)| self.estimate_interval_at(features, total, strict, level))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<Interval>> = samples
            .iter()
            .map(|(features, total)| self.estimate_interval_at(features, total, strict, level))
            .collect();

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_batch_matches_single_calls() {
        let estimator = IntervalEstimator::default();
        let samples: Vec<(u64, u64)> = vec![(22, 100), (50, 100), (300, 1000), (15, 40)];

        let batch = estimator.estimate_intervals(&samples, true, "95");
        assert_eq!(batch.len(), samples.len());

        for ((features, total), result) in samples.iter().zip(&batch) {
            let single = estimator.estimate_interval(*features, *total, true).unwrap();
            let interval = result.as_ref().unwrap();
            assert_eq!(*interval, single);
        }
        assert_abs_diff_eq!(batch[0].as_ref().unwrap().lower, 0.13880772, epsilon = 1e-15);
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let estimator = IntervalEstimator::default();
        let samples: Vec<(u64, u64)> = vec![(22, 100), (1, 10), (0, 0), (50, 100)];

        let batch = estimator.estimate_intervals(&samples, false, "95");
        assert!(batch[0].is_ok());
        assert!(batch[1].as_ref().unwrap_err().is_precondition());
        assert!(batch[2].is_err());
        assert!(batch[3].is_ok());
    }

    #[test]
    fn test_batch_unknown_level() {
        let estimator = IntervalEstimator::default();
        let batch = estimator.estimate_intervals(&[(22u64, 100u64)], false, "90");
        assert!(batch[0].as_ref().unwrap_err().is_lookup());
    }
}
