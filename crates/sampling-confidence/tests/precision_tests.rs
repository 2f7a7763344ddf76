//! Precision handling across estimator instances

use approx::assert_relative_eq;
use sampling_confidence::{EstimatorConfig, Interval, IntervalEstimator};
use std::thread;

fn reference_intervals(estimator: &IntervalEstimator) -> Vec<Interval> {
    vec![
        estimator.fluctuation_interval(10_000, 0.001).unwrap(),
        estimator.estimate_interval(22, 100, false).unwrap(),
        estimator.estimate_interval(22, 100, true).unwrap(),
        estimator.estimate_interval_at(300, 1000, true, "99").unwrap(),
    ]
}

#[test]
fn test_higher_precision_agrees_within_lower_tolerance() {
    let coarse = IntervalEstimator::new(8).unwrap();
    let fine = IntervalEstimator::new(15).unwrap();

    for (a, b) in reference_intervals(&coarse)
        .into_iter()
        .zip(reference_intervals(&fine))
    {
        assert_relative_eq!(a.lower, b.lower, max_relative = 1e-7);
        assert_relative_eq!(a.upper, b.upper, max_relative = 1e-7);
    }

    assert_eq!(
        coarse.validate_sample(15, 10_000, 0.001).unwrap(),
        fine.validate_sample(15, 10_000, 0.001).unwrap()
    );
}

#[test]
fn test_higher_precision_adds_digits() {
    let coarse = IntervalEstimator::new(8).unwrap();
    let fine = IntervalEstimator::new(15).unwrap();

    let a = coarse.estimate_interval(22, 100, true).unwrap();
    let b = fine.estimate_interval(22, 100, true).unwrap();

    assert_ne!(a.lower, b.lower);
    assert_relative_eq!(b.lower, 0.138807724505345, max_relative = 1e-12);
}

#[test]
fn test_instances_keep_their_own_precision() {
    let coarse = IntervalEstimator::new(4).unwrap();
    let fine = IntervalEstimator::new(15).unwrap();

    let before = coarse.estimate_interval(22, 100, true).unwrap();
    let _ = fine.estimate_interval(22, 100, true).unwrap();
    let after = coarse.estimate_interval(22, 100, true).unwrap();

    assert_eq!(before, after);
    assert_eq!(coarse.precision(), 4);
    assert_eq!(fine.precision(), 15);
}

#[test]
fn test_concurrent_instances_do_not_interfere() {
    let precisions = [4u64, 8, 15, 28];
    let estimators: Vec<IntervalEstimator> = precisions
        .iter()
        .map(|&p| IntervalEstimator::new(p).unwrap())
        .collect();
    let expected: Vec<Vec<Interval>> = estimators.iter().map(reference_intervals).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = estimators
            .iter()
            .zip(&expected)
            .map(|(estimator, expected)| {
                scope.spawn(move || {
                    for _ in 0..200 {
                        assert_eq!(&reference_intervals(estimator), expected);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_config_precision_matches_constructor() {
    let from_config = EstimatorConfig::from_json_str(r#"{ "precision": 15 }"#)
        .unwrap()
        .build()
        .unwrap();
    let direct = IntervalEstimator::new(15).unwrap();

    assert_eq!(reference_intervals(&from_config), reference_intervals(&direct));
}
