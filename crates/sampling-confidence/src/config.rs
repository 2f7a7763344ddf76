//! Serde configuration for building estimators
//!
//! ```rust
//! use sampling_confidence::EstimatorConfig;
//!
//! let config = EstimatorConfig::from_json_str(
//!     r#"{ "precision": 15, "confidence_levels": { "90": "1.645" } }"#,
//! ).unwrap();
//! let estimator = config.build().unwrap();
//! assert_eq!(estimator.precision(), 15);
//! assert!(estimator.confidence_levels().contains("90"));
//! ```

use crate::estimator::IntervalEstimator;
use crate::levels::ConfidenceTable;
use sampling_core::{DecimalContext, Result, Rounding};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Estimator configuration
///
/// Missing fields take their defaults: eight significant digits, half-even
/// rounding, and only the standard 95%/99% levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Significant digits for decimal arithmetic
    pub precision: u64,
    /// Rounding applied after each operation
    pub rounding: Rounding,
    /// Extra or overriding levels, key to multiplier as a decimal string
    pub confidence_levels: BTreeMap<String, String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            precision: DecimalContext::DEFAULT_PRECISION,
            rounding: Rounding::default(),
            confidence_levels: BTreeMap::new(),
        }
    }
}

impl EstimatorConfig {
    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and build an estimator from it
    pub fn build(&self) -> Result<IntervalEstimator> {
        let context = DecimalContext::new(self.precision)?.with_rounding(self.rounding);

        let mut levels = ConfidenceTable::standard();
        for (key, multiplier) in &self.confidence_levels {
            levels.insert(key.as_str(), multiplier.as_str())?;
        }

        Ok(IntervalEstimator::from_parts(context, levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampling_core::Error;

    #[test]
    fn test_default_config() {
        let estimator = EstimatorConfig::default().build().unwrap();
        assert_eq!(estimator, IntervalEstimator::default());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = EstimatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config = EstimatorConfig::from_json_str(
            r#"{
                "precision": 12,
                "rounding": "half_up",
                "confidence_levels": { "90": "1.645", "99": "2.576" }
            }"#,
        )
        .unwrap();
        let estimator = config.build().unwrap();

        assert_eq!(estimator.precision(), 12);
        assert_eq!(estimator.context().rounding(), Rounding::HalfUp);
        assert_eq!(estimator.confidence_levels().len(), 3);
        assert_eq!(
            estimator.confidence_levels().multiplier("99").unwrap().to_string(),
            "2.576"
        );
    }

    #[test]
    fn test_invalid_configs() {
        let err = EstimatorConfig::from_json_str(r#"{ "precision": "eight" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = EstimatorConfig::from_json_str(r#"{ "digits": 8 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = EstimatorConfig {
            precision: 0,
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(Error::InvalidParameter(_))));

        let mut config = EstimatorConfig::default();
        config.confidence_levels.insert("90".to_string(), "wide".to_string());
        assert!(matches!(config.build(), Err(Error::InvalidInput(_))));
    }
}
