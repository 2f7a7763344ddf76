//! Confidence level table
//!
//! Maps a named confidence level (`"95"`, `"99"`) to its z multiplier.
//! Lookups of unknown keys fail with [`Error::UnknownConfidenceLevel`];
//! there is no fallback level.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use sampling_core::{Error, Result, ToDecimal};
use std::collections::BTreeMap;
use std::fmt;

/// Confidence level used when the caller does not name one
pub const DEFAULT_CONFIDENCE_LEVEL: &str = "95";

/// Named confidence levels and their z multipliers
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceTable {
    multipliers: BTreeMap<String, BigDecimal>,
}

impl ConfidenceTable {
    /// Table with the two standard levels: `"95"` → 1.96, `"99"` → 2.58
    pub fn standard() -> Self {
        let mut multipliers = BTreeMap::new();
        multipliers.insert("95".to_string(), hundredths(196));
        multipliers.insert("99".to_string(), hundredths(258));
        Self { multipliers }
    }

    /// Table without any level
    pub fn empty() -> Self {
        Self {
            multipliers: BTreeMap::new(),
        }
    }

    /// Add or replace a level
    ///
    /// The multiplier must be strictly positive.
    pub fn insert(&mut self, key: impl Into<String>, multiplier: impl ToDecimal) -> Result<()> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::InvalidParameter(
                "Confidence level key must not be empty".to_string(),
            ));
        }
        let multiplier = multiplier.to_decimal()?;
        if multiplier <= BigDecimal::zero() {
            return Err(Error::InvalidParameter(format!(
                "Multiplier for confidence level {key:?} must be positive, got {multiplier}"
            )));
        }
        self.multipliers.insert(key, multiplier);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_level(mut self, key: impl Into<String>, multiplier: impl ToDecimal) -> Result<Self> {
        self.insert(key, multiplier)?;
        Ok(self)
    }

    /// Multiplier for a level
    pub fn multiplier(&self, key: &str) -> Result<&BigDecimal> {
        self.multipliers
            .get(key)
            .ok_or_else(|| Error::unknown_level(key))
    }

    /// Whether a level is present
    pub fn contains(&self, key: &str) -> bool {
        self.multipliers.contains_key(key)
    }

    /// Level names in sorted order
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.multipliers.keys().map(String::as_str)
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether the table has no level
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for ConfidenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .multipliers
            .iter()
            .map(|(key, z)| format!("{key}% -> {z}"))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

fn hundredths(value: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), 2)
}
