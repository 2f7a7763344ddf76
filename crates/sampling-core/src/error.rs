//! Error types for sampling statistics
//!
//! Provides a unified error type for all sampling-stats crates.

use thiserror::Error;

/// Core error type for interval estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Normal approximation validity conditions are not met
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Requested confidence level is absent from the configured table
    #[error("Unknown confidence level: {0:?}")]
    UnknownConfidenceLevel(String),

    /// Invalid input data (non-numeric, non-finite, zero divisor)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided at construction time
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Decimal computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a failed normal approximation check
    pub fn precondition(conditions: &str) -> Self {
        Self::Precondition(conditions.to_string())
    }

    /// Create an error for a missing confidence level key
    pub fn unknown_level(key: &str) -> Self {
        Self::UnknownConfidenceLevel(key.to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} is NaN or infinite"))
    }

    /// Create an error for a zero divisor
    pub fn division_by_zero(context: &str) -> Self {
        Self::InvalidInput(format!("Division by zero in {context}"))
    }

    /// Whether this error reports an invalid normal approximation
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Whether this error reports a failed confidence level lookup
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownConfidenceLevel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::precondition("N >= 30, (N * P) >= 5, N * (1 - P) >= 5");
        assert_eq!(
            err.to_string(),
            "Precondition failed: N >= 30, (N * P) >= 5, N * (1 - P) >= 5"
        );

        let err = Error::unknown_level("90");
        assert_eq!(err.to_string(), "Unknown confidence level: \"90\"");

        let err = Error::InvalidParameter("precision must be at least 1".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: precision must be at least 1");

        let err = Error::Computation("negative radicand".to_string());
        assert_eq!(err.to_string(), "Computation error: negative radicand");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::non_finite("proportion");
        assert_eq!(err.to_string(), "Invalid input: proportion is NaN or infinite");

        let err = Error::division_by_zero("observed frequency");
        assert_eq!(err.to_string(), "Invalid input: Division by zero in observed frequency");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let precondition = Error::precondition("N >= 30");
        let lookup = Error::unknown_level("90");

        assert!(precondition.is_precondition());
        assert!(!precondition.is_lookup());
        assert!(lookup.is_lookup());
        assert!(!lookup.is_precondition());
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: Error = json_err.into();

        match err {
            Error::Config(_) => {}
            _ => panic!("Wrong error type"),
        }
    }
}
