//! Core types for sampling statistics
//!
//! This crate holds the pieces shared by the interval estimators:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`DecimalContext`]: per-instance significant-digit precision and rounding
//! - [`ToDecimal`]: explicit conversion of caller numbers into decimals
//!
//! # Example
//!
//! ```rust
//! use sampling_core::{DecimalContext, ToDecimal};
//!
//! let ctx = DecimalContext::new(8).unwrap();
//! let third = ctx.div(&1u32.to_decimal().unwrap(), &3u32.to_decimal().unwrap()).unwrap();
//! assert_eq!(third.to_string(), "0.33333333");
//! ```

pub mod context;
pub mod error;
pub mod numeric;

// Re-export core types
pub use context::{DecimalContext, Rounding};
pub use error::{Error, Result};
pub use numeric::ToDecimal;

pub use bigdecimal::BigDecimal;
