//! Conversion of caller-supplied numbers into decimals
//!
//! Counts and proportions enter the library through [`ToDecimal`], which
//! turns them into exact [`BigDecimal`] values. Floats go through their
//! shortest round-trip representation, so `0.001_f64` becomes exactly
//! `0.001` rather than the nearest binary fraction. Values that are not
//! numbers (NaN, infinities, unparseable strings) are rejected here instead
//! of surfacing later as odd arithmetic.

use crate::error::{Error, Result};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Explicit conversion into a decimal at the API boundary
pub trait ToDecimal {
    fn to_decimal(&self) -> Result<BigDecimal>;
}

macro_rules! impl_to_decimal_int {
    ($($t:ty),*) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> Result<BigDecimal> {
                    Ok(BigDecimal::from(*self))
                }
            }
        )*
    };
}

impl_to_decimal_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl ToDecimal for usize {
    fn to_decimal(&self) -> Result<BigDecimal> {
        Ok(BigDecimal::from(BigInt::from(*self)))
    }
}

impl ToDecimal for isize {
    fn to_decimal(&self) -> Result<BigDecimal> {
        Ok(BigDecimal::from(BigInt::from(*self)))
    }
}

macro_rules! impl_to_decimal_float {
    ($($t:ty),*) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> Result<BigDecimal> {
                    if !self.is_finite() {
                        return Err(Error::non_finite(&format!("value {self}")));
                    }
                    parse_decimal(&self.to_string())
                }
            }
        )*
    };
}

impl_to_decimal_float!(f32, f64);

impl ToDecimal for str {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse_decimal(self.trim())
    }
}

impl ToDecimal for String {
    fn to_decimal(&self) -> Result<BigDecimal> {
        self.as_str().to_decimal()
    }
}

impl ToDecimal for BigDecimal {
    fn to_decimal(&self) -> Result<BigDecimal> {
        Ok(self.clone())
    }
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    fn to_decimal(&self) -> Result<BigDecimal> {
        (**self).to_decimal()
    }
}

fn parse_decimal(text: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(text)
        .map_err(|e| Error::InvalidInput(format!("{text:?} is not a decimal number: {e}")))
}
