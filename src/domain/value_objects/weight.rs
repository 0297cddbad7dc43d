//! # Weight Value Object
//!
//! Non-negative package weight in the carrier-agreed unit.
//!
//! The crate does not fix a physical unit; a deployment agrees one
//! (kilograms, pounds) with its carriers and uses it consistently across
//! cart lines and rate tables. Like [`Money`](super::Money), weights are
//! non-negative by construction and all arithmetic is checked.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative weight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Weight(Decimal);

impl Weight {
    /// Creates a new weight, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::InvalidWeight(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Creates a new weight from a float.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if `value` is negative,
    /// infinite, or NaN.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        let decimal =
            Decimal::try_from(value).map_err(|_| DomainError::InvalidWeight(value.to_string()))?;
        Self::new(decimal)
    }

    /// The zero weight.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    #[inline]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the weight is zero.
    #[must_use]
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if the sum is not representable.
    pub fn safe_add(self, rhs: Self) -> DomainResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(DomainError::Overflow("weight addition"))
    }

    /// Checked multiplication by a unit count.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if the product is not representable.
    pub fn safe_mul_units(self, units: u32) -> DomainResult<Self> {
        self.0
            .checked_mul(Decimal::from(units))
            .map(Self)
            .ok_or(DomainError::Overflow("weight multiplication"))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_weight() {
        let result = Weight::new(Decimal::new(-5, 1));
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidWeight("-0.5".to_string())
        );
    }

    #[test]
    fn from_f64_handles_edge_inputs() {
        assert!(Weight::from_f64(0.0).unwrap().is_zero());
        assert!(Weight::from_f64(2.5).is_ok());
        assert!(Weight::from_f64(-1.0).is_err());
        assert!(Weight::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn safe_add_accumulates() {
        let a = Weight::from_f64(1.5).unwrap();
        let b = Weight::from_f64(2.5).unwrap();
        assert_eq!(a.safe_add(b).unwrap(), Weight::from_f64(4.0).unwrap());
    }

    #[test]
    fn safe_mul_units_scales_by_quantity() {
        let unit = Weight::from_f64(0.75).unwrap();
        assert_eq!(
            unit.safe_mul_units(4).unwrap(),
            Weight::from_f64(3.0).unwrap()
        );
        assert!(unit.safe_mul_units(0).unwrap().is_zero());
    }

    #[test]
    fn overflow_is_reported() {
        let max = Weight::new(Decimal::MAX).unwrap();
        assert_eq!(
            max.safe_mul_units(2).unwrap_err(),
            DomainError::Overflow("weight multiplication")
        );
    }
}
