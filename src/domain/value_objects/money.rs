//! # Money Value Object
//!
//! Non-negative monetary amount backed by a fixed-point decimal.
//!
//! Every amount that flows through quote composition — cart values, base
//! prices, final quote prices — is a [`Money`]. Negative amounts are
//! rejected at construction and all arithmetic is checked, so a composed
//! quote can never carry a negative or silently-wrapped price.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipquote::domain::value_objects::Money;
//!
//! let base = Money::new(Decimal::new(500, 2)).unwrap();
//! let doubled = base.safe_mul(Decimal::from(2)).unwrap();
//! assert_eq!(doubled.get(), Decimal::new(1000, 2));
//!
//! assert!(Money::new(Decimal::new(-1, 2)).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// The currency is carried separately (on the request or quote); `Money`
/// is only the magnitude. Use [`Money::safe_add`], [`Money::safe_sub`],
/// and [`Money::safe_mul`] instead of raw operators so overflow and
/// negative results surface as [`DomainError`] values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new amount, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `amount` is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::InvalidAmount(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Creates a new amount from a float, rejecting negative or
    /// non-representable values.
    ///
    /// Intended for configuration and test ergonomics; prefer
    /// [`Money::new`] with an exact [`Decimal`] in production paths.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `amount` is negative,
    /// infinite, or NaN.
    pub fn from_f64(amount: f64) -> DomainResult<Self> {
        let decimal =
            Decimal::try_from(amount).map_err(|_| DomainError::InvalidAmount(amount.to_string()))?;
        Self::new(decimal)
    }

    /// The zero amount.
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

    /// Returns true if the amount is zero.
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
            .ok_or(DomainError::Overflow("money addition"))
    }

    /// Checked subtraction that never goes below zero.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Underflow`] if `rhs` exceeds `self`.
    pub fn safe_sub(self, rhs: Self) -> DomainResult<Self> {
        if rhs.0 > self.0 {
            return Err(DomainError::Underflow("money subtraction"));
        }
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(DomainError::Underflow("money subtraction"))
    }

    /// Checked multiplication by a non-negative factor.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `factor` is negative, or
    /// [`DomainError::Overflow`] if the product is not representable.
    pub fn safe_mul(self, factor: Decimal) -> DomainResult<Self> {
        if factor.is_sign_negative() {
            return Err(DomainError::InvalidAmount(factor.to_string()));
        }
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or(DomainError::Overflow("money multiplication"))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
