//! # Domain Errors
//!
//! Error types for domain object construction and checked arithmetic.
//!
//! These errors surface while *building* requests and value objects, before
//! a composition ever runs. Failures inside a running composition are
//! represented by [`QuoteError`](crate::application::error::QuoteError)
//! instead.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipquote::domain::errors::DomainError;
//! use shipquote::domain::value_objects::Money;
//!
//! let err = Money::new(Decimal::new(-1, 2)).unwrap_err();
//! assert!(matches!(err, DomainError::InvalidAmount(_)));
//! ```

use thiserror::Error;

/// Error type for domain object construction and arithmetic.
///
/// All monetary, weight, and quantity values in this crate are non-negative
/// by construction, and every arithmetic operation on them is checked; this
/// enum is how those guarantees are reported rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A monetary amount was negative or not representable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A weight was negative or not representable.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// A checked arithmetic operation overflowed.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A checked subtraction went below zero.
    #[error("arithmetic underflow in {0}")]
    Underflow(&'static str),
}

impl DomainError {
    /// Returns true if this error came from a checked arithmetic operation.
    #[must_use]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Overflow(_) | Self::Underflow(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
