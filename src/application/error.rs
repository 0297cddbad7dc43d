//! # Application Errors
//!
//! Error types for failures inside a running quote composition.
//!
//! A composition that fails yields exactly one [`QuoteError`], classified
//! by who can act on it: shoppers see [`QuoteError::Ineligible`] messages
//! verbatim, while the other kinds are operator-facing and should reach
//! logs and dashboards rather than checkout pages.
//!
//! # Error Hierarchy
//!
//! ```text
//! QuoteError
//! ├── Ineligible { message, reason } - request fails carrier rules (user-facing)
//! ├── InvalidConfiguration(String)   - carrier configuration is unusable (operator-facing)
//! └── Calculation(String)            - pricing arithmetic or rate lookup failed (operator-facing)
//! ```
//!
//! # Examples
//!
//! ```
//! use shipquote::application::error::QuoteError;
//!
//! let err = QuoteError::ineligible_with_reason(
//!     "This delivery method is not available for your order.",
//!     "cart value 3.00 below minimum 10.00",
//! );
//!
//! // Shoppers see only the configured message.
//! assert_eq!(
//!     err.to_string(),
//!     "This delivery method is not available for your order."
//! );
//! assert!(err.is_user_facing());
//! ```

use thiserror::Error;

/// Error produced by a failed quote composition.
///
/// The `Ineligible` display is the configured storefront message and
/// nothing else; the validator's diagnostic stays on the separate
/// `reason` field so it can be logged without leaking to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The request fails the carrier's eligibility rules.
    #[error("{message}")]
    Ineligible {
        /// Storefront message shown to the shopper.
        message: String,
        /// Validator diagnostic for operators, if one was given.
        reason: Option<String>,
    },

    /// The carrier configuration cannot produce a usable price.
    #[error("invalid carrier configuration: {0}")]
    InvalidConfiguration(String),

    /// Pricing arithmetic or a rate lookup failed.
    #[error("price calculation failed: {0}")]
    Calculation(String),
}

impl QuoteError {
    /// Creates an eligibility error with no diagnostic.
    #[must_use]
    pub fn ineligible(message: impl Into<String>) -> Self {
        Self::Ineligible {
            message: message.into(),
            reason: None,
        }
    }

    /// Creates an eligibility error carrying a validator diagnostic.
    #[must_use]
    pub fn ineligible_with_reason(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Ineligible {
            message: message.into(),
            reason: Some(reason.into()),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Creates a calculation error.
    #[must_use]
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation(message.into())
    }

    /// Returns the primary message of the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Ineligible { message, .. } => message,
            Self::InvalidConfiguration(message) | Self::Calculation(message) => message,
        }
    }

    /// Returns the validator diagnostic, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ineligible { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// Returns true if this is an eligibility failure.
    #[must_use]
    pub fn is_ineligible(&self) -> bool {
        matches!(self, Self::Ineligible { .. })
    }

    /// Returns true if this is a configuration failure.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Returns true if this is a calculation failure.
    #[must_use]
    pub fn is_calculation(&self) -> bool {
        matches!(self, Self::Calculation(_))
    }

    /// Returns true if the display text is safe to show a shopper.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        self.is_ineligible()
    }
}

/// Result type for quote composition operations.
pub type QuoteResult<T> = Result<T, QuoteError>;
