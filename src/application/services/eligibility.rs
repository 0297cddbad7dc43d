//! # Eligibility Validation
//!
//! Strategies for deciding whether a request may use a carrier at all.
//!
//! This module provides the [`EligibilityValidator`] trait and
//! implementations covering the common storefront rules: order minimums,
//! destination allowlists, and rule conjunction.

use crate::domain::entities::QuoteRequest;
use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Outcome of an eligibility check.
///
/// An invalid result carries the validator's diagnostic; composition
/// replaces it with the carrier's configured storefront message before
/// anything reaches a shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    reason: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A failing result with a diagnostic for operators.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Returns true if the check passed.
    #[must_use]
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the diagnostic of a failing result.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) if !self.valid => write!(f, "invalid: {reason}"),
            _ => f.write_str("valid"),
        }
    }
}

/// Trait for carrier eligibility rules.
///
/// Implementations inspect the request and decide whether the carrier is
/// willing to quote it. Checks must be pure: no I/O, no clock reads, and
/// the same request always yields the same result.
pub trait EligibilityValidator: Send + Sync + fmt::Debug {
    /// Checks whether the request may use the carrier.
    fn validate(&self, request: &QuoteRequest) -> ValidationResult;

    /// Returns the name of this validator.
    fn name(&self) -> &'static str;
}

/// Validator that accepts every request.
///
/// The fit for carriers with no eligibility rules of their own, such as
/// in-store pickup.
#[derive(Debug, Clone, Default)]
pub struct AlwaysEligible;

impl AlwaysEligible {
    /// Creates a new always-eligible validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EligibilityValidator for AlwaysEligible {
    fn validate(&self, _request: &QuoteRequest) -> ValidationResult {
        ValidationResult::valid()
    }

    fn name(&self) -> &'static str {
        "AlwaysEligible"
    }
}

/// Validator requiring a minimum cart value.
#[derive(Debug, Clone)]
pub struct MinimumOrderValue {
    minimum: Money,
}

impl MinimumOrderValue {
    /// Creates a validator requiring at least `minimum` of cart value.
    #[must_use]
    pub const fn new(minimum: Money) -> Self {
        Self { minimum }
    }

    /// Returns the configured minimum.
    #[must_use]
    #[inline]
    pub const fn minimum(&self) -> Money {
        self.minimum
    }
}

impl EligibilityValidator for MinimumOrderValue {
    fn validate(&self, request: &QuoteRequest) -> ValidationResult {
        if request.cart_value() < self.minimum {
            return ValidationResult::invalid(format!(
                "cart value {} below minimum {}",
                request.cart_value(),
                self.minimum
            ));
        }
        ValidationResult::valid()
    }

    fn name(&self) -> &'static str {
        "MinimumOrderValue"
    }
}

/// Validator restricting the destination country.
#[derive(Debug, Clone)]
pub struct DestinationAllowlist {
    countries: HashSet<String>,
}

impl DestinationAllowlist {
    /// Creates a validator accepting only the given country codes.
    #[must_use]
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries
                .into_iter()
                .map(|c| c.into().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Returns true if the country code is served.
    #[must_use]
    pub fn serves(&self, country: &str) -> bool {
        self.countries.contains(&country.to_ascii_uppercase())
    }
}

impl EligibilityValidator for DestinationAllowlist {
    fn validate(&self, request: &QuoteRequest) -> ValidationResult {
        let country = request.destination().country();
        if !self.serves(country) {
            return ValidationResult::invalid(format!("destination {country} not served"));
        }
        ValidationResult::valid()
    }

    fn name(&self) -> &'static str {
        "DestinationAllowlist"
    }
}

/// Validator combining several others; all must pass.
///
/// Checks run in registration order and the first failure wins, so put
/// the cheapest rules first.
#[derive(Debug, Clone, Default)]
pub struct CompositeValidator {
    validators: Vec<Arc<dyn EligibilityValidator>>,
}

impl CompositeValidator {
    /// Creates an empty composite that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator to the chain.
    #[must_use]
    pub fn with(mut self, validator: Arc<dyn EligibilityValidator>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Returns the number of chained validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are chained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl EligibilityValidator for CompositeValidator {
    fn validate(&self, request: &QuoteRequest) -> ValidationResult {
        for validator in &self.validators {
            let result = validator.validate(request);
            if !result.is_valid() {
                return result;
            }
        }
        ValidationResult::valid()
    }

    fn name(&self) -> &'static str {
        "Composite"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::quote_request::{CartLine, QuoteRequestBuilder};
    use crate::domain::value_objects::{Currency, Location, Weight};

    fn request_worth(value: f64, destination: &str) -> QuoteRequest {
        QuoteRequestBuilder::new(Location::new("US"), Location::new(destination), Currency::Usd)
            .line(CartLine::new(
                "SKU-1",
                1,
                Money::from_f64(value).unwrap(),
                Weight::from_f64(1.0).unwrap(),
            ))
            .try_build()
            .unwrap()
    }

    #[test]
    fn always_eligible_accepts_anything() {
        let validator = AlwaysEligible::new();
        assert!(validator.validate(&request_worth(0.01, "US")).is_valid());
        assert_eq!(validator.name(), "AlwaysEligible");
    }

    #[test]
    fn minimum_order_value_rejects_small_carts() {
        let validator = MinimumOrderValue::new(Money::from_f64(10.0).unwrap());

        let result = validator.validate(&request_worth(3.0, "US"));
        assert!(!result.is_valid());
        assert_eq!(
            result.reason(),
            Some("cart value 3.00 below minimum 10.00")
        );
    }

    #[test]
    fn minimum_order_value_accepts_exact_minimum() {
        let validator = MinimumOrderValue::new(Money::from_f64(10.0).unwrap());
        assert!(validator.validate(&request_worth(10.0, "US")).is_valid());
        assert!(validator.validate(&request_worth(10.01, "US")).is_valid());
    }

    #[test]
    fn destination_allowlist_matches_case_insensitively() {
        let validator = DestinationAllowlist::new(["us", "CA"]);

        assert!(validator.validate(&request_worth(5.0, "US")).is_valid());
        assert!(validator.validate(&request_worth(5.0, "ca")).is_valid());

        let result = validator.validate(&request_worth(5.0, "DE"));
        assert!(!result.is_valid());
        assert_eq!(result.reason(), Some("destination DE not served"));
    }

    #[test]
    fn composite_reports_first_failure() {
        let validator = CompositeValidator::new()
            .with(Arc::new(DestinationAllowlist::new(["US"])))
            .with(Arc::new(MinimumOrderValue::new(
                Money::from_f64(10.0).unwrap(),
            )));

        let result = validator.validate(&request_worth(3.0, "DE"));
        assert_eq!(result.reason(), Some("destination DE not served"));

        let result = validator.validate(&request_worth(3.0, "US"));
        assert_eq!(
            result.reason(),
            Some("cart value 3.00 below minimum 10.00")
        );
    }

    #[test]
    fn empty_composite_accepts_everything() {
        let validator = CompositeValidator::new();
        assert!(validator.is_empty());
        assert!(validator.validate(&request_worth(0.5, "ZZ")).is_valid());
    }

    #[test]
    fn validation_result_display() {
        assert_eq!(ValidationResult::valid().to_string(), "valid");
        assert_eq!(
            ValidationResult::invalid("too light").to_string(),
            "invalid: too light"
        );
    }
}
