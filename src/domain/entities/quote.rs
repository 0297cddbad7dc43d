//! # Quote Entity
//!
//! The successful outcome of a quote composition.
//!
//! A [`Quote`] is one priced delivery offer: carrier and method codes for
//! machines, titles for people, and a price with its cost basis. Quotes
//! are immutable; re-quoting produces a new value rather than mutating an
//! old one.
//!
//! # Examples
//!
//! ```
//! use shipquote::domain::entities::quote::Quote;
//! use shipquote::domain::value_objects::{CarrierCode, Currency, MethodCode, Money};
//!
//! let quote = Quote::new(
//!     CarrierCode::new("in_store"),
//!     "In-Store Pickup",
//!     MethodCode::new("pickup"),
//!     "Store Pickup",
//!     Money::from_f64(5.0).unwrap(),
//!     Currency::Usd,
//! );
//!
//! assert_eq!(quote.delivery_method().to_string(), "in_store_pickup");
//! assert_eq!(quote.cost(), quote.price());
//! ```

use crate::domain::value_objects::{CarrierCode, Currency, DeliveryMethod, MethodCode, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced delivery offer for one carrier-method pair.
///
/// # Invariants
///
/// - `price` and `cost` are non-negative (guaranteed by [`Money`]).
/// - Codes and titles are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Machine-readable carrier code.
    carrier: CarrierCode,
    /// Human-readable carrier title.
    carrier_title: String,
    /// Machine-readable method code.
    method: MethodCode,
    /// Human-readable method title.
    method_title: String,
    /// Price charged to the customer.
    price: Money,
    /// Cost basis of providing the delivery.
    cost: Money,
    /// Currency of price and cost.
    currency: Currency,
}

impl Quote {
    /// Creates a new quote with the cost basis equal to the price.
    ///
    /// Use [`Quote::with_cost`] afterwards when the cost differs from
    /// the charged price.
    #[must_use]
    pub fn new(
        carrier: CarrierCode,
        carrier_title: impl Into<String>,
        method: MethodCode,
        method_title: impl Into<String>,
        price: Money,
        currency: Currency,
    ) -> Self {
        Self {
            carrier,
            carrier_title: carrier_title.into(),
            method,
            method_title: method_title.into(),
            price,
            cost: price,
            currency,
        }
    }

    /// Overrides the cost basis.
    #[must_use]
    pub fn with_cost(mut self, cost: Money) -> Self {
        self.cost = cost;
        self
    }

    /// Reconstructs a quote from stored fields.
    #[must_use]
    pub fn from_parts(
        carrier: CarrierCode,
        carrier_title: String,
        method: MethodCode,
        method_title: String,
        price: Money,
        cost: Money,
        currency: Currency,
    ) -> Self {
        Self {
            carrier,
            carrier_title,
            method,
            method_title,
            price,
            cost,
            currency,
        }
    }

    /// Returns the carrier code.
    #[inline]
    #[must_use]
    pub const fn carrier(&self) -> &CarrierCode {
        &self.carrier
    }

    /// Returns the human-readable carrier title.
    #[inline]
    #[must_use]
    pub fn carrier_title(&self) -> &str {
        &self.carrier_title
    }

    /// Returns the method code.
    #[inline]
    #[must_use]
    pub const fn method(&self) -> &MethodCode {
        &self.method
    }

    /// Returns the human-readable method title.
    #[inline]
    #[must_use]
    pub fn method_title(&self) -> &str {
        &self.method_title
    }

    /// Returns the price charged to the customer.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the cost basis.
    #[inline]
    #[must_use]
    pub const fn cost(&self) -> Money {
        self.cost
    }

    /// Returns the currency of price and cost.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the composite delivery-method identifier.
    #[must_use]
    pub fn delivery_method(&self) -> DeliveryMethod {
        DeliveryMethod::new(self.carrier.clone(), self.method.clone())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.delivery_method(),
            self.price,
            self.currency,
            self.method_title
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pickup_quote() -> Quote {
        Quote::new(
            CarrierCode::new("in_store"),
            "In-Store Pickup",
            MethodCode::new("pickup"),
            "Store Pickup",
            Money::from_f64(5.0).unwrap(),
            Currency::Usd,
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn cost_defaults_to_price() {
            let quote = pickup_quote();
            assert_eq!(quote.cost(), quote.price());
        }

        #[test]
        fn with_cost_overrides_cost_basis() {
            let quote = pickup_quote().with_cost(Money::from_f64(3.5).unwrap());
            assert_eq!(quote.cost(), Money::from_f64(3.5).unwrap());
            assert_eq!(quote.price(), Money::from_f64(5.0).unwrap());
        }

        #[test]
        fn from_parts_preserves_all_fields() {
            let quote = Quote::from_parts(
                CarrierCode::new("flatrate"),
                "Flat Rate".to_string(),
                MethodCode::new("standard"),
                "Standard".to_string(),
                Money::from_f64(9.99).unwrap(),
                Money::from_f64(7.0).unwrap(),
                Currency::Eur,
            );

            assert_eq!(quote.carrier_title(), "Flat Rate");
            assert_eq!(quote.cost(), Money::from_f64(7.0).unwrap());
            assert_eq!(quote.currency(), Currency::Eur);
        }

        #[test]
        fn zero_price_quotes_are_representable() {
            let quote = Quote::new(
                CarrierCode::new("in_store"),
                "In-Store Pickup",
                MethodCode::new("pickup"),
                "Store Pickup",
                Money::zero(),
                Currency::Usd,
            );
            assert!(quote.price().is_zero());
            assert!(quote.cost().is_zero());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn delivery_method_joins_codes() {
            let delivery = pickup_quote().delivery_method();
            assert_eq!(delivery.to_string(), "in_store_pickup");
            assert_eq!(delivery.carrier().as_str(), "in_store");
        }

        #[test]
        fn display_shows_price_and_title() {
            assert_eq!(
                pickup_quote().to_string(),
                "in_store_pickup: 5.00 USD (Store Pickup)"
            );
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let quote = pickup_quote().with_cost(Money::from_f64(2.0).unwrap());
            let json = serde_json::to_string(&quote).unwrap();
            let back: Quote = serde_json::from_str(&json).unwrap();
            assert_eq!(back, quote);
        }
    }
}
