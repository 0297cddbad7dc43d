//! # Pricing Request Entity
//!
//! The normalized input handed to a price calculator.
//!
//! A [`PricingRequest`] is derived from a [`QuoteRequest`] part-way
//! through composition, after eligibility has passed and promotions have
//! been counted. It carries everything a calculator may price on and
//! nothing else, so calculators stay decoupled from cart structure.
//!
//! [`QuoteRequest`]: super::quote_request::QuoteRequest

use crate::domain::value_objects::{
    CarrierCode, Currency, FreeUnits, Location, MethodCode, Money, UnitCount, Weight,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized pricing input for one carrier-method pair.
///
/// # Invariants
///
/// - `free_units` never exceeds `total_units`; the constructor clamps.
/// - All amounts share the request currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Carrier being priced.
    carrier: CarrierCode,
    /// Delivery method being priced.
    method: MethodCode,
    /// Currency of all amounts.
    currency: Currency,
    /// Configured base price for the method.
    base_price: Money,
    /// Total units on the originating request.
    total_units: UnitCount,
    /// Units that ship free of charge.
    free_units: FreeUnits,
    /// Total cart value on the originating request.
    cart_value: Money,
    /// Total weight on the originating request.
    total_weight: Weight,
    /// Shipment destination.
    destination: Location,
}

impl PricingRequest {
    /// Creates a pricing request, clamping `free_units` to `total_units`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        carrier: CarrierCode,
        method: MethodCode,
        currency: Currency,
        base_price: Money,
        total_units: UnitCount,
        free_units: FreeUnits,
        cart_value: Money,
        total_weight: Weight,
        destination: Location,
    ) -> Self {
        Self {
            carrier,
            method,
            currency,
            base_price,
            total_units,
            free_units: free_units.clamp_to(total_units),
            cart_value,
            total_weight,
            destination,
        }
    }

    /// Returns the carrier being priced.
    #[must_use]
    #[inline]
    pub const fn carrier(&self) -> &CarrierCode {
        &self.carrier
    }

    /// Returns the delivery method being priced.
    #[must_use]
    #[inline]
    pub const fn method(&self) -> &MethodCode {
        &self.method
    }

    /// Returns the currency of all amounts.
    #[must_use]
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the configured base price.
    #[must_use]
    #[inline]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    /// Returns the total unit count.
    #[must_use]
    #[inline]
    pub const fn total_units(&self) -> UnitCount {
        self.total_units
    }

    /// Returns the free unit count.
    #[must_use]
    #[inline]
    pub const fn free_units(&self) -> FreeUnits {
        self.free_units
    }

    /// Returns the units that are actually charged for.
    #[must_use]
    pub fn chargeable_units(&self) -> UnitCount {
        UnitCount::new(self.total_units.get().saturating_sub(self.free_units.get()))
    }

    /// Returns the total cart value.
    #[must_use]
    #[inline]
    pub const fn cart_value(&self) -> Money {
        self.cart_value
    }

    /// Returns the total weight.
    #[must_use]
    #[inline]
    pub const fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the shipment destination.
    #[must_use]
    #[inline]
    pub const fn destination(&self) -> &Location {
        &self.destination
    }
}

impl fmt::Display for PricingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pricing {}_{}: base {} {}, {}/{} units free",
            self.carrier,
            self.method,
            self.base_price,
            self.currency,
            self.free_units,
            self.total_units
        )
    }
}
