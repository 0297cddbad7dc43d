//! # Price Calculation
//!
//! Strategies for turning a pricing input into a final shipping price.
//!
//! This module provides the [`PriceCalculator`] trait and the built-in
//! calculators: flat per-order pricing, per-unit pricing, weight-bracket
//! rate tables, and a free-above-threshold decorator that wraps any of
//! them.
//!
//! All built-ins treat a fully-free request (every unit covered by a
//! promotion) as costing nothing, and every calculator is a pure
//! function of its [`PricingRequest`].

use crate::application::error::{QuoteError, QuoteResult};
use crate::domain::entities::PricingRequest;
use crate::domain::value_objects::{Currency, Money, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Trait for pricing strategies.
///
/// Implementations may consult embedded rate data but must be
/// deterministic: the same pricing input always yields the same price.
pub trait PriceCalculator: Send + Sync + fmt::Debug {
    /// Calculates the shipping price for the pricing input.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Calculation`] if the input cannot be priced.
    fn calculate(&self, pricing: &PricingRequest) -> QuoteResult<Money>;

    /// Returns the name of this calculator.
    fn name(&self) -> &'static str;
}

/// Charges the configured base price once per order.
///
/// The price does not scale with quantity; a request whose units are all
/// free ships at zero.
#[derive(Debug, Clone, Default)]
pub struct FlatRateCalculator;

impl FlatRateCalculator {
    /// Creates a new flat-rate calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PriceCalculator for FlatRateCalculator {
    fn calculate(&self, pricing: &PricingRequest) -> QuoteResult<Money> {
        if pricing.chargeable_units().is_zero() {
            return Ok(Money::zero());
        }
        Ok(pricing.base_price())
    }

    fn name(&self) -> &'static str {
        "FlatRate"
    }
}

/// Charges the configured base price for every chargeable unit.
#[derive(Debug, Clone, Default)]
pub struct PerUnitRateCalculator;

impl PerUnitRateCalculator {
    /// Creates a new per-unit calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PriceCalculator for PerUnitRateCalculator {
    fn calculate(&self, pricing: &PricingRequest) -> QuoteResult<Money> {
        let chargeable = Decimal::from(pricing.chargeable_units().get());
        pricing
            .base_price()
            .safe_mul(chargeable)
            .map_err(|e| QuoteError::calculation(format!("per-unit price: {e}")))
    }

    fn name(&self) -> &'static str {
        "PerUnitRate"
    }
}

/// One row of a weight-bracket rate table.
///
/// Covers shipments up to and including `up_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBracket {
    /// Inclusive upper bound of the bracket.
    up_to: Weight,
    /// Price charged for shipments in the bracket.
    price: Money,
}

impl WeightBracket {
    /// Creates a new bracket.
    #[must_use]
    pub const fn new(up_to: Weight, price: Money) -> Self {
        Self { up_to, price }
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[inline]
    pub const fn up_to(&self) -> Weight {
        self.up_to
    }

    /// Returns the bracket price.
    #[must_use]
    #[inline]
    pub const fn price(&self) -> Money {
        self.price
    }
}

/// Prices shipments from a weight-bracket rate table.
///
/// The table carries its own currency; a pricing input in any other
/// currency fails rather than silently mixing units. A total weight
/// beyond the last bracket also fails, since the carrier has published
/// no rate for it.
#[derive(Debug, Clone)]
pub struct TableRateCalculator {
    currency: Currency,
    brackets: Vec<WeightBracket>,
}

impl TableRateCalculator {
    /// Creates a calculator from a rate table, sorting brackets by
    /// ascending weight bound.
    #[must_use]
    pub fn new(currency: Currency, mut brackets: Vec<WeightBracket>) -> Self {
        brackets.sort_by_key(WeightBracket::up_to);
        Self { currency, brackets }
    }

    /// Returns the table currency.
    #[must_use]
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the brackets in ascending weight order.
    #[must_use]
    #[inline]
    pub fn brackets(&self) -> &[WeightBracket] {
        &self.brackets
    }
}

impl PriceCalculator for TableRateCalculator {
    fn calculate(&self, pricing: &PricingRequest) -> QuoteResult<Money> {
        if pricing.currency() != self.currency {
            return Err(QuoteError::calculation(format!(
                "rate table currency {} does not match request currency {}",
                self.currency,
                pricing.currency()
            )));
        }

        if pricing.chargeable_units().is_zero() {
            return Ok(Money::zero());
        }

        let weight = pricing.total_weight();
        self.brackets
            .iter()
            .find(|bracket| weight <= bracket.up_to())
            .map(WeightBracket::price)
            .ok_or_else(|| {
                QuoteError::calculation(format!("no rate bracket covers weight {weight}"))
            })
    }

    fn name(&self) -> &'static str {
        "TableRate"
    }
}

/// Decorator that ships free above a cart-value threshold.
///
/// Below the threshold it delegates to the wrapped calculator, so any
/// pricing scheme can gain a free-shipping tier without changes.
#[derive(Debug, Clone)]
pub struct FreeThresholdCalculator {
    threshold: Money,
    inner: Arc<dyn PriceCalculator>,
}

impl FreeThresholdCalculator {
    /// Wraps `inner`, making orders at or above `threshold` ship free.
    #[must_use]
    pub fn new(threshold: Money, inner: Arc<dyn PriceCalculator>) -> Self {
        Self { threshold, inner }
    }

    /// Returns the configured threshold.
    #[must_use]
    #[inline]
    pub const fn threshold(&self) -> Money {
        self.threshold
    }
}

impl PriceCalculator for FreeThresholdCalculator {
    fn calculate(&self, pricing: &PricingRequest) -> QuoteResult<Money> {
        if pricing.cart_value() >= self.threshold {
            tracing::debug!(
                carrier = %pricing.carrier(),
                cart_value = %pricing.cart_value(),
                threshold = %self.threshold,
                "cart value reached free-shipping threshold"
            );
            return Ok(Money::zero());
        }
        self.inner.calculate(pricing)
    }

    fn name(&self) -> &'static str {
        "FreeThreshold"
    }
}
