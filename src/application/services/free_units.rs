//! # Free Unit Counting
//!
//! Strategies for deciding how many units ship free of charge.
//!
//! This module provides the [`FreeUnitCounter`] trait and implementations
//! for the common promotion shapes: none, per-line flags, and
//! whole-order spend thresholds.
//!
//! Counters may over-report (overlapping promotions legitimately do);
//! composition clamps the count to the request's total units before
//! pricing, so implementations only need to be monotone, not exact.

use crate::domain::entities::QuoteRequest;
use crate::domain::value_objects::{FreeUnits, Money};
use std::fmt;

/// Trait for promotion-driven free unit counting.
///
/// Implementations must be pure functions of the request.
pub trait FreeUnitCounter: Send + Sync + fmt::Debug {
    /// Counts the units of the request that ship free.
    fn count_free(&self, request: &QuoteRequest) -> FreeUnits;

    /// Returns the name of this counter.
    fn name(&self) -> &'static str;
}

/// Counter that never grants free units.
#[derive(Debug, Clone, Default)]
pub struct NoFreeUnits;

impl NoFreeUnits {
    /// Creates a new zero counter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FreeUnitCounter for NoFreeUnits {
    fn count_free(&self, _request: &QuoteRequest) -> FreeUnits {
        FreeUnits::zero()
    }

    fn name(&self) -> &'static str {
        "NoFreeUnits"
    }
}

/// Counter that sums the quantities of promotion-flagged lines.
///
/// Reads the `free_shipping` flag that cart promotions set per line.
#[derive(Debug, Clone, Default)]
pub struct FlaggedItemCounter;

impl FlaggedItemCounter {
    /// Creates a new flagged-line counter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FreeUnitCounter for FlaggedItemCounter {
    fn count_free(&self, request: &QuoteRequest) -> FreeUnits {
        let flagged: u64 = request
            .lines()
            .iter()
            .filter(|line| line.free_shipping())
            .map(|line| u64::from(line.quantity()))
            .sum();
        // Saturate; composition clamps to the request total anyway.
        FreeUnits::new(u32::try_from(flagged).unwrap_or(u32::MAX))
    }

    fn name(&self) -> &'static str {
        "FlaggedItemCounter"
    }
}

/// Counter that frees the whole order above a spend threshold.
#[derive(Debug, Clone)]
pub struct SpendThresholdCounter {
    threshold: Money,
}

impl SpendThresholdCounter {
    /// Creates a counter freeing every unit once the cart value reaches
    /// `threshold`.
    #[must_use]
    pub const fn new(threshold: Money) -> Self {
        Self { threshold }
    }

    /// Returns the configured threshold.
    #[must_use]
    #[inline]
    pub const fn threshold(&self) -> Money {
        self.threshold
    }
}

impl FreeUnitCounter for SpendThresholdCounter {
    fn count_free(&self, request: &QuoteRequest) -> FreeUnits {
        if request.cart_value() >= self.threshold {
            FreeUnits::new(request.total_units().get())
        } else {
            FreeUnits::zero()
        }
    }

    fn name(&self) -> &'static str {
        "SpendThresholdCounter"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::quote_request::{CartLine, QuoteRequest, QuoteRequestBuilder};
    use crate::domain::value_objects::{Currency, Location, Weight};

    fn line(quantity: u32, value: f64, free: bool) -> CartLine {
        CartLine::new(
            "SKU",
            quantity,
            Money::from_f64(value).unwrap(),
            Weight::from_f64(0.5).unwrap(),
        )
        .with_free_shipping(free)
    }

    fn request(lines: Vec<CartLine>) -> QuoteRequest {
        QuoteRequestBuilder::new(Location::new("US"), Location::new("US"), Currency::Usd)
            .lines(lines)
            .try_build()
            .unwrap()
    }

    #[test]
    fn no_free_units_always_returns_zero() {
        let counter = NoFreeUnits::new();
        let req = request(vec![line(5, 10.0, true)]);
        assert!(counter.count_free(&req).is_zero());
    }

    #[test]
    fn flagged_counter_sums_only_flagged_lines() {
        let counter = FlaggedItemCounter::new();
        let req = request(vec![line(2, 10.0, true), line(3, 5.0, false), line(1, 2.0, true)]);
        assert_eq!(counter.count_free(&req).get(), 3);
    }

    #[test]
    fn flagged_counter_with_no_flags_is_zero() {
        let counter = FlaggedItemCounter::new();
        let req = request(vec![line(4, 10.0, false)]);
        assert!(counter.count_free(&req).is_zero());
    }

    #[test]
    fn spend_threshold_frees_whole_order_at_threshold() {
        let counter = SpendThresholdCounter::new(Money::from_f64(50.0).unwrap());

        let below = request(vec![line(3, 10.0, false)]);
        assert!(counter.count_free(&below).is_zero());

        let at = request(vec![line(5, 10.0, false)]);
        assert_eq!(counter.count_free(&at).get(), 5);
    }

    #[test]
    fn counter_names() {
        assert_eq!(NoFreeUnits::new().name(), "NoFreeUnits");
        assert_eq!(FlaggedItemCounter::new().name(), "FlaggedItemCounter");
        assert_eq!(
            SpendThresholdCounter::new(Money::zero()).name(),
            "SpendThresholdCounter"
        );
    }
}
