//! # Pricing Request Building
//!
//! Strategies for normalizing a request into a pricing input.
//!
//! This module provides the [`PriceRequestBuilder`] trait and the
//! [`StandardPriceRequestBuilder`], which validates the configured base
//! price and projects the quote request into a [`PricingRequest`] for
//! the calculator. This is also the stage where bad carrier settings
//! (such as a negative base price) are turned into composition errors.

use crate::application::error::{QuoteError, QuoteResult};
use crate::application::services::carrier_config::CarrierConfig;
use crate::domain::entities::{PricingRequest, QuoteRequest};
use crate::domain::value_objects::{FreeUnits, Money};
use std::fmt;

/// Trait for building the normalized pricing input.
///
/// Implementations receive the validated request, the carrier's
/// configuration snapshot, and the clamped free-unit count, and produce
/// the [`PricingRequest`] handed to the price calculator.
pub trait PriceRequestBuilder: Send + Sync + fmt::Debug {
    /// Builds the pricing input for one composition.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if the configuration
    /// cannot yield a usable pricing input.
    fn build(
        &self,
        request: &QuoteRequest,
        config: &CarrierConfig,
        free_units: FreeUnits,
    ) -> QuoteResult<PricingRequest>;

    /// Returns the name of this builder.
    fn name(&self) -> &'static str;
}

/// Builder that projects the request totals straight into pricing input.
///
/// Validates that the configured base price is a representable,
/// non-negative amount and carries the request totals through unchanged.
#[derive(Debug, Clone, Default)]
pub struct StandardPriceRequestBuilder;

impl StandardPriceRequestBuilder {
    /// Creates a new standard builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PriceRequestBuilder for StandardPriceRequestBuilder {
    fn build(
        &self,
        request: &QuoteRequest,
        config: &CarrierConfig,
        free_units: FreeUnits,
    ) -> QuoteResult<PricingRequest> {
        let base_price = Money::new(config.base_price()).map_err(|_| {
            QuoteError::invalid_configuration(format!(
                "negative base price {} for {}_{}",
                config.base_price(),
                config.carrier(),
                config.method()
            ))
        })?;

        Ok(PricingRequest::new(
            config.carrier().clone(),
            config.method().clone(),
            request.currency(),
            base_price,
            request.total_units(),
            free_units,
            request.cart_value(),
            request.total_weight(),
            request.destination().clone(),
        ))
    }

    fn name(&self) -> &'static str {
        "StandardPriceRequestBuilder"
    }
}
