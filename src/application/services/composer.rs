//! # Quote Composition Engine
//!
//! Orchestrates one carrier's path from request to quote.
//!
//! This module provides the [`QuoteComposer`], which runs the fixed
//! pipeline — activation gate, eligibility validation, promotion
//! counting, pricing-input construction, price calculation — and
//! assembles the resulting [`Quote`]. Each stage is a pluggable strategy;
//! the composer owns only the ordering and the outcome rules.
//!
//! # Outcomes
//!
//! [`QuoteComposer::compose`] distinguishes three outcomes:
//!
//! - `Ok(Some(quote))`: the carrier offers the delivery at a price
//! - `Ok(None)`: the carrier does not participate (inactive, or the
//!   request is limited to another carrier); not an error
//! - `Err(quote_error)`: the carrier participates but the request fails
//!   its rules or its configuration cannot produce a price
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipquote::application::services::carrier_config::CarrierConfig;
//! use shipquote::application::services::composer::QuoteComposer;
//! use shipquote::application::services::eligibility::AlwaysEligible;
//! use shipquote::application::services::free_units::NoFreeUnits;
//! use shipquote::application::services::price_calculator::FlatRateCalculator;
//! use shipquote::application::services::pricing_request::StandardPriceRequestBuilder;
//! use shipquote::domain::entities::quote_request::{CartLine, QuoteRequestBuilder};
//! use shipquote::domain::value_objects::{
//!     CarrierCode, Currency, Location, MethodCode, Money, Weight,
//! };
//! use std::sync::Arc;
//!
//! let config = CarrierConfig::new(CarrierCode::new("in_store"), MethodCode::new("pickup"))
//!     .with_active(true)
//!     .with_base_price(Decimal::new(500, 2))
//!     .with_carrier_title("In-Store Pickup")
//!     .with_method_title("Store Pickup");
//!
//! let composer = QuoteComposer::new(
//!     config,
//!     Arc::new(AlwaysEligible::new()),
//!     Arc::new(NoFreeUnits::new()),
//!     Arc::new(StandardPriceRequestBuilder::new()),
//!     Arc::new(FlatRateCalculator::new()),
//! );
//!
//! let request = QuoteRequestBuilder::new(
//!     Location::new("US"),
//!     Location::new("US"),
//!     Currency::Usd,
//! )
//! .line(CartLine::new(
//!     "WIDGET-1",
//!     1,
//!     Money::from_f64(30.0).unwrap(),
//!     Weight::from_f64(1.0).unwrap(),
//! ))
//! .try_build()
//! .unwrap();
//!
//! let quote = composer.compose(&request).unwrap().unwrap();
//! assert_eq!(quote.price(), Money::from_f64(5.0).unwrap());
//! ```

use crate::application::error::{QuoteError, QuoteResult};
use crate::application::services::carrier_config::CarrierConfig;
use crate::application::services::eligibility::EligibilityValidator;
use crate::application::services::free_units::FreeUnitCounter;
use crate::application::services::price_calculator::PriceCalculator;
use crate::application::services::pricing_request::PriceRequestBuilder;
use crate::application::services::registry::QuoteProvider;
use crate::domain::entities::{Quote, QuoteRequest};
use crate::domain::value_objects::{CarrierCode, MethodCode};
use std::sync::Arc;

/// Engine composing quotes for one carrier-method pair.
///
/// Holds the configuration snapshot and the four strategies; both stay
/// fixed for the composer's lifetime, so a composition is a pure
/// function of the request.
#[derive(Debug)]
pub struct QuoteComposer {
    config: CarrierConfig,
    validator: Arc<dyn EligibilityValidator>,
    free_units: Arc<dyn FreeUnitCounter>,
    pricing_builder: Arc<dyn PriceRequestBuilder>,
    calculator: Arc<dyn PriceCalculator>,
}

impl QuoteComposer {
    /// Creates a new composer from a configuration and its strategies.
    #[must_use]
    pub fn new(
        config: CarrierConfig,
        validator: Arc<dyn EligibilityValidator>,
        free_units: Arc<dyn FreeUnitCounter>,
        pricing_builder: Arc<dyn PriceRequestBuilder>,
        calculator: Arc<dyn PriceCalculator>,
    ) -> Self {
        Self {
            config,
            validator,
            free_units,
            pricing_builder,
            calculator,
        }
    }

    /// Composes a quote for the request.
    ///
    /// Runs the pipeline stages in order and stops at the first stage
    /// that settles the outcome. See the module docs for the meaning of
    /// the three outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Ineligible`] when validation fails,
    /// [`QuoteError::InvalidConfiguration`] when the configuration
    /// cannot produce a pricing input, and [`QuoteError::Calculation`]
    /// when pricing fails.
    pub fn compose(&self, request: &QuoteRequest) -> QuoteResult<Option<Quote>> {
        if !self.config.is_active() {
            tracing::debug!(
                carrier = %self.config.carrier(),
                request = %request.id(),
                "carrier inactive, not quoting"
            );
            return Ok(None);
        }

        if !request.addresses(self.config.carrier(), self.config.method()) {
            tracing::debug!(
                carrier = %self.config.carrier(),
                request = %request.id(),
                "request limited to another carrier, not quoting"
            );
            return Ok(None);
        }

        let validation = self.validator.validate(request);
        if !validation.is_valid() {
            tracing::debug!(
                carrier = %self.config.carrier(),
                request = %request.id(),
                validator = self.validator.name(),
                reason = validation.reason(),
                "request ineligible"
            );
            return Err(match validation.reason() {
                Some(reason) => {
                    QuoteError::ineligible_with_reason(self.config.error_message(), reason)
                }
                None => QuoteError::ineligible(self.config.error_message()),
            });
        }

        let free_units = self
            .free_units
            .count_free(request)
            .clamp_to(request.total_units());

        let pricing = self
            .pricing_builder
            .build(request, &self.config, free_units)
            .inspect_err(|e| {
                tracing::warn!(
                    carrier = %self.config.carrier(),
                    request = %request.id(),
                    error = %e,
                    "pricing input rejected"
                );
            })?;

        let price = self.calculator.calculate(&pricing).inspect_err(|e| {
            tracing::warn!(
                carrier = %self.config.carrier(),
                request = %request.id(),
                calculator = self.calculator.name(),
                error = %e,
                "price calculation failed"
            );
        })?;

        Ok(Some(Quote::new(
            self.config.carrier().clone(),
            self.config.carrier_title(),
            self.config.method().clone(),
            self.config.method_title(),
            price,
            request.currency(),
        )))
    }

    /// Returns the configuration snapshot.
    #[must_use]
    pub const fn config(&self) -> &CarrierConfig {
        &self.config
    }

    /// Returns the eligibility validator name.
    #[must_use]
    pub fn validator_name(&self) -> &'static str {
        self.validator.name()
    }

    /// Returns the price calculator name.
    #[must_use]
    pub fn calculator_name(&self) -> &'static str {
        self.calculator.name()
    }
}

impl QuoteProvider for QuoteComposer {
    fn carrier(&self) -> &CarrierCode {
        self.config.carrier()
    }

    fn is_active(&self) -> bool {
        self.config.is_active()
    }

    fn allowed_methods(&self) -> Vec<(MethodCode, String)> {
        vec![(
            self.config.method().clone(),
            self.config.method_title().to_string(),
        )]
    }

    fn quote(&self, request: &QuoteRequest) -> QuoteResult<Option<Quote>> {
        self.compose(request)
    }
}
