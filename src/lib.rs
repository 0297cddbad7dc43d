//! # shipquote
//!
//! Embeddable shipping quote composition engine.
//!
//! `shipquote` turns a cart-level shipping request into priced delivery
//! offers by running a fixed pipeline of pluggable strategies per
//! carrier: eligibility validation, promotion counting, pricing-input
//! construction, and price calculation. The crate is transport-free;
//! hosts own all I/O and hand the engine plain values.
//!
//! ## Architecture
//!
//! The crate follows a two-layer design:
//!
//! - [`domain`]: validated value objects (money, weights, codes) and the
//!   request/pricing/quote entities. No I/O, no ambient state.
//! - [`application`]: the [`QuoteComposer`](application::services::QuoteComposer)
//!   pipeline, the four strategy traits with their built-in
//!   implementations, and the [`CarrierRegistry`](application::services::CarrierRegistry)
//!   for fanning a request out across carriers.
//!
//! ## Outcomes
//!
//! Composing a quote has three outcomes, kept distinct in the types: a
//! priced [`Quote`](domain::entities::Quote), a quiet decline
//! (`Ok(None)`, for inactive carriers), or a
//! [`QuoteError`](application::error::QuoteError) classified by whether
//! shoppers or operators should see it.
//!
//! ## Example
//!
//! An in-store pickup carrier charging 5.00 per unit, with two of the
//! three units covered by a cart promotion:
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipquote::application::services::carrier_config::CarrierConfig;
//! use shipquote::application::services::composer::QuoteComposer;
//! use shipquote::application::services::eligibility::AlwaysEligible;
//! use shipquote::application::services::free_units::FlaggedItemCounter;
//! use shipquote::application::services::price_calculator::PerUnitRateCalculator;
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
//!     Arc::new(FlaggedItemCounter::new()),
//!     Arc::new(StandardPriceRequestBuilder::new()),
//!     Arc::new(PerUnitRateCalculator::new()),
//! );
//!
//! let request = QuoteRequestBuilder::new(
//!     Location::new("US").with_region("CA"),
//!     Location::new("US").with_region("CA").with_postcode("94103"),
//!     Currency::Usd,
//! )
//! .line(
//!     CartLine::new("MUG-BLUE", 2, Money::from_f64(12.0).unwrap(), Weight::from_f64(0.4).unwrap())
//!         .with_free_shipping(true),
//! )
//! .line(CartLine::new("MUG-RED", 1, Money::from_f64(12.0).unwrap(), Weight::from_f64(0.4).unwrap()))
//! .try_build()
//! .unwrap();
//!
//! let quote = composer.compose(&request).unwrap().unwrap();
//! assert_eq!(quote.price(), Money::from_f64(5.0).unwrap());
//! assert_eq!(quote.delivery_method().to_string(), "in_store_pickup");
//! ```

pub mod application;
pub mod domain;
