//! # Application Services
//!
//! The composition pipeline and its pluggable strategies.
//!
//! This module provides the quoting machinery:
//! - [`QuoteComposer`]: runs one carrier's request-to-quote pipeline
//! - [`CarrierRegistry`]: fans a request out across every carrier
//! - [`EligibilityValidator`], [`FreeUnitCounter`], [`PriceRequestBuilder`],
//!   [`PriceCalculator`]: the four strategy seams the pipeline is built from

pub mod carrier_config;
pub mod composer;
pub mod eligibility;
pub mod free_units;
pub mod price_calculator;
pub mod pricing_request;
pub mod registry;

pub use carrier_config::{CarrierConfig, DEFAULT_ERROR_MESSAGE};
pub use composer::QuoteComposer;
pub use eligibility::{
    AlwaysEligible, CompositeValidator, DestinationAllowlist, EligibilityValidator,
    MinimumOrderValue, ValidationResult,
};
pub use free_units::{FlaggedItemCounter, FreeUnitCounter, NoFreeUnits, SpendThresholdCounter};
pub use price_calculator::{
    FlatRateCalculator, FreeThresholdCalculator, PerUnitRateCalculator, PriceCalculator,
    TableRateCalculator, WeightBracket,
};
pub use pricing_request::{PriceRequestBuilder, StandardPriceRequestBuilder};
pub use registry::{CarrierRegistry, QuoteProvider, RateCollection};
