//! Property-based tests for quote composition.
//!
//! These tests verify that:
//! - Free units are clamped to the request total before pricing
//! - Composed prices pass the calculator output through unchanged
//! - Composition is a pure function of the request
//! - Inactive carriers never quote, whatever the rest of the config says

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use shipquote::application::services::carrier_config::CarrierConfig;
use shipquote::application::services::composer::QuoteComposer;
use shipquote::application::services::eligibility::AlwaysEligible;
use shipquote::application::services::free_units::{FreeUnitCounter, NoFreeUnits};
use shipquote::application::services::price_calculator::{
    FlatRateCalculator, PerUnitRateCalculator,
};
use shipquote::application::services::pricing_request::StandardPriceRequestBuilder;
use shipquote::application::services::registry::CarrierRegistry;
use shipquote::domain::entities::quote_request::{CartLine, QuoteRequest, QuoteRequestBuilder};
use shipquote::domain::value_objects::{
    CarrierCode, Currency, FreeUnits, Location, MethodCode, Money, Weight,
};
use std::sync::Arc;

/// Counter that reports whatever it was told to, clamping left to the
/// pipeline.
#[derive(Debug)]
struct FixedCounter(u32);

impl FreeUnitCounter for FixedCounter {
    fn count_free(&self, _request: &QuoteRequest) -> FreeUnits {
        FreeUnits::new(self.0)
    }

    fn name(&self) -> &'static str {
        "Fixed"
    }
}

fn arb_line() -> impl Strategy<Value = CartLine> {
    (1..=5u32, 1..=20_000i64, 1..=5_000i64, any::<bool>()).prop_map(
        |(quantity, value_cents, weight_cents, free)| {
            CartLine::new(
                "SKU",
                quantity,
                Money::new(Decimal::new(value_cents, 2)).unwrap(),
                Weight::new(Decimal::new(weight_cents, 2)).unwrap(),
            )
            .with_free_shipping(free)
        },
    )
}

fn arb_request() -> impl Strategy<Value = QuoteRequest> {
    prop::collection::vec(arb_line(), 1..6).prop_map(|lines| {
        QuoteRequestBuilder::new(Location::new("US"), Location::new("US"), Currency::Usd)
            .lines(lines)
            .try_build()
            .unwrap()
    })
}

fn composer(config: CarrierConfig, counter: Arc<dyn FreeUnitCounter>) -> QuoteComposer {
    QuoteComposer::new(
        config,
        Arc::new(AlwaysEligible::new()),
        counter,
        Arc::new(StandardPriceRequestBuilder::new()),
        Arc::new(PerUnitRateCalculator::new()),
    )
}

fn active_config(carrier: &str, price_cents: i64) -> CarrierConfig {
    CarrierConfig::new(CarrierCode::new(carrier), MethodCode::new("standard"))
        .with_active(true)
        .with_base_price(Decimal::new(price_cents, 2))
}

proptest! {
    /// The billed unit count is the request total minus the clamped free
    /// count, whatever the counter reports.
    #[test]
    fn free_units_are_clamped_before_pricing(
        request in arb_request(),
        reported in 0..100u32,
    ) {
        let base = Decimal::new(500, 2);
        let composer = composer(
            active_config("in_store", 500),
            Arc::new(FixedCounter(reported)),
        );

        let quote = composer.compose(&request).unwrap().unwrap();

        let total = request.total_units().get();
        let chargeable = total - reported.min(total);
        let expected = Money::new(base * Decimal::from(chargeable)).unwrap();
        prop_assert_eq!(quote.price(), expected);
    }

    /// A flat-rate quote always carries the configured base price.
    #[test]
    fn flat_rate_passes_base_price_through(
        request in arb_request(),
        price_cents in 0..100_000i64,
    ) {
        let composer = QuoteComposer::new(
            active_config("flatrate", price_cents),
            Arc::new(AlwaysEligible::new()),
            Arc::new(NoFreeUnits::new()),
            Arc::new(StandardPriceRequestBuilder::new()),
            Arc::new(FlatRateCalculator::new()),
        );

        let quote = composer.compose(&request).unwrap().unwrap();
        prop_assert_eq!(quote.price().get(), Decimal::new(price_cents, 2));
        prop_assert!(!quote.price().get().is_sign_negative());
    }

    /// Composing the same request twice gives the same outcome.
    #[test]
    fn composition_is_a_pure_function_of_the_request(
        request in arb_request(),
        reported in 0..100u32,
    ) {
        let composer = composer(
            active_config("in_store", 500),
            Arc::new(FixedCounter(reported)),
        );

        let first = composer.compose(&request).unwrap();
        let second = composer.compose(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    /// An inactive carrier stays silent even with a broken price.
    #[test]
    fn inactive_carrier_never_quotes(
        request in arb_request(),
        price_cents in -100_000..100_000i64,
    ) {
        let config = active_config("in_store", price_cents).with_active(false);
        let composer = composer(config, Arc::new(NoFreeUnits::new()));

        prop_assert_eq!(composer.compose(&request).unwrap(), None);
    }

    /// The cheapest pick is never undercut by another collected quote.
    #[test]
    fn cheapest_is_a_lower_bound(
        request in arb_request(),
        prices in prop::collection::vec(0..10_000i64, 1..6),
    ) {
        let registry = CarrierRegistry::new();
        for (index, cents) in prices.iter().enumerate() {
            let config = active_config(&format!("carrier_{index}"), *cents);
            let provider = QuoteComposer::new(
                config,
                Arc::new(AlwaysEligible::new()),
                Arc::new(NoFreeUnits::new()),
                Arc::new(StandardPriceRequestBuilder::new()),
                Arc::new(FlatRateCalculator::new()),
            );
            registry.register(Arc::new(provider));
        }

        let rates = registry.collect(&request);
        prop_assert_eq!(rates.quotes().len(), prices.len());

        let cheapest = rates.cheapest().unwrap().price();
        for quote in rates.quotes() {
            prop_assert!(cheapest <= quote.price());
        }
    }
}
