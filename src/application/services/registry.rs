//! # Carrier Registry
//!
//! Fan-out of one request across every registered carrier.
//!
//! This module provides the [`QuoteProvider`] capability trait, the
//! [`CarrierRegistry`] that holds providers, and the [`RateCollection`]
//! a fan-out produces. One carrier failing or declining never hides the
//! quotes of the others; the collection keeps quotes and errors side by
//! side the way a checkout page shows available methods next to carrier
//! messages.

use crate::application::error::{QuoteError, QuoteResult};
use crate::domain::entities::{Quote, QuoteRequest};
use crate::domain::value_objects::{CarrierCode, MethodCode};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Capability trait for anything that can quote delivery for a request.
///
/// [`QuoteComposer`](super::composer::QuoteComposer) is the in-crate
/// implementation; hosts bridge external rate sources by implementing
/// this trait themselves.
pub trait QuoteProvider: Send + Sync + fmt::Debug {
    /// Returns the carrier code this provider quotes for.
    fn carrier(&self) -> &CarrierCode;

    /// Returns true if the provider currently participates in fan-out.
    fn is_active(&self) -> bool;

    /// Returns the delivery methods this provider can offer, as
    /// code-title pairs.
    fn allowed_methods(&self) -> Vec<(MethodCode, String)>;

    /// Quotes the request.
    ///
    /// `Ok(None)` means the provider does not participate for this
    /// request; it is not a failure.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] when the provider participates but
    /// cannot quote the request.
    fn quote(&self, request: &QuoteRequest) -> QuoteResult<Option<Quote>>;
}

/// Outcome of fanning one request out across the registry.
#[derive(Debug)]
pub struct RateCollection {
    quotes: Vec<Quote>,
    errors: Vec<QuoteError>,
    carriers_queried: usize,
    carriers_skipped: usize,
}

impl RateCollection {
    /// Returns the collected quotes in registration order.
    #[must_use]
    #[inline]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Returns the per-carrier errors in registration order.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[QuoteError] {
        &self.errors
    }

    /// Returns how many providers were asked.
    #[must_use]
    #[inline]
    pub const fn carriers_queried(&self) -> usize {
        self.carriers_queried
    }

    /// Returns how many providers declined to participate.
    #[must_use]
    #[inline]
    pub const fn carriers_skipped(&self) -> usize {
        self.carriers_skipped
    }

    /// Returns true if the fan-out produced neither quotes nor errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.errors.is_empty()
    }

    /// Returns the cheapest collected quote.
    ///
    /// Ties go to the earliest-registered carrier.
    #[must_use]
    pub fn cheapest(&self) -> Option<&Quote> {
        self.quotes.iter().min_by_key(|quote| quote.price())
    }
}

/// Registry of quote providers for fan-out.
///
/// Registration order is preserved and determines quote order in the
/// resulting collection. Multiple providers may share a carrier code;
/// a carrier offering pickup and locker delivery registers one provider
/// per method.
#[derive(Debug, Default)]
pub struct CarrierRegistry {
    providers: RwLock<Vec<Arc<dyn QuoteProvider>>>,
}

impl CarrierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider at the end of the fan-out order.
    pub fn register(&self, provider: Arc<dyn QuoteProvider>) {
        self.providers.write().push(provider);
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Returns true if no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    /// Returns a snapshot of the registered providers.
    #[must_use]
    pub fn providers(&self) -> Vec<Arc<dyn QuoteProvider>> {
        self.providers.read().clone()
    }

    /// Returns the delivery methods of every active provider, as
    /// carrier-method-title triples.
    #[must_use]
    pub fn allowed_methods(&self) -> Vec<(CarrierCode, MethodCode, String)> {
        self.providers
            .read()
            .iter()
            .filter(|provider| provider.is_active())
            .flat_map(|provider| {
                let carrier = provider.carrier().clone();
                provider
                    .allowed_methods()
                    .into_iter()
                    .map(move |(method, title)| (carrier.clone(), method, title))
            })
            .collect()
    }

    /// Fans the request out to every registered provider.
    ///
    /// Providers run in registration order; each settles independently
    /// into a quote, a skip, or an error.
    #[must_use]
    pub fn collect(&self, request: &QuoteRequest) -> RateCollection {
        let providers = self.providers();
        let carriers_queried = providers.len();

        let mut quotes = Vec::new();
        let mut errors = Vec::new();
        let mut carriers_skipped = 0;

        for provider in providers {
            match provider.quote(request) {
                Ok(Some(quote)) => quotes.push(quote),
                Ok(None) => carriers_skipped += 1,
                Err(error) => errors.push(error),
            }
        }

        tracing::debug!(
            request = %request.id(),
            queried = carriers_queried,
            quoted = quotes.len(),
            skipped = carriers_skipped,
            failed = errors.len(),
            "rate collection finished"
        );

        RateCollection {
            quotes,
            errors,
            carriers_queried,
            carriers_skipped,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::carrier_config::CarrierConfig;
    use crate::application::services::composer::QuoteComposer;
    use crate::application::services::eligibility::{AlwaysEligible, MinimumOrderValue};
    use crate::application::services::free_units::NoFreeUnits;
    use crate::application::services::price_calculator::FlatRateCalculator;
    use crate::application::services::pricing_request::StandardPriceRequestBuilder;
    use crate::domain::entities::quote_request::{CartLine, QuoteRequestBuilder};
    use crate::domain::value_objects::{Currency, Location, Money, Weight};
    use rust_decimal::Decimal;

    fn flat_provider(carrier: &str, method: &str, price: Decimal, active: bool) -> Arc<QuoteComposer> {
        let config = CarrierConfig::new(CarrierCode::new(carrier), MethodCode::new(method))
            .with_active(active)
            .with_base_price(price)
            .with_carrier_title(carrier.to_uppercase())
            .with_method_title(method.to_uppercase());

        Arc::new(QuoteComposer::new(
            config,
            Arc::new(AlwaysEligible::new()),
            Arc::new(NoFreeUnits::new()),
            Arc::new(StandardPriceRequestBuilder::new()),
            Arc::new(FlatRateCalculator::new()),
        ))
    }

    fn request() -> QuoteRequest {
        QuoteRequestBuilder::new(Location::new("US"), Location::new("US"), Currency::Usd)
            .line(CartLine::new(
                "SKU",
                1,
                Money::from_f64(10.0).unwrap(),
                Weight::from_f64(1.0).unwrap(),
            ))
            .try_build()
            .unwrap()
    }

    #[test]
    fn collects_quotes_from_all_active_carriers() {
        let registry = CarrierRegistry::new();
        registry.register(flat_provider("in_store", "pickup", Decimal::new(500, 2), true));
        registry.register(flat_provider("flatrate", "standard", Decimal::new(300, 2), true));

        let collection = registry.collect(&request());

        assert_eq!(collection.carriers_queried(), 2);
        assert_eq!(collection.quotes().len(), 2);
        assert!(collection.errors().is_empty());
        assert_eq!(collection.carriers_skipped(), 0);
    }

    #[test]
    fn cheapest_picks_the_lowest_price() {
        let registry = CarrierRegistry::new();
        registry.register(flat_provider("in_store", "pickup", Decimal::new(500, 2), true));
        registry.register(flat_provider("flatrate", "standard", Decimal::new(300, 2), true));

        let collection = registry.collect(&request());
        let cheapest = collection.cheapest().unwrap();
        assert_eq!(cheapest.carrier().as_str(), "flatrate");
        assert_eq!(cheapest.price(), Money::from_f64(3.0).unwrap());
    }

    #[test]
    fn inactive_carriers_are_counted_as_skipped() {
        let registry = CarrierRegistry::new();
        registry.register(flat_provider("in_store", "pickup", Decimal::new(500, 2), false));
        registry.register(flat_provider("flatrate", "standard", Decimal::new(300, 2), true));

        let collection = registry.collect(&request());

        assert_eq!(collection.quotes().len(), 1);
        assert_eq!(collection.carriers_skipped(), 1);
        assert!(collection.errors().is_empty());
    }

    #[test]
    fn one_failing_carrier_does_not_hide_the_others() {
        let strict = Arc::new(QuoteComposer::new(
            CarrierConfig::new(CarrierCode::new("premium"), MethodCode::new("express"))
                .with_active(true)
                .with_error_message("Express requires a larger order."),
            Arc::new(MinimumOrderValue::new(Money::from_f64(100.0).unwrap())),
            Arc::new(NoFreeUnits::new()),
            Arc::new(StandardPriceRequestBuilder::new()),
            Arc::new(FlatRateCalculator::new()),
        ));

        let registry = CarrierRegistry::new();
        registry.register(strict);
        registry.register(flat_provider("in_store", "pickup", Decimal::new(500, 2), true));

        let collection = registry.collect(&request());

        assert_eq!(collection.quotes().len(), 1);
        assert_eq!(collection.errors().len(), 1);
        assert_eq!(
            collection.errors().first().unwrap().to_string(),
            "Express requires a larger order."
        );
    }

    #[test]
    fn empty_registry_collects_nothing() {
        let registry = CarrierRegistry::new();
        assert!(registry.is_empty());

        let collection = registry.collect(&request());
        assert!(collection.is_empty());
        assert_eq!(collection.carriers_queried(), 0);
        assert!(collection.cheapest().is_none());
    }

    #[test]
    fn allowed_methods_lists_only_active_carriers() {
        let registry = CarrierRegistry::new();
        registry.register(flat_provider("in_store", "pickup", Decimal::ZERO, true));
        registry.register(flat_provider("flatrate", "standard", Decimal::ZERO, false));

        let methods = registry.allowed_methods();
        assert_eq!(methods.len(), 1);
        let (carrier, method, title) = methods.first().unwrap();
        assert_eq!(carrier.as_str(), "in_store");
        assert_eq!(method.as_str(), "pickup");
        assert_eq!(title, "PICKUP");
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = CarrierRegistry::new();
        registry.register(flat_provider("a", "m", Decimal::ONE, true));
        registry.register(flat_provider("b", "m", Decimal::ONE, true));
        assert_eq!(registry.len(), 2);

        let collection = registry.collect(&request());
        let carriers: Vec<&str> = collection
            .quotes()
            .iter()
            .map(|quote| quote.carrier().as_str())
            .collect();
        assert_eq!(carriers, vec!["a", "b"]);

        // Tie on price resolves to the earlier registration.
        assert_eq!(collection.cheapest().unwrap().carrier().as_str(), "a");
    }
}
