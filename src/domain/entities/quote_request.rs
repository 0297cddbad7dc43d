//! # Quote Request Entity
//!
//! The immutable input to a quote composition.
//!
//! A [`QuoteRequest`] carries the cart lines, origin and destination, and
//! optional carrier/method restrictions for one shipping estimate. It is
//! assembled through [`QuoteRequestBuilder`], which derives the totals
//! (unit count, cart value, weight) from the lines with checked
//! arithmetic so every downstream strategy reads consistent numbers.
//!
//! # Examples
//!
//! ```
//! use shipquote::domain::entities::quote_request::{CartLine, QuoteRequestBuilder};
//! use shipquote::domain::value_objects::{Currency, Location, Money, Weight};
//!
//! let request = QuoteRequestBuilder::new(
//!     Location::new("US").with_region("CA"),
//!     Location::new("US").with_region("NY"),
//!     Currency::Usd,
//! )
//! .line(CartLine::new(
//!     "WIDGET-1",
//!     2,
//!     Money::from_f64(25.0).unwrap(),
//!     Weight::from_f64(0.5).unwrap(),
//! ))
//! .try_build()
//! .unwrap();
//!
//! assert_eq!(request.total_units().get(), 2);
//! assert_eq!(request.cart_value(), Money::from_f64(50.0).unwrap());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    CarrierCode, Currency, Location, MethodCode, Money, RequestId, UnitCount, Weight,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One purchasable line on a quote request.
///
/// A line is `quantity` units of a single SKU. The `free_shipping` flag
/// marks lines a promotion has already granted free delivery; promotion
/// counters read it when deciding how many units ship free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stock-keeping unit identifier.
    sku: String,
    /// Number of units of this SKU.
    quantity: u32,
    /// Price of a single unit.
    unit_value: Money,
    /// Weight of a single unit.
    unit_weight: Weight,
    /// Whether a promotion grants this line free delivery.
    free_shipping: bool,
}

impl CartLine {
    /// Creates a new cart line.
    #[must_use]
    pub fn new(sku: impl Into<String>, quantity: u32, unit_value: Money, unit_weight: Weight) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            unit_value,
            unit_weight,
            free_shipping: false,
        }
    }

    /// Marks the line as granted free delivery by a promotion.
    #[must_use]
    pub fn with_free_shipping(mut self, free_shipping: bool) -> Self {
        self.free_shipping = free_shipping;
        self
    }

    /// Returns the SKU.
    #[must_use]
    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the unit quantity.
    #[must_use]
    #[inline]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the price of a single unit.
    #[must_use]
    #[inline]
    pub const fn unit_value(&self) -> Money {
        self.unit_value
    }

    /// Returns the weight of a single unit.
    #[must_use]
    #[inline]
    pub const fn unit_weight(&self) -> Weight {
        self.unit_weight
    }

    /// Returns true if a promotion grants this line free delivery.
    #[must_use]
    #[inline]
    pub const fn free_shipping(&self) -> bool {
        self.free_shipping
    }

    /// Total value of the line (unit price times quantity).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if the product is not representable.
    pub fn line_value(&self) -> DomainResult<Money> {
        self.unit_value.safe_mul(Decimal::from(self.quantity))
    }

    /// Total weight of the line (unit weight times quantity).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if the product is not representable.
    pub fn line_weight(&self) -> DomainResult<Weight> {
        self.unit_weight.safe_mul_units(self.quantity)
    }
}

/// Immutable input to a quote composition.
///
/// Once built, a request is never mutated; every strategy in the pipeline
/// reads it by shared reference. Totals are derived from the lines at
/// build time, so `total_units`, `cart_value`, and `total_weight` always
/// agree with the line contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Correlation identifier for this request.
    id: RequestId,
    /// Where the shipment departs from.
    origin: Location,
    /// Where the shipment is going.
    destination: Location,
    /// Currency of all amounts on this request.
    currency: Currency,
    /// The purchasable lines being shipped.
    lines: Vec<CartLine>,
    /// Restricts composition to this carrier, if set.
    carrier_limit: Option<CarrierCode>,
    /// Restricts composition to this method, if set.
    method_limit: Option<MethodCode>,
    /// Total units across all lines.
    total_units: UnitCount,
    /// Total value across all lines.
    cart_value: Money,
    /// Total weight across all lines.
    total_weight: Weight,
}

impl QuoteRequest {
    /// Returns the correlation identifier.
    #[must_use]
    #[inline]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the shipment origin.
    #[must_use]
    #[inline]
    pub const fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the shipment destination.
    #[must_use]
    #[inline]
    pub const fn destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the currency of all amounts on this request.
    #[must_use]
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the cart lines.
    #[must_use]
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the carrier restriction, if any.
    #[must_use]
    #[inline]
    pub const fn carrier_limit(&self) -> Option<&CarrierCode> {
        self.carrier_limit.as_ref()
    }

    /// Returns the method restriction, if any.
    #[must_use]
    #[inline]
    pub const fn method_limit(&self) -> Option<&MethodCode> {
        self.method_limit.as_ref()
    }

    /// Returns the total number of units across all lines.
    #[must_use]
    #[inline]
    pub const fn total_units(&self) -> UnitCount {
        self.total_units
    }

    /// Returns the total value across all lines.
    #[must_use]
    #[inline]
    pub const fn cart_value(&self) -> Money {
        self.cart_value
    }

    /// Returns the total weight across all lines.
    #[must_use]
    #[inline]
    pub const fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns true if this request permits quoting by the given
    /// carrier-method pair.
    ///
    /// A request with no restrictions addresses every carrier; a
    /// restriction filters by exact code match.
    #[must_use]
    pub fn addresses(&self, carrier: &CarrierCode, method: &MethodCode) -> bool {
        if self.carrier_limit.as_ref().is_some_and(|limit| limit != carrier) {
            return false;
        }
        if self.method_limit.as_ref().is_some_and(|limit| limit != method) {
            return false;
        }
        true
    }
}

impl fmt::Display for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request {} [{} -> {}] {} units, {} {}",
            self.id, self.origin, self.destination, self.total_units, self.cart_value, self.currency
        )
    }
}

/// Builder for [`QuoteRequest`].
///
/// Collects lines and restrictions, then derives the request totals in
/// [`QuoteRequestBuilder::try_build`].
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
    id: Option<RequestId>,
    origin: Location,
    destination: Location,
    currency: Currency,
    lines: Vec<CartLine>,
    carrier_limit: Option<CarrierCode>,
    method_limit: Option<MethodCode>,
}

impl QuoteRequestBuilder {
    /// Starts a builder for a shipment between two locations.
    #[must_use]
    pub fn new(origin: Location, destination: Location, currency: Currency) -> Self {
        Self {
            id: None,
            origin,
            destination,
            currency,
            lines: Vec::new(),
            carrier_limit: None,
            method_limit: None,
        }
    }

    /// Sets an explicit correlation identifier.
    ///
    /// Without this, `try_build` generates a fresh one.
    #[must_use]
    pub fn request_id(mut self, id: RequestId) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds one cart line.
    #[must_use]
    pub fn line(mut self, line: CartLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Adds several cart lines.
    #[must_use]
    pub fn lines(mut self, lines: impl IntoIterator<Item = CartLine>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Restricts composition to one carrier.
    #[must_use]
    pub fn limit_carrier(mut self, carrier: CarrierCode) -> Self {
        self.carrier_limit = Some(carrier);
        self
    }

    /// Restricts composition to one delivery method.
    #[must_use]
    pub fn limit_method(mut self, method: MethodCode) -> Self {
        self.method_limit = Some(method);
        self
    }

    /// Builds the request, deriving totals from the lines.
    ///
    /// An empty line list is permitted; validators decide whether an
    /// empty cart is eligible for any given carrier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if any derived total is not
    /// representable.
    pub fn try_build(self) -> DomainResult<QuoteRequest> {
        let mut unit_sum: u64 = 0;
        let mut cart_value = Money::zero();
        let mut total_weight = Weight::zero();

        for line in &self.lines {
            unit_sum += u64::from(line.quantity());
            cart_value = cart_value.safe_add(line.line_value()?)?;
            total_weight = total_weight.safe_add(line.line_weight()?)?;
        }

        let total_units = u32::try_from(unit_sum)
            .map(UnitCount::new)
            .map_err(|_| DomainError::Overflow("total units"))?;

        Ok(QuoteRequest {
            id: self.id.unwrap_or_else(RequestId::new_v4),
            origin: self.origin,
            destination: self.destination,
            currency: self.currency,
            lines: self.lines,
            carrier_limit: self.carrier_limit,
            method_limit: self.method_limit,
            total_units,
            cart_value,
            total_weight,
        })
    }
}
