//! # Carrier Configuration
//!
//! Per-carrier settings snapshot read by quote composition.
//!
//! A [`CarrierConfig`] is the store-level configuration for one
//! carrier-method pair: whether it is enabled, its raw base price, the
//! titles shown at checkout, and the storefront message used when the
//! carrier declines a request. The serde field names match the
//! conventional storefront settings keys (`price`, `title`, `name`,
//! `specificerrmsg`), so existing settings files deserialize directly.
//!
//! The base price is kept as a raw [`Decimal`] rather than a validated
//! amount: a negative value in settings is a real misconfiguration that
//! must surface as a composition error, not be rejected at load time.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipquote::application::services::carrier_config::CarrierConfig;
//! use shipquote::domain::value_objects::{CarrierCode, MethodCode};
//!
//! let config = CarrierConfig::new(CarrierCode::new("in_store"), MethodCode::new("pickup"))
//!     .with_active(true)
//!     .with_base_price(Decimal::new(500, 2))
//!     .with_carrier_title("In-Store Pickup")
//!     .with_method_title("Store Pickup");
//!
//! assert!(config.is_active());
//! assert_eq!(config.method_title(), "Store Pickup");
//! ```

use crate::domain::value_objects::{CarrierCode, MethodCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storefront message used when no specific one is configured.
pub const DEFAULT_ERROR_MESSAGE: &str =
    "This delivery method is not available for your order.";

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_string()
}

/// Configuration snapshot for one carrier-method pair.
///
/// Immutable during a composition; hosts that support live settings
/// changes swap in a new snapshot between compositions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Machine-readable carrier code.
    carrier: CarrierCode,
    /// Machine-readable method code.
    method: MethodCode,
    /// Whether the carrier participates in composition at all.
    #[serde(default)]
    active: bool,
    /// Raw configured base price; validated during composition.
    #[serde(rename = "price", default)]
    base_price: Decimal,
    /// Human-readable carrier title.
    #[serde(rename = "title", default)]
    carrier_title: String,
    /// Human-readable method title.
    #[serde(rename = "name", default)]
    method_title: String,
    /// Storefront message for declined requests.
    #[serde(rename = "specificerrmsg", default = "default_error_message")]
    error_message: String,
}

impl CarrierConfig {
    /// Creates an inactive configuration with defaults for one
    /// carrier-method pair.
    #[must_use]
    pub fn new(carrier: CarrierCode, method: MethodCode) -> Self {
        Self {
            carrier,
            method,
            active: false,
            base_price: Decimal::ZERO,
            carrier_title: String::new(),
            method_title: String::new(),
            error_message: default_error_message(),
        }
    }

    /// Enables or disables the carrier.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the raw base price.
    #[must_use]
    pub fn with_base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = base_price;
        self
    }

    /// Sets the human-readable carrier title.
    #[must_use]
    pub fn with_carrier_title(mut self, title: impl Into<String>) -> Self {
        self.carrier_title = title.into();
        self
    }

    /// Sets the human-readable method title.
    #[must_use]
    pub fn with_method_title(mut self, title: impl Into<String>) -> Self {
        self.method_title = title.into();
        self
    }

    /// Sets the storefront message for declined requests.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Returns the carrier code.
    #[must_use]
    #[inline]
    pub const fn carrier(&self) -> &CarrierCode {
        &self.carrier
    }

    /// Returns the method code.
    #[must_use]
    #[inline]
    pub const fn method(&self) -> &MethodCode {
        &self.method
    }

    /// Returns true if the carrier participates in composition.
    #[must_use]
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the raw configured base price.
    #[must_use]
    #[inline]
    pub const fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Returns the human-readable carrier title.
    #[must_use]
    #[inline]
    pub fn carrier_title(&self) -> &str {
        &self.carrier_title
    }

    /// Returns the human-readable method title.
    #[must_use]
    #[inline]
    pub fn method_title(&self) -> &str {
        &self.method_title
    }

    /// Returns the storefront message for declined requests.
    #[must_use]
    #[inline]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
