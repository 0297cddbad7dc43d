//! # Carrier and Method Codes
//!
//! Machine-readable identifiers for carriers and their delivery methods.
//!
//! A carrier code names a shipping provider (`"in_store"`, `"flatrate"`);
//! a method code names one way that provider delivers (`"pickup"`,
//! `"express"`). The pair joined with an underscore forms the composite
//! [`DeliveryMethod`] identifier that checkout surfaces use to select a
//! quoted method.
//!
//! # Examples
//!
//! ```
//! use shipquote::domain::value_objects::{CarrierCode, DeliveryMethod, MethodCode};
//!
//! let delivery = DeliveryMethod::new(CarrierCode::new("in_store"), MethodCode::new("pickup"));
//! assert_eq!(delivery.to_string(), "in_store_pickup");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable code identifying a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierCode(String);

impl CarrierCode {
    /// Creates a new carrier code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Machine-readable code identifying a delivery method within a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodCode(String);

impl MethodCode {
    /// Creates a new method code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite identifier for a carrier-method pair.
///
/// Rendered as `{carrier}_{method}`, the form checkout stores persist on
/// an order to record which quoted method was selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryMethod {
    carrier: CarrierCode,
    method: MethodCode,
}

impl DeliveryMethod {
    /// Creates a new composite identifier.
    #[must_use]
    pub fn new(carrier: CarrierCode, method: MethodCode) -> Self {
        Self { carrier, method }
    }

    /// Returns the carrier component.
    #[must_use]
    #[inline]
    pub const fn carrier(&self) -> &CarrierCode {
        &self.carrier
    }

    /// Returns the method component.
    #[must_use]
    #[inline]
    pub const fn method(&self) -> &MethodCode {
        &self.method
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.carrier, self.method)
    }
}
