//! # Location Value Object
//!
//! Origin and destination addresses at quote-composition granularity.
//!
//! Composition only needs enough of an address to route and validate:
//! country, and optionally region and postcode. Street-level detail stays
//! with the host application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coarse-grained shipping location.
///
/// The country is an ISO 3166-1 alpha-2 code and is normalized to
/// uppercase at construction so validators can compare it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    country: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    postcode: Option<String>,
}

impl Location {
    /// Creates a location from a country code.
    #[must_use]
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into().to_ascii_uppercase(),
            region: None,
            postcode: None,
        }
    }

    /// Sets the region or state code.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the postcode.
    #[must_use]
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    /// Returns the uppercase country code.
    #[must_use]
    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the region code, if set.
    #[must_use]
    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the postcode, if set.
    #[must_use]
    #[inline]
    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.country)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        if let Some(postcode) = &self.postcode {
            write!(f, " {postcode}")?;
        }
        Ok(())
    }
}
