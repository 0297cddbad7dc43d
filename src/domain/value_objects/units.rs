//! # Unit Counts
//!
//! Whole-unit quantities used by promotion counting and per-unit pricing.
//!
//! [`UnitCount`] is the total number of physical units on a request;
//! [`FreeUnits`] is how many of them ship free. A counter may report more
//! free units than the request holds (overlapping promotions do this);
//! [`FreeUnits::clamp_to`] brings the count back into range instead of
//! failing the composition.
//!
//! # Examples
//!
//! ```
//! use shipquote::domain::value_objects::{FreeUnits, UnitCount};
//!
//! let total = UnitCount::new(3);
//! let free = FreeUnits::new(5).clamp_to(total);
//! assert_eq!(free.get(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total number of units on a quote request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UnitCount(u32);

impl UnitCount {
    /// Creates a new unit count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Returns the raw count.
    #[must_use]
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns true if the count is zero.
    #[must_use]
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UnitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of units that ship free of charge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct FreeUnits(u32);

impl FreeUnits {
    /// Creates a new free-unit count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// No free units.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw count.
    #[must_use]
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns true if the count is zero.
    #[must_use]
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Clamps the count so it never exceeds `total`.
    #[must_use]
    pub fn clamp_to(self, total: UnitCount) -> Self {
        Self(self.0.min(total.get()))
    }
}

impl fmt::Display for FreeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_at_total() {
        let total = UnitCount::new(3);
        assert_eq!(FreeUnits::new(5).clamp_to(total).get(), 3);
        assert_eq!(FreeUnits::new(3).clamp_to(total).get(), 3);
        assert_eq!(FreeUnits::new(1).clamp_to(total).get(), 1);
    }

    #[test]
    fn clamp_to_zero_total() {
        let total = UnitCount::new(0);
        assert!(FreeUnits::new(10).clamp_to(total).is_zero());
    }

    #[test]
    fn zero_constructors() {
        assert!(UnitCount::new(0).is_zero());
        assert!(FreeUnits::zero().is_zero());
        assert!(!UnitCount::new(1).is_zero());
    }

    #[test]
    fn display_shows_raw_count() {
        assert_eq!(UnitCount::new(7).to_string(), "7");
        assert_eq!(FreeUnits::new(2).to_string(), "2");
    }
}
