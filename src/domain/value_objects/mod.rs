//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`RequestId`]: UUID-based request correlation identifier
//! - [`CarrierCode`], [`MethodCode`]: String-based carrier identifiers
//! - [`DeliveryMethod`]: Composite `{carrier}_{method}` identifier
//!
//! ## Numeric Types
//!
//! - [`Money`]: Non-negative decimal amount with checked arithmetic
//! - [`Weight`]: Non-negative decimal weight with checked arithmetic
//! - [`UnitCount`], [`FreeUnits`]: Whole-unit quantities with clamping
//!
//! ## Addressing
//!
//! - [`Currency`]: ISO 4217 currency tag for all amounts on a request
//! - [`Location`]: Country-level origin and destination addressing

pub mod codes;
pub mod currency;
pub mod ids;
pub mod location;
pub mod money;
pub mod units;
pub mod weight;

pub use codes::{CarrierCode, DeliveryMethod, MethodCode};
pub use currency::{Currency, UnknownCurrencyError};
pub use ids::RequestId;
pub use location::Location;
pub use money::Money;
pub use units::{FreeUnits, UnitCount};
pub use weight::Weight;
