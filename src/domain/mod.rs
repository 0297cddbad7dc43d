//! # Domain Layer
//!
//! Pure types and invariants for shipping quote composition.
//!
//! Nothing in this layer performs I/O or reads ambient state; every type
//! is constructed from explicit inputs and validated at the boundary.
//!
//! ## Structure
//!
//! - [`value_objects`]: validated immutable types (money, weights, codes)
//! - [`entities`]: the request, pricing, and quote artifacts
//! - [`errors`]: construction and arithmetic error types

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
