//! # Domain Entities
//!
//! The three artifacts a quote composition reads and produces.
//!
//! ## Lifecycle
//!
//! - [`QuoteRequest`]: immutable input describing what is being shipped
//! - [`PricingRequest`]: normalized pricing input derived mid-pipeline
//! - [`Quote`]: the priced delivery offer a composition produces

pub mod pricing_request;
pub mod quote;
pub mod quote_request;

pub use pricing_request::PricingRequest;
pub use quote::Quote;
pub use quote_request::{CartLine, QuoteRequest, QuoteRequestBuilder};
