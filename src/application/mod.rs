//! # Application Layer
//!
//! Orchestration of the domain: the composition pipeline, its strategy
//! seams, and the errors a running composition can produce.
//!
//! ## Structure
//!
//! - [`services`]: composer, registry, and the pluggable strategies
//! - [`error`]: the quote error taxonomy

pub mod error;
pub mod services;

pub use error::{QuoteError, QuoteResult};
