//! Quote management module.
//!
//! - [`model`] - Quote, the immutable per-pass `QuoteSnapshot`, watchlist items
//! - [`provider`] - The quote source seam and an in-memory implementation

pub mod model;
pub mod provider;

pub use model::*;
pub use provider::{resolve_watchlist, InMemoryQuoteProvider, QuoteProviderTrait};
