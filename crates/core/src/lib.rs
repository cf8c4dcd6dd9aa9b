//! StockShare Core - portfolio valuation and leaderboard engine.
//!
//! This crate turns raw holdings and a quote snapshot into P&L figures,
//! portfolio summaries and viewer-aware leaderboards. It performs no I/O;
//! users and quotes come in through the `UserRepositoryTrait` and
//! `QuoteProviderTrait` seams.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod leaderboard;
pub mod portfolio;
pub mod quotes;
pub mod settings;
pub mod users;

// Re-export the engine entry points
pub use leaderboard::{podium, profile_view, rank, rank_by_metric, RankMetric, RankedEntry};
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
