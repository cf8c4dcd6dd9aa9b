//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;
use crate::portfolio::positions::EnrichedPosition;
use crate::users::User;

/// What to do with a position whose symbol has no quote in the snapshot.
///
/// Last-known prices are supplied by the caller through
/// `QuoteSnapshot::with_fallback` before valuation; the engine itself never
/// invents a price.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum MissingQuotePolicy {
    /// Fail the whole valuation with `Error::MissingQuote`.
    #[default]
    Reject,
    /// Drop the position from the valuation and report its symbol.
    Exclude,
}

impl MissingQuotePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingQuotePolicy::Reject => "reject",
            MissingQuotePolicy::Exclude => "exclude",
        }
    }
}

impl fmt::Display for MissingQuotePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingQuotePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(MissingQuotePolicy::Reject),
            "exclude" => Ok(MissingQuotePolicy::Exclude),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown missing quote policy '{}'",
                other
            ))),
        }
    }
}

/// Aggregate figures for one user's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of position market values.
    pub total_equity: Decimal,
    /// `total_equity - previous_equity`
    pub day_change: Decimal,
    /// `day_change / previous_equity * 100`
    pub day_change_percent: Decimal,
    /// Holdings-derived ROI over cost basis. `None` when the cost basis is zero.
    pub roi: Option<Decimal>,
    pub total_cost_basis: Decimal,
    #[serde(rename = "totalUnrealizedPnL")]
    pub total_unrealized_pnl: Decimal,
}

impl PortfolioSummary {
    /// Summary of a portfolio that holds nothing.
    pub fn empty() -> Self {
        Self {
            total_equity: Decimal::ZERO,
            day_change: Decimal::ZERO,
            day_change_percent: Decimal::ZERO,
            roi: None,
            total_cost_basis: Decimal::ZERO,
            total_unrealized_pnl: Decimal::ZERO,
        }
    }
}

/// Result of valuing a user's positions against one quote snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub positions: Vec<EnrichedPosition>,
    /// Symbols dropped under `MissingQuotePolicy::Exclude`.
    pub excluded_symbols: Vec<String>,
    pub summary: PortfolioSummary,
}

/// A user together with their valuation for the current pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPortfolio {
    pub user: User,
    pub valuation: PortfolioValuation,
}
