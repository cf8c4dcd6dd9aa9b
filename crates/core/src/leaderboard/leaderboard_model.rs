use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;
use crate::portfolio::valuation::UserPortfolio;

/// Built-in performance metrics a leaderboard can be ordered by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum RankMetric {
    /// The user's tracked cumulative ROI.
    #[default]
    Roi,
    /// Percent change of total equity since the previous close.
    DayChangePercent,
    /// ROI derived from current holdings over their cost basis.
    /// Portfolios without a cost basis score zero.
    HoldingsRoi,
}

impl RankMetric {
    pub fn value(&self, portfolio: &UserPortfolio) -> Decimal {
        let summary = &portfolio.valuation.summary;
        match self {
            RankMetric::Roi => portfolio.user.roi,
            RankMetric::DayChangePercent => summary.day_change_percent,
            RankMetric::HoldingsRoi => summary.roi.unwrap_or(Decimal::ZERO),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankMetric::Roi => "roi",
            RankMetric::DayChangePercent => "dayChangePercent",
            RankMetric::HoldingsRoi => "holdingsRoi",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(&['_', '-'][..], "").as_str() {
            "roi" => Ok(RankMetric::Roi),
            "daychangepercent" => Ok(RankMetric::DayChangePercent),
            "holdingsroi" => Ok(RankMetric::HoldingsRoi),
            _ => Err(Error::invalid_input(format!("unknown rank metric '{}'", s))),
        }
    }
}

/// One holding as shown to a viewer.
///
/// Absolute figures are `None` (and omitted from JSON) when the viewer does
/// not own the portfolio; relative figures are always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub id: String,
    pub symbol: String,
    pub current_price: Decimal,
    #[serde(rename = "unrealizedPnLPercent")]
    pub unrealized_pnl_percent: Decimal,
    pub weight: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<Decimal>,
    #[serde(
        default,
        rename = "unrealizedPnL",
        skip_serializing_if = "Option::is_none"
    )]
    pub unrealized_pnl: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_change: Option<Decimal>,
}

/// A user's profile as shown to a viewer. `read_only` profiles carry no
/// absolute equity figures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub read_only: bool,
    pub roi: Decimal,
    pub day_change_percent: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdings_roi: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_equity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_change: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_basis: Option<Decimal>,
    pub positions: Vec<PositionView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_symbols: Vec<String>,
}

/// A leaderboard row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// 1-based, sequential; ties keep input order and still get distinct ranks.
    pub rank: usize,
    pub metric_value: Decimal,
    /// True only for the viewer's own entry.
    pub visible: bool,
    pub user: ProfileView,
}
