use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::positions::Position;

/// A dashboard member and the positions they own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Cumulative ROI in percent, tracked outside the engine.
    pub roi: Decimal,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub watchlist: Vec<String>,
    /// Equity at the previous close, when the position store tracks it.
    /// Without it the baseline is implied from quote changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_equity: Option<Decimal>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roi: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            roi,
            positions: Vec::new(),
            watchlist: Vec::new(),
            previous_equity: None,
        }
    }

    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = positions;
        self
    }

    /// Symbol of the first holding, used as the initially charted symbol.
    pub fn first_symbol(&self) -> Option<&str> {
        self.positions.first().map(|p| p.symbol.as_str())
    }
}
