use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding of one symbol, owned by a single user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub symbol: String,
    /// Average acquisition cost per share.
    pub average_cost: Decimal,
    pub quantity: Decimal,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        average_cost: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            average_cost,
            quantity,
        }
    }

    /// Total amount paid for the position, `None` outside the decimal range.
    pub fn cost_basis(&self) -> Option<Decimal> {
        self.average_cost.checked_mul(self.quantity)
    }
}

/// A position valued against a quote. Derived, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPosition {
    #[serde(flatten)]
    pub position: Position,
    pub current_price: Decimal,
    /// `(current_price - average_cost) * quantity`
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: Decimal,
    /// `(current_price - average_cost) / average_cost * 100`
    #[serde(rename = "unrealizedPnLPercent")]
    pub unrealized_pnl_percent: Decimal,
    /// `current_price * quantity`
    pub market_value: Decimal,
    /// Quote change since previous close times quantity.
    pub day_change: Decimal,
    /// Share of the portfolio's total equity, in percent.
    pub weight: Decimal,
}

impl EnrichedPosition {
    pub fn symbol(&self) -> &str {
        &self.position.symbol
    }

    pub fn cost_basis(&self) -> Option<Decimal> {
        self.position.cost_basis()
    }
}
