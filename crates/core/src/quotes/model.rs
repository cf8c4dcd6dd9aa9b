//! Quote domain models.
//!
//! This module contains the data structures for representing market quotes
//! and the immutable per-pass snapshot the valuation engine reads from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::MAX_QUOTE_PRICE;
use crate::errors::{Error, Result};

// =============================================================================
// Quote
// =============================================================================

/// A market quote for a listed instrument at the time of a computation pass.
///
/// # Fields
///
/// * `symbol` - Exchange ticker (e.g., "2330" for TSMC on the TWSE)
/// * `name` - Display name of the instrument
/// * `price` - Latest traded price
/// * `change` - Absolute price change since the previous close
/// * `change_percent` - Percent price change since the previous close
/// * `sector` - Industry sector, if known
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub change: Decimal,
    #[serde(default)]
    pub change_percent: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl Quote {
    /// Creates a quote with only a price; change fields default to zero.
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            ..Default::default()
        }
    }

    /// Price at the previous close, derived from the absolute change.
    /// `None` when the subtraction leaves the decimal range.
    pub fn previous_close(&self) -> Option<Decimal> {
        self.price.checked_sub(self.change)
    }

    /// Checks that the quote can be valued: `0 <= price <= MAX_QUOTE_PRICE`
    /// and `0 < previous_close <= MAX_QUOTE_PRICE`.
    pub fn validate(&self) -> Result<()> {
        if self.price < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "quote for '{}' has a negative price {}",
                self.symbol, self.price
            )));
        }
        if self.price > MAX_QUOTE_PRICE {
            return Err(Error::invalid_input(format!(
                "quote for '{}' has price {} above the {} limit",
                self.symbol, self.price, MAX_QUOTE_PRICE
            )));
        }
        match self.previous_close() {
            Some(close) if close > Decimal::ZERO && close <= MAX_QUOTE_PRICE => Ok(()),
            _ => Err(Error::invalid_input(format!(
                "quote for '{}' implies an invalid previous close (price {}, change {})",
                self.symbol, self.price, self.change
            ))),
        }
    }
}

// =============================================================================
// Quote Snapshot
// =============================================================================

/// Immutable symbol -> quote map for one computation pass.
///
/// A snapshot is never mutated after construction; merging with last-known
/// prices produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteSnapshot {
    quotes: HashMap<String, Quote>,
}

impl QuoteSnapshot {
    /// Builds a snapshot keyed by symbol. A later quote for the same symbol wins.
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            quotes: quotes
                .into_iter()
                .map(|quote| (quote.symbol.clone(), quote))
                .collect(),
        }
    }

    /// Builds a snapshot after validating every quote. The first invalid
    /// quote fails the whole snapshot.
    pub fn try_new(quotes: impl IntoIterator<Item = Quote>) -> Result<Self> {
        let quotes: Vec<Quote> = quotes.into_iter().collect();
        for quote in &quotes {
            quote.validate()?;
        }
        Ok(Self::new(quotes))
    }

    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Returns a new snapshot where symbols missing from `self` are filled from
    /// `last_known`. Quotes already present in `self` are never overridden.
    pub fn with_fallback(&self, last_known: &QuoteSnapshot) -> QuoteSnapshot {
        let mut quotes = self.quotes.clone();
        for (symbol, quote) in &last_known.quotes {
            quotes
                .entry(symbol.clone())
                .or_insert_with(|| quote.clone());
        }
        QuoteSnapshot { quotes }
    }

    /// All quotes ordered by symbol.
    pub fn sorted_quotes(&self) -> Vec<Quote> {
        let mut quotes: Vec<Quote> = self.quotes.values().cloned().collect();
        quotes.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        quotes
    }
}

// =============================================================================
// Watchlist
// =============================================================================

/// A watched symbol together with its quote, if the snapshot has one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub symbol: String,
    pub quote: Option<Quote>,
}
