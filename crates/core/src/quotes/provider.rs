use log::debug;
use std::sync::{Arc, RwLock};

use super::{Quote, QuoteSnapshot, WatchlistItem};
use crate::errors::{Error, Result};

/// Source of quote snapshots.
///
/// Implementations decide the refresh cadence; the engine only ever sees the
/// snapshot returned for a single pass.
pub trait QuoteProviderTrait: Send + Sync {
    fn latest_snapshot(&self) -> Result<QuoteSnapshot>;
}

/// Quote provider backed by an in-memory snapshot that can be swapped wholesale.
#[derive(Clone, Default)]
pub struct InMemoryQuoteProvider {
    snapshot: Arc<RwLock<QuoteSnapshot>>,
}

impl InMemoryQuoteProvider {
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(QuoteSnapshot::new(quotes))),
        }
    }

    /// Replaces the current snapshot. Passes already in flight keep the old one.
    ///
    /// Every quote is validated first; on error the current snapshot is kept.
    pub fn replace(&self, quotes: impl IntoIterator<Item = Quote>) -> Result<()> {
        let next = QuoteSnapshot::try_new(quotes)?;
        debug!("Replacing quote snapshot with {} quotes", next.len());
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| Error::Unexpected("quote snapshot lock poisoned".to_string()))?;
        *guard = next;
        Ok(())
    }
}

impl QuoteProviderTrait for InMemoryQuoteProvider {
    fn latest_snapshot(&self) -> Result<QuoteSnapshot> {
        self.snapshot
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| Error::Unexpected("quote snapshot lock poisoned".to_string()))
    }
}

/// Resolves a watchlist against a snapshot, keeping the watchlist order.
///
/// Symbols without a quote are kept with `quote: None`; watchlists are display
/// only and never feed aggregate totals.
pub fn resolve_watchlist(symbols: &[String], snapshot: &QuoteSnapshot) -> Vec<WatchlistItem> {
    symbols
        .iter()
        .map(|symbol| WatchlistItem {
            symbol: symbol.clone(),
            quote: snapshot.get(symbol).cloned(),
        })
        .collect()
}
