use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_PODIUM_SIZE};
use crate::errors::{Error, Result};
use crate::leaderboard::RankMetric;
use crate::portfolio::valuation::MissingQuotePolicy;

/// Engine settings shared by every valuation and ranking pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub base_currency: String,
    pub missing_quote_policy: MissingQuotePolicy,
    pub leaderboard_metric: RankMetric,
    pub podium_size: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            missing_quote_policy: MissingQuotePolicy::default(),
            leaderboard_metric: RankMetric::default(),
            podium_size: DEFAULT_PODIUM_SIZE,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        if self.base_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "base currency must not be empty".to_string(),
            ));
        }
        if self.podium_size == 0 {
            return Err(Error::InvalidConfigValue(
                "podium size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
