use log::{debug, info};
use rayon::prelude::*;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::leaderboard::{
    podium, profile_view, rank_by_metric, ProfileView, RankMetric, RankedEntry,
};
use crate::portfolio::valuation::{value_portfolio, UserPortfolio};
use crate::quotes::{resolve_watchlist, Quote, QuoteProviderTrait, QuoteSnapshot, WatchlistItem};
use crate::settings::EngineSettings;
use crate::users::{User, UserRepositoryTrait};

/// Trait defining the public interface for the Portfolio Service.
///
/// Every call takes a fresh quote snapshot and keeps no state between calls.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Values a single user's portfolio.
    fn get_portfolio(&self, user_id: &str) -> Result<UserPortfolio>;

    /// A user's profile as `viewer_id` sees it. The viewer must exist.
    fn get_profile_view(&self, target_id: &str, viewer_id: &str) -> Result<ProfileView>;

    /// Ranks every user. `metric` defaults to the configured leaderboard metric.
    fn get_leaderboard(
        &self,
        viewer_id: &str,
        metric: Option<RankMetric>,
    ) -> Result<Vec<RankedEntry>>;

    /// The top of the leaderboard, sized by the configured podium size.
    fn get_podium(&self, viewer_id: &str, metric: Option<RankMetric>) -> Result<Vec<RankedEntry>>;

    fn get_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistItem>>;

    /// All quotes of the current snapshot, ordered by symbol.
    fn get_quotes(&self) -> Result<Vec<Quote>>;

    fn settings(&self) -> &EngineSettings;
}

/// Service combining the position store, the quote source and the engine.
#[derive(Clone)]
pub struct PortfolioService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    quote_provider: Arc<dyn QuoteProviderTrait>,
    settings: EngineSettings,
}

impl PortfolioService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        quote_provider: Arc<dyn QuoteProviderTrait>,
        settings: EngineSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            user_repository,
            quote_provider,
            settings,
        })
    }

    fn value_user(&self, user: User, snapshot: &QuoteSnapshot) -> Result<UserPortfolio> {
        let valuation = value_portfolio(&user, snapshot, self.settings.missing_quote_policy)?;
        Ok(UserPortfolio { user, valuation })
    }

    /// Values every user against one snapshot in parallel, keeping listing order.
    fn value_all_users(&self) -> Result<Vec<UserPortfolio>> {
        let users = self.user_repository.list_users()?;
        let snapshot = self.quote_provider.latest_snapshot()?;
        debug!(
            "Valuing {} users against {} quotes",
            users.len(),
            snapshot.len()
        );

        users
            .into_par_iter()
            .map(|user| self.value_user(user, &snapshot))
            .collect()
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_portfolio(&self, user_id: &str) -> Result<UserPortfolio> {
        let user = self.user_repository.get_user(user_id)?;
        let snapshot = self.quote_provider.latest_snapshot()?;
        self.value_user(user, &snapshot)
    }

    fn get_profile_view(&self, target_id: &str, viewer_id: &str) -> Result<ProfileView> {
        match self.user_repository.get_user(viewer_id) {
            Ok(_) => {}
            Err(Error::NotFound(_)) => {
                return Err(Error::invalid_input(format!(
                    "viewer '{}' is not a known user",
                    viewer_id
                )))
            }
            Err(e) => return Err(e),
        }
        let portfolio = self.get_portfolio(target_id)?;
        Ok(profile_view(&portfolio, viewer_id))
    }

    fn get_leaderboard(
        &self,
        viewer_id: &str,
        metric: Option<RankMetric>,
    ) -> Result<Vec<RankedEntry>> {
        let metric = metric.unwrap_or(self.settings.leaderboard_metric);
        let portfolios = self.value_all_users()?;
        let entries = rank_by_metric(&portfolios, metric, viewer_id)?;
        info!(
            "Leaderboard by {} built for viewer {} ({} entries)",
            metric,
            viewer_id,
            entries.len()
        );
        Ok(entries)
    }

    fn get_podium(&self, viewer_id: &str, metric: Option<RankMetric>) -> Result<Vec<RankedEntry>> {
        let entries = self.get_leaderboard(viewer_id, metric)?;
        Ok(podium(&entries, self.settings.podium_size))
    }

    fn get_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistItem>> {
        let user = self.user_repository.get_user(user_id)?;
        let snapshot = self.quote_provider.latest_snapshot()?;
        Ok(resolve_watchlist(&user.watchlist, &snapshot))
    }

    fn get_quotes(&self) -> Result<Vec<Quote>> {
        Ok(self.quote_provider.latest_snapshot()?.sorted_quotes())
    }

    fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
