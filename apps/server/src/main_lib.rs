use std::sync::Arc;

use crate::config::{Config, LogFormat};
use crate::seed;
use stockshare_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use stockshare_core::quotes::InMemoryQuoteProvider;
use stockshare_core::users::InMemoryUserRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    /// Kept so quote refreshes can swap the snapshot the service reads.
    pub quote_provider: Arc<InMemoryQuoteProvider>,
    pub default_viewer_id: String,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let users = seed::demo_users();
    let quotes = seed::demo_quotes();
    tracing::info!(
        "Seeding {} users and {} quotes (base currency {})",
        users.len(),
        quotes.len(),
        config.engine.base_currency
    );

    let user_repository = Arc::new(InMemoryUserRepository::new(users)?);
    let quote_provider = Arc::new(InMemoryQuoteProvider::default());
    quote_provider.replace(quotes)?;

    let portfolio_service = Arc::new(PortfolioService::new(
        user_repository,
        quote_provider.clone(),
        config.engine.clone(),
    )?);

    // The default viewer must be able to see a leaderboard.
    portfolio_service.get_portfolio(&config.default_viewer_id)?;

    Ok(Arc::new(AppState {
        portfolio_service,
        quote_provider,
        default_viewer_id: config.default_viewer_id.clone(),
    }))
}
