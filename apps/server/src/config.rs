use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use stockshare_core::leaderboard::RankMetric;
use stockshare_core::portfolio::valuation::MissingQuotePolicy;
use stockshare_core::settings::EngineSettings;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8088";
pub const DEFAULT_VIEWER_ID: &str = "u1";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("SS_LOG_FORMAT must be 'text' or 'json', got '{}'", other),
        }
    }
}

/// Server configuration, read from `SS_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Viewer used when a request does not name one.
    pub default_viewer_id: String,
    /// Allowed CORS origins; empty means any origin.
    pub cors_allow_origins: Vec<String>,
    pub log_format: LogFormat,
    pub engine: EngineSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8088)),
            default_viewer_id: DEFAULT_VIEWER_ID.to_string(),
            cors_allow_origins: Vec::new(),
            log_format: LogFormat::default(),
            engine: EngineSettings::default(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let mut engine = defaults.engine.clone();

        let listen_addr = lookup("SS_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("SS_LISTEN_ADDR must be a socket address")?;

        let default_viewer_id =
            lookup("SS_DEFAULT_VIEWER_ID").unwrap_or(defaults.default_viewer_id);

        let cors_allow_origins = lookup("SS_CORS_ALLOW_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let log_format = match lookup("SS_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        if let Some(raw) = lookup("SS_MISSING_QUOTE_POLICY") {
            engine.missing_quote_policy = MissingQuotePolicy::from_str(&raw)?;
        }
        if let Some(raw) = lookup("SS_LEADERBOARD_METRIC") {
            engine.leaderboard_metric = RankMetric::from_str(&raw)?;
        }
        if let Some(raw) = lookup("SS_PODIUM_SIZE") {
            engine.podium_size = raw
                .trim()
                .parse()
                .context("SS_PODIUM_SIZE must be a positive integer")?;
        }
        if let Some(raw) = lookup("SS_BASE_CURRENCY") {
            engine.base_currency = raw.trim().to_uppercase();
        }
        engine.validate()?;

        Ok(Self {
            listen_addr,
            default_viewer_id,
            cors_allow_origins,
            log_format,
            engine,
        })
    }
}
