use crate::application::widget::ApplyPolicy;
use crate::constants::{
    DEFAULT_API_URL, DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD, DEFAULT_MARKET_STATUS_INTERVAL_SECS,
    DEFAULT_NEWS_FEED_LIMIT, DEFAULT_NEWS_INTERVAL_SECS, DEFAULT_OPTIMIZE_DELAY_MS,
    DEFAULT_PRICES_INTERVAL_SECS, DEFAULT_SENTIMENT_INTERVAL_SECS, DEFAULT_SESSION_FILE,
    DEFAULT_SHIELD_DELAY_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_WATCHLIST,
};
use crate::utils::config::{get_env_list, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration of the client
pub struct Config {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Refresh periods of the polled widgets
    pub polling: PollingConfig,
    /// Presentation delays of the dashboard commands
    pub commands: CommandConfig,
    /// Session persistence and demo account
    pub session: SessionConfig,
    /// Client-side request throttling
    pub rate_limiter: RateLimiterConfig,
    /// Symbols tracked by the price ticker
    pub watchlist: Vec<String>,
    /// Number of articles requested by the news page
    pub news_feed_limit: u32,
    /// How overlapping responses are applied to a widget
    pub apply_policy: ApplyPolicy,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Backend connection settings
pub struct ApiConfig {
    /// Base URL of the backend, without trailing path
    pub base_url: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Refresh periods in seconds
pub struct PollingConfig {
    /// Price ticker
    pub prices_secs: u64,
    /// Market open status
    pub market_status_secs: u64,
    /// Headlines
    pub news_secs: u64,
    /// Aggregate market sentiment
    pub sentiment_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Delays layered on top of command round trips, in milliseconds (0 disables)
pub struct CommandConfig {
    /// Delay before an optimization result is shown
    pub optimize_delay_ms: u64,
    /// Delay before the shield is shown as active
    pub shield_delay_ms: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Session persistence and demo account
pub struct SessionConfig {
    /// File holding the persisted token and disclaimer flag
    pub store_path: String,
    /// Demo account identifier
    pub demo_email: String,
    /// Demo account password
    pub demo_password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for throttling outgoing requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            api: ApiConfig {
                base_url: get_env_or_default("ALGO_API_URL", String::from(DEFAULT_API_URL))
                    .trim_end_matches('/')
                    .to_string(),
                timeout: get_env_or_default("ALGO_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            polling: PollingConfig {
                prices_secs: get_env_or_default(
                    "ALGO_POLL_PRICES_SECS",
                    DEFAULT_PRICES_INTERVAL_SECS,
                ),
                market_status_secs: get_env_or_default(
                    "ALGO_POLL_MARKET_STATUS_SECS",
                    DEFAULT_MARKET_STATUS_INTERVAL_SECS,
                ),
                news_secs: get_env_or_default("ALGO_POLL_NEWS_SECS", DEFAULT_NEWS_INTERVAL_SECS),
                sentiment_secs: get_env_or_default(
                    "ALGO_POLL_SENTIMENT_SECS",
                    DEFAULT_SENTIMENT_INTERVAL_SECS,
                ),
            },
            commands: CommandConfig {
                optimize_delay_ms: get_env_or_default(
                    "ALGO_OPTIMIZE_DELAY_MS",
                    DEFAULT_OPTIMIZE_DELAY_MS,
                ),
                shield_delay_ms: get_env_or_default("ALGO_SHIELD_DELAY_MS", DEFAULT_SHIELD_DELAY_MS),
            },
            session: SessionConfig {
                store_path: get_env_or_default(
                    "ALGO_SESSION_FILE",
                    String::from(DEFAULT_SESSION_FILE),
                ),
                demo_email: get_env_or_default("ALGO_DEMO_EMAIL", String::from(DEFAULT_DEMO_EMAIL)),
                demo_password: get_env_or_default(
                    "ALGO_DEMO_PASSWORD",
                    String::from(DEFAULT_DEMO_PASSWORD),
                ),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("ALGO_RATE_LIMIT_MAX_REQUESTS", 120),
                period_seconds: get_env_or_default("ALGO_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("ALGO_RATE_LIMIT_BURST_SIZE", 20),
            },
            watchlist: get_env_list("ALGO_WATCHLIST", DEFAULT_WATCHLIST),
            news_feed_limit: get_env_or_default("ALGO_NEWS_FEED_LIMIT", DEFAULT_NEWS_FEED_LIMIT),
            apply_policy: get_env_or_default("ALGO_APPLY_POLICY", ApplyPolicy::default()),
        }
    }

    /// Returns a copy pointing at another backend, keeping every other setting
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }
}

impl PollingConfig {
    /// Price ticker period
    #[must_use]
    pub fn prices(&self) -> Duration {
        Duration::from_secs(self.prices_secs)
    }

    /// Market status period
    #[must_use]
    pub fn market_status(&self) -> Duration {
        Duration::from_secs(self.market_status_secs)
    }

    /// Headline period
    #[must_use]
    pub fn news(&self) -> Duration {
        Duration::from_secs(self.news_secs)
    }

    /// Aggregate sentiment period
    #[must_use]
    pub fn sentiment(&self) -> Duration {
        Duration::from_secs(self.sentiment_secs)
    }
}

impl CommandConfig {
    /// Optimize presentation delay
    #[must_use]
    pub fn optimize_delay(&self) -> Duration {
        Duration::from_millis(self.optimize_delay_ms)
    }

    /// Shield presentation delay
    #[must_use]
    pub fn shield_delay(&self) -> Duration {
        Duration::from_millis(self.shield_delay_ms)
    }
}
