/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/
/// User agent string sent with every backend request
pub const USER_AGENT: &str = "algorhythm-client/0.2.0";
/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Login endpoint (form-encoded email/password)
pub const LOGIN_PATH: &str = "/api/auth/login";
/// Paginated general news feed
pub const NEWS_FEED_PATH: &str = "/api/news/feed";
/// Aggregate market sentiment
pub const MARKET_SENTIMENT_PATH: &str = "/api/news/market";
/// Stock news prefix, followed by the symbol
pub const STOCK_NEWS_PATH: &str = "/api/news/stock";
/// Legacy headline feed
pub const HEADLINES_PATH: &str = "/api/news";
/// Portfolio optimization command
pub const OPTIMIZE_PATH: &str = "/api/optimize";
/// Quantum shield activation
pub const SHIELD_PATH: &str = "/api/quantum-shield";
/// Market open/closed status
pub const MARKET_STATUS_PATH: &str = "/api/market-status";
/// Live quote prefix, followed by the symbol
pub const LIVE_QUOTE_PATH: &str = "/api/live";
/// Prediction prefix, followed by the symbol
pub const PREDICT_PATH: &str = "/api/predict";
/// Stock comparison
pub const COMPARE_PATH: &str = "/api/compare";
/// Onboarding allocation advice
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Price ticker refresh period in seconds
pub const DEFAULT_PRICES_INTERVAL_SECS: u64 = 3;
/// Market open status refresh period in seconds
pub const DEFAULT_MARKET_STATUS_INTERVAL_SECS: u64 = 30;
/// Headline refresh period in seconds
pub const DEFAULT_NEWS_INTERVAL_SECS: u64 = 60;
/// Aggregate sentiment refresh period in seconds (5 minutes)
pub const DEFAULT_SENTIMENT_INTERVAL_SECS: u64 = 300;

/// Delay applied after the optimize response before it is shown
pub const DEFAULT_OPTIMIZE_DELAY_MS: u64 = 1500;
/// Delay applied after the shield response before it is shown
pub const DEFAULT_SHIELD_DELAY_MS: u64 = 1200;

/// Default symbols tracked by the price ticker
pub const DEFAULT_WATCHLIST: &str = "NIFTY,SENSEX,RELIANCE,TCS";
/// Number of articles requested by the news page
pub const DEFAULT_NEWS_FEED_LIMIT: u32 = 50;
/// Number of stock news items shown in the stock panel
pub const STOCK_NEWS_VISIBLE: usize = 5;
/// File backing the persisted token and disclaimer flag
pub const DEFAULT_SESSION_FILE: &str = ".algorhythm_session.json";
/// Demo account identifier
pub const DEFAULT_DEMO_EMAIL: &str = "mock@example.com";
/// Demo account password
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

/// Idle label of the optimize control
pub const OPTIMIZE_IDLE_LABEL: &str = "Execute Quantum Scan";
/// Busy label of the optimize control
pub const OPTIMIZE_BUSY_LABEL: &str = "Synchronizing Qubits...";
/// Idle label of the shield control
pub const SHIELD_IDLE_LABEL: &str = "ACTIVATE SHIELD";
/// Busy label of the shield control
pub const SHIELD_BUSY_LABEL: &str = "ENCRYPTING...";
/// Label of the shield control once active
pub const SHIELD_ACTIVE_LABEL: &str = "SHIELD ACTIVE";
/// Idle label of the compare control
pub const COMPARE_IDLE_LABEL: &str = "Compare";
/// Busy label of the compare control
pub const COMPARE_BUSY_LABEL: &str = "Analyzing...";

/// Maximum number of notifications kept in memory
pub const MAX_NOTIFICATIONS: usize = 20;
/// Seconds a notification stays visible
pub const NOTIFICATION_TTL_SECS: i64 = 4;
/// Speech rate used for spoken summaries
pub const SPEECH_RATE: f32 = 0.95;

/// Allocation buckets of the portfolio chart, in weight order
pub const ALLOCATION_BUCKETS: [&str; 5] = ["Bluechip", "Mid-Cap", "Small-Cap", "Crypto", "Quantum Assets"];
/// Allocation in percent shown before onboarding or any optimization
pub const INITIAL_ALLOCATION: [f64; 5] = [40.0, 20.0, 15.0, 10.0, 15.0];
/// Action recorded in the ledger for each optimization
pub const LEDGER_ACTION: &str = "AI-Rebalance";
/// Status recorded in the ledger for each optimization
pub const LEDGER_STATUS: &str = "Secured";
/// Idle label of the predict control
pub const PREDICT_IDLE_LABEL: &str = "Predict";
/// Busy label of the predict control
pub const PREDICT_BUSY_LABEL: &str = "Forecasting...";
