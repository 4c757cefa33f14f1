/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! # ALGORHYTHM Client Prelude
//!
//! Re-exports the types most front-ends need.
//!
//! ```rust
//! use algorhythm_client::prelude::*;
//!
//! let config = Config::default();
//! assert_eq!(config.apply_policy, ApplyPolicy::LatestRequest);
//! ```

// ============================================================================
// CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::Config;
pub use crate::utils::logger::setup_logger;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

pub use crate::session::{
    Auth, FileTokenStore, GateDecision, MemoryTokenStore, Session, SessionGate, TokenStore,
};
pub use crate::transport::{ApiClient, HttpApiClient};

// ============================================================================
// WIDGETS, POLLING AND COMMANDS
// ============================================================================

pub use crate::application::commands::{CommandKind, CommandPhase, Control, ControlHandle};
pub use crate::application::context::AppContext;
pub use crate::application::fetcher::{Feed, QuoteBoard, Refresh};
pub use crate::application::notify::{LogSpeaker, Notification, Notifier, Speaker, Utterance};
pub use crate::application::scheduler::PollingScheduler;
pub use crate::application::state::{AppState, ProfileInput, UserProfile};
pub use crate::application::voice::{VoiceIntent, interpret};
pub use crate::application::widget::{ApplyPolicy, Widget, WidgetStatus};

// ============================================================================
// PAGES
// ============================================================================

pub use crate::application::pages::{
    AnalysisPage, Dashboard, DashboardViews, DemoPage, FormState, LoginPage, Navigation,
    NewsPage, PageEntry, Route, StockNewsPanel,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::analysis::{Comparison, Prediction};
pub use crate::model::auth::Credentials;
pub use crate::model::market::{MarketSnapshot, MarketStatus, Quote};
pub use crate::model::news::{Article, Headlines, MarketSentiment, NewsList, SentimentLabel};
pub use crate::model::portfolio::{
    AllocationAdvice, Holding, LedgerEntry, OptimizationResult, RiskLevel, StrategySummary,
};
