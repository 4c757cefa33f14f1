/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Portfolio dashboard
//!
//! Opening the dashboard runs the session gate, fetches every polled widget
//! once and then arms the polling timers. Commands (optimize, shield, voice,
//! onboarding) feed the remaining widgets.

use crate::application::commands::{CommandKind, Control, ControlHandle};
use crate::application::context::AppContext;
use crate::application::fetcher::{Feed, QuoteBoard};
use crate::application::notify::{Notifier, Utterance};
use crate::application::pages::{Navigation, PageEntry, Route};
use crate::application::scheduler::PollingScheduler;
use crate::application::state::{AppState, ProfileInput, UserProfile};
use crate::application::voice::{VoiceIntent, interpret};
use crate::application::widget::{ApplyPolicy, Widget};
use crate::constants::{
    ANALYZE_PATH, HEADLINES_PATH, INITIAL_ALLOCATION, LEDGER_ACTION, LEDGER_STATUS,
    MARKET_SENTIMENT_PATH, MARKET_STATUS_PATH, OPTIMIZE_BUSY_LABEL, OPTIMIZE_IDLE_LABEL,
    OPTIMIZE_PATH, SHIELD_ACTIVE_LABEL, SHIELD_BUSY_LABEL, SHIELD_IDLE_LABEL, SHIELD_PATH,
};
use crate::error::AppError;
use crate::model::market::{MarketSnapshot, MarketStatus};
use crate::model::news::{Headlines, HeadlinesResponse, MarketSentiment};
use crate::model::portfolio::{
    AllocationAdvice, AnalyzeRequest, LedgerEntry, OptimizationResult, ShieldRequest,
    ShieldResponse, StrategySummary,
};
use crate::session::gate::{GateDecision, Session};
use crate::transport::http_client::decode;
use crate::utils::id::ledger_tx_id;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Notification posted after onboarding
pub const PROFILE_SYNCED: &str = "Nodes Synchronized. AI Sentinel is now active.";

/// Normalizes both shapes of the legacy headline feed
pub fn decode_headlines(value: Value) -> Result<Headlines, AppError> {
    let response: HeadlinesResponse = decode(value)?;
    Ok(response.into())
}

/// Typed bindings to every widget of the dashboard
#[derive(Clone)]
pub struct DashboardViews {
    /// Price ticker
    pub quotes: Widget<MarketSnapshot>,
    /// Market open badge
    pub market_status: Widget<MarketStatus>,
    /// Legacy headline list
    pub headlines: Widget<Headlines>,
    /// Aggregate sentiment panel
    pub sentiment: Widget<MarketSentiment>,
    /// Allocation chart, in percent per bucket
    pub allocation: Widget<Vec<f64>>,
    /// Quoted rationale of the last optimization
    pub reasoning: Widget<String>,
    /// Strategy line
    pub strategy: Widget<StrategySummary>,
    /// Suggestion list
    pub suggestions: Widget<Vec<String>>,
    /// Rebalance ledger, newest first
    pub ledger: Widget<Vec<LedgerEntry>>,
    /// Onboarding allocation advice
    pub advice: Widget<AllocationAdvice>,
}

impl DashboardViews {
    fn new(policy: ApplyPolicy) -> Self {
        Self {
            quotes: Widget::new("quotes", policy),
            market_status: Widget::new("market_status", policy),
            headlines: Widget::new("headlines", policy),
            sentiment: Widget::new("market_sentiment", policy),
            allocation: Widget::with_value("allocation", policy, INITIAL_ALLOCATION.to_vec()),
            reasoning: Widget::new("reasoning", policy),
            strategy: Widget::new("strategy", policy),
            suggestions: Widget::new("suggestions", policy),
            ledger: Widget::with_value("ledger", policy, Vec::new()),
            advice: Widget::new("advice", policy),
        }
    }
}

/// The dashboard page
pub struct Dashboard {
    ctx: AppContext,
    session: Session,
    state: Arc<RwLock<AppState>>,
    views: DashboardViews,
    optimize: ControlHandle,
    shield: ControlHandle,
    notifier: Notifier,
    scheduler: PollingScheduler,
}

impl Dashboard {
    /// Opens the dashboard
    ///
    /// Without a stored token nothing is fetched and the login route is
    /// returned. Otherwise every polled widget is fetched exactly once before
    /// the timers are armed.
    pub async fn open(ctx: &AppContext, state: AppState) -> PageEntry<Dashboard> {
        let session = match ctx.gate().check() {
            GateDecision::Proceed(session) => session,
            GateDecision::Redirect(route) => return PageEntry::Redirect(route),
        };

        let dashboard = Self::assemble(ctx.clone(), session, state);
        dashboard.scheduler.prime().await;
        dashboard.scheduler.start();
        info!("Dashboard ready ({} polled widgets)", dashboard.scheduler.len());
        PageEntry::Ready(dashboard)
    }

    fn assemble(ctx: AppContext, session: Session, state: AppState) -> Self {
        let config = ctx.config.clone();
        let views = DashboardViews::new(config.apply_policy);
        let mut scheduler = PollingScheduler::new();

        scheduler.register(
            Arc::new(QuoteBoard::new(
                ctx.api.clone(),
                config.watchlist.clone(),
                views.quotes.clone(),
            )),
            config.polling.prices(),
        );
        scheduler.register(
            Arc::new(Feed::new(
                ctx.api.clone(),
                MARKET_STATUS_PATH,
                None,
                views.market_status.clone(),
            )),
            config.polling.market_status(),
        );
        scheduler.register(
            Arc::new(Feed::with_decoder(
                ctx.api.clone(),
                HEADLINES_PATH,
                None,
                views.headlines.clone(),
                decode_headlines,
            )),
            config.polling.news(),
        );
        scheduler.register(
            Arc::new(Feed::new(
                ctx.api.clone(),
                MARKET_SENTIMENT_PATH,
                Some(session.token().to_string()),
                views.sentiment.clone(),
            )),
            config.polling.sentiment(),
        );

        Self {
            ctx,
            session,
            state: Arc::new(RwLock::new(state)),
            views,
            optimize: ControlHandle::new(CommandKind::Optimize, OPTIMIZE_IDLE_LABEL),
            shield: ControlHandle::new(CommandKind::Shield, SHIELD_IDLE_LABEL),
            notifier: Notifier::new(),
            scheduler,
        }
    }

    /// Widgets of the page
    #[must_use]
    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    /// Notifications posted by the page
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Session the page was opened with
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current investor profile
    pub async fn profile(&self) -> UserProfile {
        self.state.read().await.profile.clone()
    }

    /// State of the optimize button
    pub async fn optimize_control(&self) -> Control {
        self.optimize.snapshot().await
    }

    /// State of the shield button
    pub async fn shield_control(&self) -> Control {
        self.shield.snapshot().await
    }

    /// `true` while polling timers are armed
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Runs the optimization scan
    ///
    /// On success the chart, reasoning, strategy, suggestions and ledger are
    /// updated and a summary is spoken. On failure the control returns to its
    /// idle label and no widget changes.
    pub async fn optimize(&self) -> Result<OptimizationResult, AppError> {
        let profile = self.profile().await;
        self.optimize
            .begin(
                OPTIMIZE_BUSY_LABEL,
                Some(format!("Scanning markets for {} risk profiles...", profile.risk)),
            )
            .await?;

        let result = match self
            .ctx
            .api
            .get(OPTIMIZE_PATH, None)
            .await
            .and_then(decode::<OptimizationResult>)
        {
            Ok(result) => result,
            Err(e) => {
                warn!("Optimization failed: {}", e);
                self.optimize.reset().await;
                return Err(e);
            }
        };

        let delay = self.ctx.config.commands.optimize_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.views
            .reasoning
            .set(format!("\"{}\"", result.reasoning))
            .await;
        self.views
            .strategy
            .set(StrategySummary {
                name: result.strategy_name.clone(),
                alpha: result.alpha,
                goal: profile.goal.clone(),
            })
            .await;
        self.views
            .allocation
            .set(result.weight_percentages())
            .await;
        self.views
            .suggestions
            .set(result.suggestions.clone())
            .await;
        let entry = LedgerEntry {
            tx_id: ledger_tx_id(),
            action: LEDGER_ACTION.to_string(),
            at: Utc::now(),
            status: LEDGER_STATUS.to_string(),
        };
        self.views
            .ledger
            .modify(|ledger| ledger.get_or_insert_with(Vec::new).insert(0, entry))
            .await;

        self.optimize.reset().await;
        self.ctx.speaker.speak(&Utterance::new(format!(
            "Optimization complete for your {} portfolio. Strategy: {}.",
            profile.risk, result.strategy_name
        )));
        Ok(result)
    }

    /// Activates the quantum shield
    ///
    /// Success latches the control as active; failure restores it.
    pub async fn activate_shield(&self) -> Result<ShieldResponse, AppError> {
        let payload = self.profile().await.shield_payload();
        self.shield.begin(SHIELD_BUSY_LABEL, None).await?;

        let outcome = match serde_json::to_value(ShieldRequest { payload }) {
            Ok(body) => self.ctx.api.post_json(SHIELD_PATH, &body, None).await,
            Err(e) => Err(e.into()),
        }
        .and_then(decode::<ShieldResponse>);

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                warn!("Shield activation failed: {}", e);
                self.shield.reset().await;
                return Err(e);
            }
        };

        let delay = self.ctx.config.commands.shield_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.shield.latch(SHIELD_ACTIVE_LABEL).await;
        self.notifier
            .notify(format!("Quantum Shield Enabled via {}", response.algorithm));
        Ok(response)
    }

    /// Applies the onboarding form, then runs the optimization scan
    pub async fn configure_profile(
        &self,
        input: &ProfileInput,
    ) -> Result<OptimizationResult, AppError> {
        let risk = {
            let mut state = self.state.write().await;
            state.profile.apply(input);
            debug!("Profile updated: {:?}", state.profile);
            state.profile.risk
        };

        self.views
            .allocation
            .set(risk.default_weights().to_vec())
            .await;
        self.notifier.notify(PROFILE_SYNCED);
        self.optimize().await
    }

    /// Asks the backend for an allocation matching the profile's risk
    pub async fn recommend_allocation(&self) -> Result<AllocationAdvice, AppError> {
        let risk = self.profile().await.risk;
        let body = serde_json::to_value(AnalyzeRequest { risk })?;
        let advice: AllocationAdvice =
            decode(self.ctx.api.post_json(ANALYZE_PATH, &body, None).await?)?;

        if !advice.weights.is_empty() {
            self.views.allocation.set(advice.weights.clone()).await;
        }
        self.views.advice.set(advice.clone()).await;
        Ok(advice)
    }

    /// Dispatches a voice transcript
    ///
    /// Command failures are already reflected on their controls and are not
    /// returned.
    pub async fn voice_command(&self, transcript: &str) -> Navigation {
        match interpret(transcript) {
            VoiceIntent::Optimize => {
                if let Err(e) = self.optimize().await {
                    debug!("Voice optimize not completed: {}", e);
                }
                Navigation::Stay
            }
            VoiceIntent::Shield => {
                if let Err(e) = self.activate_shield().await {
                    debug!("Voice shield not completed: {}", e);
                }
                Navigation::Stay
            }
            VoiceIntent::Analysis => Navigation::GoTo(Route::Analysis),
            VoiceIntent::Echo(cmd) => {
                self.notifier.notify(format!("Heard: \"{cmd}\""));
                Navigation::Stay
            }
        }
    }

    /// Stops polling and clears the token; returns the login route
    pub fn logout(&self) -> Result<Route, AppError> {
        self.scheduler.shutdown();
        self.ctx.gate().logout()
    }

    /// Tears the page down; requests already in flight still complete
    pub fn close(&self) {
        self.scheduler.shutdown();
    }
}
