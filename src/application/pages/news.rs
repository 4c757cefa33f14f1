//! News page and the per-stock news panel

use crate::application::context::AppContext;
use crate::application::fetcher::{Feed, Refresh};
use crate::application::pages::{PageEntry, normalize_symbol};
use crate::application::scheduler::PollingScheduler;
use crate::application::widget::Widget;
use crate::constants::{MARKET_SENTIMENT_PATH, NEWS_FEED_PATH, STOCK_NEWS_PATH, STOCK_NEWS_VISIBLE};
use crate::error::AppError;
use crate::model::news::{Article, MarketSentiment, NewsList};
use crate::session::gate::GateDecision;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

/// Full news feed with the market sentiment panel
pub struct NewsPage {
    feed: Arc<Feed<NewsList>>,
    sentiment: Arc<Feed<MarketSentiment>>,
    refreshing: AtomicBool,
    scheduler: PollingScheduler,
}

impl NewsPage {
    /// Opens the page: the feed is fetched once, the sentiment panel is polled
    pub async fn open(ctx: &AppContext) -> PageEntry<NewsPage> {
        let session = match ctx.gate().check() {
            GateDecision::Proceed(session) => session,
            GateDecision::Redirect(route) => return PageEntry::Redirect(route),
        };
        let policy = ctx.config.apply_policy;
        let bearer = Some(session.token().to_string());

        let feed = Arc::new(Feed::new(
            ctx.api.clone(),
            format!("{NEWS_FEED_PATH}?limit={}", ctx.config.news_feed_limit),
            bearer.clone(),
            Widget::new("news_feed", policy),
        ));
        let sentiment = Arc::new(Feed::new(
            ctx.api.clone(),
            MARKET_SENTIMENT_PATH,
            bearer,
            Widget::new("market_sentiment", policy),
        ));

        let mut scheduler = PollingScheduler::new();
        // The feed only refreshes on demand.
        scheduler.register(feed.clone(), Duration::ZERO);
        scheduler.register(sentiment.clone(), ctx.config.polling.sentiment());

        let page = NewsPage {
            feed,
            sentiment,
            refreshing: AtomicBool::new(false),
            scheduler,
        };
        page.scheduler.prime().await;
        page.scheduler.start();
        PageEntry::Ready(page)
    }

    /// Articles currently shown
    pub async fn articles(&self) -> Vec<Article> {
        self.feed
            .widget()
            .get()
            .await
            .map(|list| list.news)
            .unwrap_or_default()
    }

    /// Sentiment panel
    pub async fn sentiment(&self) -> Option<MarketSentiment> {
        self.sentiment.widget().get().await
    }

    /// `true` while a manual refresh runs
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::SeqCst)
    }

    /// Re-fetches the feed and the sentiment panel
    ///
    /// Returns the first failure; the affected widget keeps its previous state.
    pub async fn refresh(&self) -> Result<(), AppError> {
        self.refreshing.store(true, Ordering::SeqCst);
        let (feed, sentiment) = tokio::join!(self.feed.refresh(), self.sentiment.refresh());
        self.refreshing.store(false, Ordering::SeqCst);
        debug!("News refreshed");
        feed.and(sentiment)
    }

    /// Stops polling
    pub fn close(&self) {
        self.scheduler.shutdown();
    }
}

/// News panel for a single stock
pub struct StockNewsPanel {
    symbol: String,
    feed: Feed<NewsList>,
    refreshing: AtomicBool,
}

impl StockNewsPanel {
    /// Opens the panel for `symbol` and loads it once
    ///
    /// A blank symbol fails with `AppError::InvalidInput` before any request.
    pub async fn open(
        ctx: &AppContext,
        symbol: &str,
    ) -> Result<PageEntry<StockNewsPanel>, AppError> {
        let symbol = normalize_symbol(symbol)?;
        let session = match ctx.gate().check() {
            GateDecision::Proceed(session) => session,
            GateDecision::Redirect(route) => return Ok(PageEntry::Redirect(route)),
        };
        let feed = Feed::new(
            ctx.api.clone(),
            format!("{STOCK_NEWS_PATH}/{symbol}"),
            Some(session.token().to_string()),
            Widget::new("stock_news", ctx.config.apply_policy),
        );

        let panel = StockNewsPanel {
            symbol,
            feed,
            refreshing: AtomicBool::new(false),
        };
        let _ = panel.feed.refresh().await;
        Ok(PageEntry::Ready(panel))
    }

    /// Symbol shown
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Every article returned by the backend
    pub async fn articles(&self) -> Vec<Article> {
        self.feed
            .widget()
            .get()
            .await
            .map(|list| list.news)
            .unwrap_or_default()
    }

    /// The articles shown in the panel
    pub async fn visible(&self) -> Vec<Article> {
        let mut articles = self.articles().await;
        articles.truncate(STOCK_NEWS_VISIBLE);
        articles
    }

    /// `true` while a manual refresh runs
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::SeqCst)
    }

    /// Re-fetches the stock news
    pub async fn refresh(&self) -> Result<(), AppError> {
        self.refreshing.store(true, Ordering::SeqCst);
        let outcome = self.feed.refresh().await;
        self.refreshing.store(false, Ordering::SeqCst);
        outcome
    }
}
