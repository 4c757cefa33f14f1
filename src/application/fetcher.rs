//! Data fetchers: one per widget, each turning a backend response into view state

use crate::application::widget::Widget;
use crate::constants::LIVE_QUOTE_PATH;
use crate::error::AppError;
use crate::model::market::{MarketSnapshot, Quote};
use crate::transport::http_client::{ApiClient, decode};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Something that can re-fetch its data and update its widget
#[async_trait]
pub trait Refresh: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Fetches once and applies the result
    ///
    /// On failure the widget keeps its previous value and the error is returned.
    async fn refresh(&self) -> Result<(), AppError>;
}

/// Converts the raw JSON body into the widget's value
pub type Decoder<T> = fn(Value) -> Result<T, AppError>;

/// Fetcher for a single `GET` endpoint
pub struct Feed<T> {
    api: Arc<dyn ApiClient>,
    path: String,
    bearer: Option<String>,
    widget: Widget<T>,
    decoder: Decoder<T>,
}

impl<T> Feed<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Feed decoding the body directly into `T`
    pub fn new(
        api: Arc<dyn ApiClient>,
        path: impl Into<String>,
        bearer: Option<String>,
        widget: Widget<T>,
    ) -> Self {
        Self::with_decoder(api, path, bearer, widget, decode::<T>)
    }
}

impl<T> Feed<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Feed with a custom decoder, for endpoints whose shape needs normalizing
    pub fn with_decoder(
        api: Arc<dyn ApiClient>,
        path: impl Into<String>,
        bearer: Option<String>,
        widget: Widget<T>,
        decoder: Decoder<T>,
    ) -> Self {
        Self {
            api,
            path: path.into(),
            bearer,
            widget,
            decoder,
        }
    }

    /// Widget updated by this feed
    #[must_use]
    pub fn widget(&self) -> &Widget<T> {
        &self.widget
    }
}

#[async_trait]
impl<T> Refresh for Feed<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.widget.name()
    }

    async fn refresh(&self) -> Result<(), AppError> {
        let ticket = self.widget.ticket();
        let outcome = self
            .api
            .get(&self.path, self.bearer.as_deref())
            .await
            .and_then(self.decoder);

        match outcome {
            Ok(value) => {
                let applied = self.widget.apply(ticket, value).await;
                debug!("{}: refreshed (applied: {})", self.widget.name(), applied);
                Ok(())
            }
            Err(e) => {
                self.widget.record_failure(&e).await;
                Err(e)
            }
        }
    }
}

/// Price ticker: one request per watched symbol, applied as a single snapshot
///
/// A tick is all-or-nothing; if any symbol fails the previous snapshot stays.
pub struct QuoteBoard {
    api: Arc<dyn ApiClient>,
    symbols: Vec<String>,
    widget: Widget<MarketSnapshot>,
}

impl QuoteBoard {
    /// Ticker over `symbols`
    pub fn new(api: Arc<dyn ApiClient>, symbols: Vec<String>, widget: Widget<MarketSnapshot>) -> Self {
        Self {
            api,
            symbols,
            widget,
        }
    }

    /// Watched symbols
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    async fn fetch_all(&self) -> Result<MarketSnapshot, AppError> {
        let mut quotes = BTreeMap::new();
        for symbol in &self.symbols {
            let path = format!("{LIVE_QUOTE_PATH}/{symbol}");
            let quote: Quote = decode(self.api.get(&path, None).await?)?;
            quotes.insert(symbol.clone(), quote);
        }
        Ok(MarketSnapshot::new(quotes))
    }
}

#[async_trait]
impl Refresh for QuoteBoard {
    fn name(&self) -> &str {
        self.widget.name()
    }

    async fn refresh(&self) -> Result<(), AppError> {
        let ticket = self.widget.ticket();
        match self.fetch_all().await {
            Ok(snapshot) => {
                self.widget.apply(ticket, snapshot).await;
                Ok(())
            }
            Err(e) => {
                self.widget.record_failure(&e).await;
                Err(e)
            }
        }
    }
}
