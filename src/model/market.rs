use crate::model::serialization::{lenient_f64, null_as_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/live/{symbol}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Symbol echoed by the backend
    #[serde(default)]
    pub symbol: Option<String>,
    /// Last price
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Absolute change since previous close
    #[serde(default, deserialize_with = "lenient_f64")]
    pub change: f64,
    /// Percentage change since previous close
    #[serde(default)]
    pub percent: Option<f64>,
    /// Currency sign, e.g. `₹`
    #[serde(default)]
    pub currency: Option<String>,
    /// Set to `simulated` when the backend could not reach its data source
    #[serde(default)]
    pub note: Option<String>,
}

impl Quote {
    /// `true` when the backend served a simulated price
    #[must_use]
    pub fn is_simulated(&self) -> bool {
        self.note.as_deref() == Some("simulated")
    }
}

/// Prices of all watched symbols, taken in one poll tick
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketSnapshot {
    /// Quote per symbol
    pub quotes: BTreeMap<String, Quote>,
    /// When the tick completed
    pub taken_at: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// Builds a snapshot stamped with the current time
    #[must_use]
    pub fn new(quotes: BTreeMap<String, Quote>) -> Self {
        Self {
            quotes,
            taken_at: Some(Utc::now()),
        }
    }

    /// Quote for `symbol`
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    /// Number of symbols in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// `true` when no quote is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Response of `GET /api/market-status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketStatus {
    /// Whether the exchange is open
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_open: bool,
    /// Human readable status, e.g. `OPEN` or `CLOSED`
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}
