use crate::model::serialization::{lenient_f64, null_as_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label attached to an article or to the whole market
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive tone
    Positive,
    /// Negative tone
    Negative,
    /// Neutral or unrecognised tone
    #[default]
    #[serde(other)]
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        write!(f, "{s}")
    }
}

/// Per-article sentiment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    /// Polarity in `[-1, 1]`
    #[serde(default, deserialize_with = "lenient_f64")]
    pub polarity: f64,
    /// Label derived by the backend
    #[serde(
        default,
        rename = "sentiment",
        alias = "label",
        deserialize_with = "null_as_default"
    )]
    pub label: SentimentLabel,
}

/// Publisher of an article
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleSource {
    /// Publisher name
    #[serde(default)]
    pub name: Option<String>,
}

/// A news article as returned by every news endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Headline
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Summary
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article
    #[serde(default)]
    pub url: Option<String>,
    /// Publication time as sent by the backend (ISO 8601)
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Publisher
    #[serde(default)]
    pub source: Option<ArticleSource>,
    /// Sentiment, when the backend scored the article
    #[serde(default, alias = "sentiment")]
    pub sentiment_analysis: Option<SentimentScore>,
}

impl Article {
    /// Publication time, `None` when absent or unparsable
    #[must_use]
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Publisher name, empty when unknown
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or_default()
    }

    /// Sentiment label, neutral when the article was not scored
    #[must_use]
    pub fn label(&self) -> SentimentLabel {
        self.sentiment_analysis
            .as_ref()
            .map(|s| s.label)
            .unwrap_or_default()
    }
}

/// Response of `GET /api/news/feed` and `GET /api/news/stock/{symbol}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsList {
    /// Symbol, present on stock news
    #[serde(default)]
    pub symbol: Option<String>,
    /// Articles in backend order
    #[serde(default, deserialize_with = "null_as_default")]
    pub news: Vec<Article>,
    /// Total number of articles known to the backend
    #[serde(default)]
    pub total_count: Option<u32>,
}

/// Response of `GET /api/news/market`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketSentiment {
    /// Overall label
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_sentiment: SentimentLabel,
    /// Overall score in `[-1, 1]`
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sentiment_score: f64,
    /// Number of articles the score is based on
    #[serde(default, deserialize_with = "null_as_default")]
    pub news_count: u32,
    /// Articles scored positive
    #[serde(default, deserialize_with = "null_as_default")]
    pub positive_count: u32,
    /// Articles scored negative
    #[serde(default, deserialize_with = "null_as_default")]
    pub negative_count: u32,
    /// Articles scored neutral
    #[serde(default, deserialize_with = "null_as_default")]
    pub neutral_count: u32,
    /// Most recent scored articles
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_news: Vec<Article>,
}

/// Response of the legacy `GET /api/news`, which changed shape between versions
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HeadlinesResponse {
    /// `{ "news": [...], "mood": "..." }`
    Envelope {
        /// Articles
        #[serde(default)]
        news: Vec<Article>,
        /// Overall mood label
        #[serde(default)]
        mood: Option<String>,
    },
    /// Bare article array
    Bare(Vec<Article>),
}

/// Normalized legacy headlines
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Headlines {
    /// Articles
    pub articles: Vec<Article>,
    /// Overall mood, when the backend reports one
    pub mood: Option<String>,
}

impl From<HeadlinesResponse> for Headlines {
    fn from(value: HeadlinesResponse) -> Self {
        match value {
            HeadlinesResponse::Envelope { news, mood } => Headlines {
                articles: news,
                mood,
            },
            HeadlinesResponse::Bare(articles) => Headlines {
                articles,
                mood: None,
            },
        }
    }
}
