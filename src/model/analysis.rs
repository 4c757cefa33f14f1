use crate::model::serialization::{lenient_f64, lenient_string, lenient_string_list};
use serde::{Deserialize, Serialize};

/// Response of `GET /api/predict/{symbol}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Forecast, a label or a target price depending on the backend version
    #[serde(default, deserialize_with = "lenient_string")]
    pub prediction: String,
    /// Narrative review
    #[serde(default, deserialize_with = "lenient_string")]
    pub review: String,
    /// Reasons to pick the stock
    #[serde(default, deserialize_with = "lenient_string")]
    pub why_choose: String,
    /// Trust badge label
    #[serde(default, deserialize_with = "lenient_string")]
    pub trust_badge: String,
    /// Confidence as reported by the backend
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
}

/// Body of `POST /api/compare`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareRequest {
    /// First symbol
    #[serde(rename = "stockA")]
    pub stock_a: String,
    /// Second symbol
    #[serde(rename = "stockB")]
    pub stock_b: String,
}

/// Response of `POST /api/compare`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    /// Preferred symbol
    #[serde(default, deserialize_with = "lenient_string")]
    pub winner: String,
    /// Confidence as reported by the backend
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
    /// Narrative analysis
    #[serde(default, deserialize_with = "lenient_string")]
    pub detailed_analysis: String,
    /// Supporting points
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub proof: Vec<String>,
}
