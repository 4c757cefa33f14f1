use crate::model::serialization::{lenient_f64, lenient_string, lenient_string_list, null_as_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Response of `GET /api/optimize`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptimizationResult {
    /// Name of the proposed strategy
    #[serde(default, deserialize_with = "null_as_default")]
    pub strategy_name: String,
    /// Predicted alpha, in percent
    #[serde(default, deserialize_with = "lenient_f64")]
    pub alpha: f64,
    /// Proposed weights as fractions of one
    #[serde(default, deserialize_with = "null_as_default")]
    pub weights: Vec<f64>,
    /// One-sentence rationale
    #[serde(default, deserialize_with = "lenient_string")]
    pub reasoning: String,
    /// Follow-up suggestions
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub suggestions: Vec<String>,
    /// Longer review, only sent by newer backends
    #[serde(default)]
    pub detailed_review: Option<String>,
}

impl OptimizationResult {
    /// Weights scaled to percentages for the allocation chart
    #[must_use]
    pub fn weight_percentages(&self) -> Vec<f64> {
        self.weights.iter().map(|w| w * 100.0).collect()
    }
}

/// Body of `POST /api/quantum-shield`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShieldRequest {
    /// Opaque state string, `state_{risk}_{amount}`
    pub payload: String,
}

/// Response of `POST /api/quantum-shield`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShieldResponse {
    /// Name of the algorithm the backend used
    #[serde(default, deserialize_with = "null_as_default")]
    pub algorithm: String,
}

/// Risk appetite chosen at onboarding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Capital preservation
    Low,
    /// Balanced
    #[default]
    Medium,
    /// Growth
    High,
}

impl RiskLevel {
    /// Allocation weights in percent shown before any optimization ran
    ///
    /// Buckets: bluechip, mid-cap, small-cap, crypto, quantum assets.
    #[must_use]
    pub fn default_weights(&self) -> [f64; 5] {
        match self {
            RiskLevel::Low => [60.0, 20.0, 10.0, 0.0, 10.0],
            RiskLevel::Medium => [40.0, 30.0, 20.0, 5.0, 5.0],
            RiskLevel::High => [20.0, 20.0, 30.0, 20.0, 10.0],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{s}")
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    /// Risk appetite
    pub risk: RiskLevel,
}

/// Response of `POST /api/analyze`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AllocationAdvice {
    /// Asset classes, in the order of `weights`
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub allocation: Vec<String>,
    /// Weights in percent
    #[serde(default, deserialize_with = "null_as_default")]
    pub weights: Vec<f64>,
    /// Short label of the profile
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

/// Strategy line shown under the optimization results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StrategySummary {
    /// Strategy name
    pub name: String,
    /// Predicted alpha in percent
    pub alpha: f64,
    /// Goal the strategy was calibrated for
    pub goal: String,
}

/// A row of the rebalance ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    /// Transaction id, `0x` followed by hex digits
    pub tx_id: String,
    /// Action label
    pub action: String,
    /// When the entry was recorded
    pub at: DateTime<Utc>,
    /// Status label
    pub status: String,
}

/// A holding of the sample portfolio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    /// Ticker
    pub symbol: String,
    /// Company name
    pub name: String,
    /// Position value
    pub value: f64,
    /// Fraction of the portfolio
    pub weight: f64,
}
