//! Illustrative portfolio data
//!
//! Holdings, recommendations and risk metrics are static samples; nothing here
//! is fetched or reconciled against optimization results.

use crate::model::portfolio::Holding;
use serde::{Deserialize, Serialize};

fn holding(symbol: &str, name: &str, value: f64, weight: f64) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        value,
        weight,
    }
}

/// Sample holdings shown in the portfolio overview
#[must_use]
pub fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("AAPL", "Apple Inc.", 25_000.0, 0.25),
        holding("GOOGL", "Alphabet Inc.", 20_000.0, 0.20),
        holding("MSFT", "Microsoft Corp.", 18_000.0, 0.18),
        holding("AMZN", "Amazon.com Inc.", 15_000.0, 0.15),
        holding("TSLA", "Tesla Inc.", 12_000.0, 0.12),
        holding("META", "Meta Platforms", 10_000.0, 0.10),
    ]
}

/// Sum of the holdings' values
#[must_use]
pub fn total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.value).sum()
}

/// A sample trade recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Ticker
    pub symbol: String,
    /// `BUY`, `SELL` or `HOLD`
    pub action: String,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// One-line rationale
    pub reasoning: String,
}

/// Sample recommendations
#[must_use]
pub fn sample_recommendations() -> Vec<Recommendation> {
    [
        ("AAPL", "HOLD", 0.85, "Strong fundamentals, maintain position"),
        ("GOOGL", "BUY", 0.78, "Undervalued, good entry point"),
        ("TSLA", "SELL", 0.72, "High volatility, consider reducing exposure"),
        ("MSFT", "BUY", 0.82, "AI growth potential, increase allocation"),
    ]
    .into_iter()
    .map(|(symbol, action, confidence, reasoning)| Recommendation {
        symbol: symbol.to_string(),
        action: action.to_string(),
        confidence,
        reasoning: reasoning.to_string(),
    })
    .collect()
}

/// A sample risk metric with its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetric {
    /// Metric name
    pub name: String,
    /// Current value
    pub value: f64,
    /// Target value
    pub target: f64,
    /// Whether the metric is within target
    pub good: bool,
}

impl RiskMetric {
    /// Signed value with two decimals; percentages get a `%` suffix
    #[must_use]
    pub fn formatted(&self) -> String {
        let sign = if self.value > 0.0 { "+" } else { "" };
        let unit = if self.name.contains("Ratio") || self.name == "Alpha" {
            ""
        } else {
            "%"
        };
        format!("{sign}{:.2}{unit}", self.value)
    }

    /// Progress towards the target in percent, capped at 100
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target == 0.0 {
            return 100.0;
        }
        (self.value.abs() / self.target.abs() * 100.0).min(100.0)
    }
}

/// Sample risk metrics
#[must_use]
pub fn sample_risk_metrics() -> Vec<RiskMetric> {
    [
        ("Sharpe Ratio", 1.85, 1.5),
        ("Sortino Ratio", 2.12, 1.8),
        ("Beta", 0.95, 1.0),
        ("Alpha", 0.08, 0.05),
        ("VaR (95%)", -2.3, -5.0),
        ("Max Drawdown", -8.5, -15.0),
        ("Volatility", 12.5, 15.0),
    ]
    .into_iter()
    .map(|(name, value, target)| RiskMetric {
        name: name.to_string(),
        value,
        target,
        good: true,
    })
    .collect()
}
