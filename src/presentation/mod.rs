/// Prices, valuation and quote direction
pub mod market;
/// Sentiment percentages and article ages
pub mod news;
/// Sample portfolio fixtures
pub mod portfolio;
/// Terminal tables
pub mod table;

pub use market::{Direction, format_price, format_valuation, group_thousands};
pub use news::{format_polarity, format_score, relative_time};
pub use portfolio::{
    Recommendation, RiskMetric, sample_holdings, sample_recommendations, sample_risk_metrics,
    total_value,
};
