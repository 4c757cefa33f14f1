use crate::support::{assert_close, optimization};
use algorhythm_client::model::portfolio::{OptimizationResult, RiskLevel};
use algorhythm_client::transport::http_client::decode;
use serde_json::json;

#[test]
fn test_optimization_result() {
    let result: OptimizationResult = decode(optimization()).unwrap();
    assert_eq!(result.strategy_name, "Quantum Momentum");
    assert_eq!(result.suggestions.len(), 2);
    assert_eq!(result.detailed_review, None);
    assert_close(&result.weight_percentages(), &[30.0, 20.0, 20.0, 20.0, 10.0]);
}

#[test]
fn test_optimization_result_absent_fields() {
    let result: OptimizationResult = decode(json!({"reasoning": null, "suggestions": "Hold"})).unwrap();
    assert!(result.reasoning.is_empty());
    assert!(result.weights.is_empty());
    assert_eq!(result.suggestions, vec!["Hold".to_string()]);
}

#[test]
fn test_risk_level() {
    assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
    assert!("extreme".parse::<RiskLevel>().is_err());
    assert_eq!(RiskLevel::default(), RiskLevel::Medium);
    assert_eq!(RiskLevel::Low.to_string(), "Low");
    assert_eq!(RiskLevel::Low.default_weights(), [60.0, 20.0, 10.0, 0.0, 10.0]);
    assert_eq!(RiskLevel::Medium.default_weights(), [40.0, 30.0, 20.0, 5.0, 5.0]);
    assert_eq!(RiskLevel::High.default_weights().iter().sum::<f64>(), 100.0);
    assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), json!("High"));
}
