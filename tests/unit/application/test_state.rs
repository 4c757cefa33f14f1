use algorhythm_client::application::notify::{Notifier, Utterance};
use algorhythm_client::application::state::{DEFAULT_AMOUNT, ProfileInput, UserProfile};
use algorhythm_client::model::portfolio::RiskLevel;

#[test]
fn test_default_profile() {
    let profile = UserProfile::default();
    assert_eq!(profile.amount, DEFAULT_AMOUNT);
    assert_eq!(profile.risk, RiskLevel::Medium);
    assert_eq!(profile.goal, "Wealth Generation");
    assert_eq!(profile.shield_payload(), "state_Medium_124500");
}

#[test]
fn test_invalid_input_keeps_current_values() {
    let mut profile = UserProfile::default();
    profile.apply(&ProfileInput {
        amount: Some("lots".to_string()),
        risk: Some("extreme".to_string()),
        goal: Some("   ".to_string()),
    });
    assert_eq!(profile, UserProfile::default());

    profile.apply(&ProfileInput {
        amount: Some("-5".to_string()),
        ..ProfileInput::default()
    });
    assert_eq!(profile.amount, DEFAULT_AMOUNT);
}

#[test]
fn test_valid_input_is_applied() {
    let mut profile = UserProfile::default();
    profile.apply(&ProfileInput {
        amount: Some("50000.5".to_string()),
        risk: Some("low".to_string()),
        goal: None,
    });
    assert_eq!(profile.amount, 50_000.5);
    assert_eq!(profile.risk, RiskLevel::Low);
    assert_eq!(profile.goal, "Wealth Generation");
    assert_eq!(profile.shield_payload(), "state_Low_50000.5");
}

#[test]
fn test_notifier_keeps_order() {
    let notifier = Notifier::new();
    notifier.notify("one");
    notifier.notify("two");
    let messages: Vec<_> = notifier.all().into_iter().map(|n| n.message).collect();
    assert_eq!(messages, vec!["one", "two"]);
    assert_eq!(notifier.last().unwrap().message, "two");
}

#[test]
fn test_utterance_rate() {
    let utterance = Utterance::new("hello");
    assert_eq!(utterance.rate, 0.95);
}
