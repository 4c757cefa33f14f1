use algorhythm_client::application::config::Config;
use algorhythm_client::application::widget::ApplyPolicy;
use algorhythm_client::utils::config::{get_env_list, get_env_or_default, get_env_or_none, split_symbols};
use std::env;
use std::time::Duration;

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe {
        env::set_var("ALGO_TEST_PARSED_U64", "42");
    }
    assert_eq!(get_env_or_default("ALGO_TEST_PARSED_U64", 7u64), 42);
    unsafe {
        env::remove_var("ALGO_TEST_PARSED_U64");
    }
}

#[test]
fn test_get_env_or_default_falls_back_on_garbage() {
    unsafe {
        env::set_var("ALGO_TEST_GARBAGE_U64", "forty-two");
    }
    assert_eq!(get_env_or_default("ALGO_TEST_GARBAGE_U64", 7u64), 7);
    assert_eq!(get_env_or_default("ALGO_TEST_UNSET_U64", 9u64), 9);
    unsafe {
        env::remove_var("ALGO_TEST_GARBAGE_U64");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("ALGO_TEST_POLICY", "last-response");
    }
    assert_eq!(
        get_env_or_none::<ApplyPolicy>("ALGO_TEST_POLICY"),
        Some(ApplyPolicy::LastResponse)
    );
    assert_eq!(get_env_or_none::<u32>("ALGO_TEST_NOT_SET"), None);
    unsafe {
        env::remove_var("ALGO_TEST_POLICY");
    }
}

#[test]
fn test_watchlist_parsing() {
    assert_eq!(
        split_symbols(" nifty, ,tcs ,RELIANCE,"),
        vec!["NIFTY", "TCS", "RELIANCE"]
    );
    assert_eq!(
        get_env_list("ALGO_TEST_WATCHLIST_UNSET", "a,b"),
        vec!["A", "B"]
    );
}

#[test]
fn test_config_helpers() {
    let config = Config::default().with_base_url("http://backend:9000/");
    assert_eq!(config.api.base_url, "http://backend:9000");
    assert_eq!(config.timeout(), Duration::from_secs(config.api.timeout));
    assert_eq!(
        config.polling.sentiment(),
        Duration::from_secs(config.polling.sentiment_secs)
    );
    assert_eq!(
        config.commands.optimize_delay(),
        Duration::from_millis(config.commands.optimize_delay_ms)
    );
}
