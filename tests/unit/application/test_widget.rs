use crate::support::{MockApi, Reply};
use algorhythm_client::application::fetcher::{Feed, Refresh};
use algorhythm_client::application::widget::{ApplyPolicy, Widget};
use algorhythm_client::constants::MARKET_STATUS_PATH;
use algorhythm_client::error::AppError;
use algorhythm_client::model::market::MarketStatus;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_latest_request_discards_stale_response() {
    let widget: Widget<&str> = Widget::new("probe", ApplyPolicy::LatestRequest);
    let first = widget.ticket();
    let second = widget.ticket();

    assert!(widget.apply(second, "second").await);
    assert!(!widget.apply(first, "first").await);
    assert_eq!(widget.get().await, Some("second"));
}

#[tokio::test]
async fn test_last_response_applies_in_arrival_order() {
    let widget: Widget<&str> = Widget::new("probe", ApplyPolicy::LastResponse);
    let first = widget.ticket();
    let second = widget.ticket();

    assert!(widget.apply(second, "second").await);
    assert!(widget.apply(first, "first").await);
    assert_eq!(widget.get().await, Some("first"));
}

#[tokio::test]
async fn test_failure_keeps_previous_value() {
    let widget = Widget::with_value("probe", ApplyPolicy::LatestRequest, 7u32);
    widget
        .record_failure(&AppError::InvalidInput("boom".to_string()))
        .await;

    assert_eq!(widget.get().await, Some(7));
    let status = widget.status().await;
    assert_eq!(status.failures, 1);
    assert!(status.last_error.unwrap().contains("boom"));
}

#[tokio::test]
async fn test_subscribers_see_new_versions() {
    let widget: Widget<u32> = Widget::new("probe", ApplyPolicy::LatestRequest);
    let mut rx = widget.subscribe();
    widget.set(1).await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), 1);
    widget.modify(|v| *v = v.map(|x| x + 1)).await;
    assert_eq!(*rx.borrow_and_update(), 2);
    assert_eq!(widget.get().await, Some(2));
}

async fn overlapping_refreshes(policy: ApplyPolicy) -> MarketStatus {
    let api = MockApi::new();
    api.on(
        MARKET_STATUS_PATH,
        Reply::delayed(
            Duration::from_secs(5),
            Reply::Json(json!({"is_open": false, "status": "STALE"})),
        ),
    )
    .on(
        MARKET_STATUS_PATH,
        Reply::Json(json!({"is_open": true, "status": "FRESH"})),
    );

    let widget = Widget::new("market_status", policy);
    let feed = Arc::new(Feed::<MarketStatus>::new(
        api.clone(),
        MARKET_STATUS_PATH,
        None,
        widget.clone(),
    ));

    let slow = feed.clone();
    let handle = tokio::spawn(async move { slow.refresh().await });
    while api.count(MARKET_STATUS_PATH) == 0 {
        tokio::task::yield_now().await;
    }

    feed.refresh().await.unwrap();
    handle.await.unwrap().unwrap();
    widget.get().await.unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_feed_out_of_order_latest_request_wins() {
    let status = overlapping_refreshes(ApplyPolicy::LatestRequest).await;
    assert_eq!(status.status, "FRESH");
}

#[tokio::test(start_paused = true)]
async fn test_feed_out_of_order_last_response_wins() {
    let status = overlapping_refreshes(ApplyPolicy::LastResponse).await;
    assert_eq!(status.status, "STALE");
}

#[test]
fn test_apply_policy_parse() {
    assert_eq!("latest-request".parse::<ApplyPolicy>(), Ok(ApplyPolicy::LatestRequest));
    assert_eq!("LAST_RESPONSE".parse::<ApplyPolicy>(), Ok(ApplyPolicy::LastResponse));
    assert!("whatever".parse::<ApplyPolicy>().is_err());
    assert_eq!(ApplyPolicy::default().to_string(), "latest-request");
}
