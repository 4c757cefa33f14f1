use crate::common::{DEAD_BACKEND, config_for};
use algorhythm_client::error::AppError;
use algorhythm_client::transport::http_client::{ApiClient, HttpApiClient};
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

fn client(base_url: &str) -> HttpApiClient {
    HttpApiClient::new(Arc::new(config_for(base_url))).expect("Failed to build client")
}

#[test]
fn test_url_joining() {
    let api = client("http://localhost:8000/");
    assert_eq!(api.url("/api/news"), "http://localhost:8000/api/news");
    assert_eq!(api.url("api/news"), "http://localhost:8000/api/news");
    assert_eq!(api.url("http://other/x"), "http://other/x");
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/news/market")
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"overall_sentiment":"positive"}"#)
        .create_async()
        .await;

    let value = client(&server.url())
        .get("/api/news/market", Some("tok-1"))
        .await
        .unwrap();

    assert_json_eq!(value, json!({"overall_sentiment": "positive"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_without_bearer_sends_no_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/market-status")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"is_open":false,"status":"CLOSED"}"#)
        .create_async()
        .await;

    client(&server.url())
        .get("/api/market-status", None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/compare")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"stockA": "TCS", "stockB": "INFY"})))
        .with_status(200)
        .with_body(r#"{"winner":"TCS"}"#)
        .create_async()
        .await;

    let body = json!({"stockA": "TCS", "stockB": "INFY"});
    let value = client(&server.url())
        .post_json("/api/compare", &body, None)
        .await
        .unwrap();

    assert_eq!(value["winner"], "TCS");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/optimize")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let err = client(&server.url())
        .get("/api/optimize", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Api { status, detail: None } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_unauthorized_without_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/news/feed")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .with_status(401)
        .create_async()
        .await;

    let err = client(&server.url())
        .get("/api/news/feed?limit=50", Some("expired"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/quantum-shield")
        .with_status(204)
        .create_async()
        .await;

    let value = client(&server.url())
        .post_json("/api/quantum-shield", &json!({"payload": "x"}), None)
        .await
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let err = client(DEAD_BACKEND)
        .get("/api/market-status", None)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
