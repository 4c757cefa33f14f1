use crate::support::offline_error;
use algorhythm_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_missing_session() {
    assert_eq!(AppError::MissingSession.to_string(), "no active session");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::BAD_REQUEST,
        detail: Some("bad risk".to_string()),
    };
    assert_eq!(error.to_string(), "api error 400 Bad Request: bad risk");
    assert_eq!(error.detail(), Some("bad risk"));
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));

    let error = AppError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        detail: None,
    };
    assert!(error.to_string().contains("500"));
    assert_eq!(error.detail(), None);
}

#[test]
fn test_app_error_display_command_in_flight() {
    let error = AppError::CommandInFlight("optimize".to_string());
    assert_eq!(error.to_string(), "command already in flight: optimize");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("symbol is required".to_string());
    assert_eq!(error.to_string(), "invalid input: symbol is required");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_transport_classification() {
    let network = AppError::from(offline_error());
    assert!(network.is_transport());
    assert!(network.to_string().starts_with("network error"));
    assert!(std::error::Error::source(&network).is_some());

    assert!(!AppError::Unauthorized.is_transport());
    assert_eq!(AppError::Unauthorized.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_from_json_and_io() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(AppError::from(json_err), AppError::Json(_)));

    let io_err = std::io::Error::other("disk full");
    let error = AppError::from(io_err);
    assert_eq!(error.to_string(), "io error: disk full");
}
