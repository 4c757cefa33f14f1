/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connect error, timeout or broken response body
    Network(reqwest::Error),
    /// Local I/O failure, e.g. while persisting the session file
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// The backend answered with a non-success status
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// `detail` field of the error body, when present
        detail: Option<String>,
    },
    /// The backend rejected the credentials or the bearer token
    Unauthorized,
    /// No credential token is stored
    MissingSession,
    /// The named command is already running
    CommandInFlight(String),
    /// Invalid input supplied by the caller
    InvalidInput(String),
    /// A response did not have the expected shape
    Deserialization(String),
}

impl AppError {
    /// `true` when the request never produced an HTTP answer
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Error detail reported by the backend, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status reported by the backend, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Api {
                status,
                detail: Some(detail),
            } => write!(f, "api error {status}: {detail}"),
            AppError::Api {
                status,
                detail: None,
            } => write!(f, "api error {status}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::MissingSession => write!(f, "no active session"),
            AppError::CommandInFlight(name) => write!(f, "command already in flight: {name}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
