use crate::model::serialization::value_as_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Opaque credential token
    #[serde(default)]
    pub access_token: String,
    /// Token type, `bearer` for the current backend
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body returned by the backend on non-success statuses
///
/// `detail` is usually a message string; validation errors carry a list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Raw detail value
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Detail rendered as text, `None` when absent or empty
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        let text = value_as_text(&self.detail);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Login form fields, sent form-encoded
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
