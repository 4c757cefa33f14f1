/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! HTTP transport towards the ALGORHYTHM backend
//!
//! Everything above this module talks to the backend through [`ApiClient`], which
//! returns raw JSON; callers decode it into their typed models. Tests substitute
//! an in-memory implementation.

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{RequestBody, make_http_request, read_json};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;

/// Requests the client can issue
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `GET path`, with an optional bearer token
    async fn get(&self, path: &str, bearer: Option<&str>) -> Result<Value, AppError>;

    /// `POST path` with a JSON body
    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value, AppError>;

    /// `POST path` with a form-encoded body, unauthenticated
    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<Value, AppError>;
}

/// [`ApiClient`] backed by `reqwest`
///
/// Every request carries the configured timeout; a hung backend surfaces as
/// `AppError::Network`.
pub struct HttpApiClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl HttpApiClient {
    /// Creates a client for `config.api.base_url`
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Full URL for `path`; absolute URLs are used unchanged
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.api.base_url, path)
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: RequestBody<'_>,
    ) -> Result<Value, AppError> {
        let url = self.url(path);
        let response =
            make_http_request(&self.http_client, &self.rate_limiter, method, &url, bearer, body)
                .await?;
        read_json(response).await
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str, bearer: Option<&str>) -> Result<Value, AppError> {
        self.send(Method::GET, path, bearer, RequestBody::Empty).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value, AppError> {
        self.send(Method::POST, path, bearer, RequestBody::Json(body))
            .await
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<Value, AppError> {
        self.send(Method::POST, path, None, RequestBody::Form(form))
            .await
    }
}

/// Decodes a JSON value into a typed model
pub fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AppError> {
    Ok(serde_json::from_value(value)?)
}
