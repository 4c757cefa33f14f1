/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::auth::ErrorBody;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

/// Body of an outgoing request
#[derive(Debug, Clone, Copy)]
pub enum RequestBody<'a> {
    /// No body
    Empty,
    /// JSON body
    Json(&'a Value),
    /// `application/x-www-form-urlencoded` body
    Form(&'a [(&'a str, &'a str)]),
}

/// Sends one request to the backend, throttled by the shared rate limiter
///
/// No retry is attempted: a transport failure or non-success status is
/// returned to the caller, which decides whether to surface or log it.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared limiter every request waits on first
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `bearer` - Optional token sent as `Authorization: Bearer <token>`
/// * `body` - Request body
///
/// # Returns
///
/// * `Ok(Response)` - Successful (2xx) HTTP response
/// * `Err(AppError::Unauthorized)` - 401 without an error detail
/// * `Err(AppError::Api)` - Any other non-success status, with the backend `detail` if present
/// * `Err(AppError::Network)` - Connect error, timeout or broken body
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::GET,
///     "http://localhost:8000/api/news/market",
///     Some("token"),
///     RequestBody::Empty,
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: RequestBody<'_>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    request = match body {
        RequestBody::Empty => request,
        RequestBody::Json(value) => request.json(value),
        RequestBody::Form(fields) => request.form(fields),
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body_text)
        .ok()
        .and_then(|b| b.detail_text());

    if status == StatusCode::UNAUTHORIZED && detail.is_none() {
        error!("Unauthorized: {}", body_text);
        return Err(AppError::Unauthorized);
    }

    error!("Request failed with status {}: {}", status, body_text);
    Err(AppError::Api { status, detail })
}

/// Reads a successful response body as JSON
///
/// An empty body decodes as `null` so that endpoints answering `204` still succeed.
pub async fn read_json(response: Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
