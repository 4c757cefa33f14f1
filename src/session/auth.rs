/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Authentication against `/api/auth/login`
//!
//! A successful login stores the returned token; nothing is stored on failure.

use crate::application::config::Config;
use crate::constants::LOGIN_PATH;
use crate::error::AppError;
use crate::model::auth::{Credentials, LoginResponse};
use crate::session::gate::Session;
use crate::session::store::TokenStore;
use crate::transport::http_client::{ApiClient, decode};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication manager
pub struct Auth {
    api: Arc<dyn ApiClient>,
    store: Arc<dyn TokenStore>,
    config: Arc<Config>,
}

impl Auth {
    /// Creates an authenticator storing tokens in `store`
    pub fn new(api: Arc<dyn ApiClient>, store: Arc<dyn TokenStore>, config: Arc<Config>) -> Self {
        Self { api, store, config }
    }

    /// Logs in with `credentials` and stores the returned token
    ///
    /// # Returns
    /// * `Ok(Session)` - Token stored
    /// * `Err(AppError::Api)` / `Err(AppError::Unauthorized)` - The backend rejected the login
    /// * `Err(AppError::Network)` - The backend could not be reached
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AppError::InvalidInput(
                "email and password are required".to_string(),
            ));
        }

        debug!("Sending login request for {}", credentials.email);
        let form = [
            ("email", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
        ];

        let value = match self.api.post_form(LOGIN_PATH, &form).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Login failed: {}", e);
                return Err(e);
            }
        };

        let response: LoginResponse = decode(value)?;
        if response.access_token.is_empty() {
            return Err(AppError::Deserialization(
                "access_token missing from login response".to_string(),
            ));
        }

        self.store.set_token(&response.access_token)?;
        info!("✓ Login successful: {}", credentials.email);
        Ok(Session::new(response.access_token))
    }

    /// Logs in with the configured demo account
    pub async fn login_demo(&self) -> Result<Session, AppError> {
        let credentials = Credentials::new(
            self.config.session.demo_email.clone(),
            self.config.session.demo_password.clone(),
        );
        self.login(&credentials).await
    }

    /// Clears the stored token
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear_token()?;
        info!("Session cleared");
        Ok(())
    }
}
