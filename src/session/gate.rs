use crate::application::pages::Route;
use crate::session::store::TokenStore;
use std::sync::Arc;
use tracing::{debug, info};

/// A credential token found in the store
///
/// Only its presence is checked; it is never validated or refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wraps a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Token to send as bearer credential
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Outcome of entering a protected page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// A token is stored; the page may load
    Proceed(Session),
    /// No token; navigate away and do nothing else
    Redirect(Route),
}

/// Presence check run before every protected page
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn TokenStore>,
}

impl SessionGate {
    /// Gate over `store`
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Checks for a stored token
    #[must_use]
    pub fn check(&self) -> GateDecision {
        match self.store.token().filter(|t| !t.is_empty()) {
            Some(token) => GateDecision::Proceed(Session::new(token)),
            None => {
                debug!("No stored token, redirecting to {}", Route::Login);
                GateDecision::Redirect(Route::Login)
            }
        }
    }

    /// Clears the token and returns the page to navigate to
    pub fn logout(&self) -> Result<Route, crate::error::AppError> {
        self.store.clear_token()?;
        info!("Logged out");
        Ok(Route::Login)
    }

    /// Whether the disclaimer was accepted
    #[must_use]
    pub fn disclaimer_accepted(&self) -> bool {
        self.store.disclaimer_accepted()
    }

    /// Records disclaimer acceptance
    pub fn accept_disclaimer(&self) -> Result<(), crate::error::AppError> {
        self.store.accept_disclaimer()
    }
}
