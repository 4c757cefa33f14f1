/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Typed view state of a single widget
//!
//! A widget holds the last successfully applied value of one backend
//! resource. Responses never merge: each accepted value replaces the previous
//! one wholesale, and subscribers are told a new version is available.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, watch};
use tracing::{debug, warn};

use crate::error::AppError;

/// How a widget treats responses that resolve out of order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyPolicy {
    /// Discard a response if a later-issued request was already applied
    #[default]
    LatestRequest,
    /// Apply every successful response in arrival order
    LastResponse,
}

impl fmt::Display for ApplyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyPolicy::LatestRequest => write!(f, "latest-request"),
            ApplyPolicy::LastResponse => write!(f, "last-response"),
        }
    }
}

impl FromStr for ApplyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest-request" | "latest_request" => Ok(ApplyPolicy::LatestRequest),
            "last-response" | "last_response" => Ok(ApplyPolicy::LastResponse),
            other => Err(format!("unknown apply policy: {other}")),
        }
    }
}

/// Request number handed out by [`Widget::ticket`]
pub type Ticket = u64;

#[derive(Debug)]
struct WidgetState<T> {
    data: Option<T>,
    applied: Ticket,
    updated_at: Option<DateTime<Utc>>,
    failures: u64,
    last_error: Option<String>,
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self {
            data: None,
            applied: 0,
            updated_at: None,
            failures: 0,
            last_error: None,
        }
    }
}

/// Read-only copy of a widget's bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetStatus {
    /// Widget name
    pub name: &'static str,
    /// Whether any value was ever applied
    pub loaded: bool,
    /// Time of the last applied value
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of failed fetches since creation
    pub failures: u64,
    /// Last failure, kept for diagnostics only
    pub last_error: Option<String>,
}

/// Shared, cloneable view state of one widget
pub struct Widget<T> {
    name: &'static str,
    policy: ApplyPolicy,
    issued: Arc<AtomicU64>,
    state: Arc<RwLock<WidgetState<T>>>,
    version: Arc<watch::Sender<u64>>,
}

impl<T> Clone for Widget<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            policy: self.policy,
            issued: self.issued.clone(),
            state: self.state.clone(),
            version: self.version.clone(),
        }
    }
}

impl<T: Clone + Send + Sync> Widget<T> {
    /// Empty widget
    #[must_use]
    pub fn new(name: &'static str, policy: ApplyPolicy) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            name,
            policy,
            issued: Arc::new(AtomicU64::new(0)),
            state: Arc::new(RwLock::new(WidgetState::default())),
            version: Arc::new(version),
        }
    }

    /// Widget pre-filled with `value`, e.g. fixture data
    #[must_use]
    pub fn with_value(name: &'static str, policy: ApplyPolicy, value: T) -> Self {
        let widget = Self::new(name, policy);
        if let Ok(mut state) = widget.state.try_write() {
            state.data = Some(value);
        }
        widget
    }

    /// Widget name, used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Policy in force
    #[must_use]
    pub fn policy(&self) -> ApplyPolicy {
        self.policy
    }

    /// Issues the ticket for a request about to be sent
    pub fn ticket(&self) -> Ticket {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Applies the response to the request that held `ticket`
    ///
    /// Returns `false` when the value was discarded as stale.
    pub async fn apply(&self, ticket: Ticket, value: T) -> bool {
        let mut state = self.state.write().await;
        if self.policy == ApplyPolicy::LatestRequest && ticket < state.applied {
            debug!(
                "{}: discarding stale response #{} (applied #{})",
                self.name, ticket, state.applied
            );
            return false;
        }
        state.data = Some(value);
        state.applied = state.applied.max(ticket);
        state.updated_at = Some(Utc::now());
        drop(state);
        self.notify();
        true
    }

    /// Replaces the value outside of any request, e.g. from a command result
    pub async fn set(&self, value: T) {
        let ticket = self.ticket();
        self.apply(ticket, value).await;
    }

    /// Edits the value in place; `f` receives `None` when nothing was applied yet
    pub async fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut Option<T>),
    {
        let mut state = self.state.write().await;
        f(&mut state.data);
        state.updated_at = Some(Utc::now());
        drop(state);
        self.notify();
    }

    /// Records a failed fetch; the current value is kept
    pub async fn record_failure(&self, error: &AppError) {
        let mut state = self.state.write().await;
        state.failures += 1;
        state.last_error = Some(error.to_string());
        warn!("{}: refresh failed, keeping previous state: {}", self.name, error);
    }

    /// Current value
    pub async fn get(&self) -> Option<T> {
        self.state.read().await.data.clone()
    }

    /// Bookkeeping snapshot
    pub async fn status(&self) -> WidgetStatus {
        let state = self.state.read().await;
        WidgetStatus {
            name: self.name,
            loaded: state.data.is_some(),
            updated_at: state.updated_at,
            failures: state.failures,
            last_error: state.last_error.clone(),
        }
    }

    /// Receiver notified with a new version number after every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    fn notify(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
