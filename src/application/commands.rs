//! User-triggered commands and their controls
//!
//! A control moves idle -> in-flight -> idle. While in flight it is disabled and
//! shows a busy label; any second trigger is rejected.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Dashboard and analysis commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Portfolio optimization scan
    Optimize,
    /// Quantum shield activation
    Shield,
    /// Two-stock comparison
    Compare,
    /// Single-stock prediction
    Predict,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommandKind::Optimize => "optimize",
            CommandKind::Shield => "shield",
            CommandKind::Compare => "compare",
            CommandKind::Predict => "predict",
        };
        write!(f, "{s}")
    }
}

/// Phase of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandPhase {
    /// Ready to be triggered
    Idle,
    /// Waiting for the backend
    InFlight,
}

/// View state of the button that triggers a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Command bound to the control
    pub kind: CommandKind,
    /// Label currently shown
    pub label: String,
    /// Label restored when the command returns to idle
    pub idle_label: String,
    /// Whether the control accepts a trigger
    pub enabled: bool,
    /// Progress line shown while in flight
    pub status: Option<String>,
    /// Current phase
    pub phase: CommandPhase,
}

impl Control {
    /// Idle, enabled control
    pub fn new(kind: CommandKind, idle_label: impl Into<String>) -> Self {
        let idle_label = idle_label.into();
        Self {
            kind,
            label: idle_label.clone(),
            idle_label,
            enabled: true,
            status: None,
            phase: CommandPhase::Idle,
        }
    }

    /// idle -> in-flight: disables the control and shows `busy_label`
    pub fn begin(&mut self, busy_label: &str, status: Option<String>) -> Result<(), AppError> {
        if !self.enabled || self.phase == CommandPhase::InFlight {
            return Err(AppError::CommandInFlight(self.kind.to_string()));
        }
        self.enabled = false;
        self.label = busy_label.to_string();
        self.status = status;
        self.phase = CommandPhase::InFlight;
        Ok(())
    }

    /// in-flight -> idle: enabled again with the idle label
    pub fn reset(&mut self) {
        self.enabled = true;
        self.label = self.idle_label.clone();
        self.status = None;
        self.phase = CommandPhase::Idle;
    }

    /// in-flight -> idle, leaving the control disabled under `label`
    ///
    /// Used by one-shot commands that cannot be triggered twice.
    pub fn latch(&mut self, label: &str) {
        self.enabled = false;
        self.label = label.to_string();
        self.status = None;
        self.phase = CommandPhase::Idle;
    }
}

/// Shared handle to a [`Control`]
#[derive(Debug, Clone)]
pub struct ControlHandle {
    inner: Arc<RwLock<Control>>,
}

impl ControlHandle {
    /// Handle to a fresh idle control
    pub fn new(kind: CommandKind, idle_label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Control::new(kind, idle_label))),
        }
    }

    /// Enters the in-flight phase, failing if already there
    pub async fn begin(&self, busy_label: &str, status: Option<String>) -> Result<(), AppError> {
        let mut control = self.inner.write().await;
        control.begin(busy_label, status)?;
        debug!("{}: in flight", control.kind);
        Ok(())
    }

    /// Returns to idle
    pub async fn reset(&self) {
        let mut control = self.inner.write().await;
        control.reset();
        debug!("{}: idle", control.kind);
    }

    /// Returns to idle but stays disabled under `label`
    pub async fn latch(&self, label: &str) {
        self.inner.write().await.latch(label);
    }

    /// Copy of the control
    pub async fn snapshot(&self) -> Control {
        self.inner.read().await.clone()
    }
}
