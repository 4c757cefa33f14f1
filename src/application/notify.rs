//! Toast notifications and spoken summaries

use crate::constants::{MAX_NOTIFICATIONS, NOTIFICATION_TTL_SECS, SPEECH_RATE};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// A toast message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// When it was posted
    pub at: DateTime<Utc>,
}

impl Notification {
    /// Whether the toast is still on screen at `now`
    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now - self.at < Duration::seconds(NOTIFICATION_TTL_SECS)
    }
}

/// Bounded queue of recent notifications, newest last
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl Notifier {
    /// Empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a notification
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        info!("◈ {}", message);
        let mut queue = self.queue();
        if queue.len() == MAX_NOTIFICATIONS {
            queue.pop_front();
        }
        queue.push_back(Notification {
            message,
            at: Utc::now(),
        });
    }

    /// Every retained notification
    #[must_use]
    pub fn all(&self) -> Vec<Notification> {
        self.queue().iter().cloned().collect()
    }

    /// Notifications still visible at `now`
    #[must_use]
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.queue()
            .iter()
            .filter(|n| n.is_visible(now))
            .cloned()
            .collect()
    }

    /// Most recent notification
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.queue().back().cloned()
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        match self.queue.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Text to be spoken
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text
    pub text: String,
    /// Speech rate, 1.0 being normal speed
    pub rate: f32,
}

impl Utterance {
    /// Utterance at the default dashboard rate
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: SPEECH_RATE,
        }
    }
}

/// Text-to-speech output
pub trait Speaker: Send + Sync {
    /// Speaks `utterance`; must not block
    fn speak(&self, utterance: &Utterance);
}

/// Speaker that writes utterances to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSpeaker;

impl Speaker for LogSpeaker {
    fn speak(&self, utterance: &Utterance) {
        info!("🔊 {}", utterance.text);
    }
}
