use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

/// At most one notification at a time; a new one replaces the old
#[derive(Debug, Clone)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: &str) {
        self.push(message, NotificationKind::Info);
    }

    pub fn show_error(&mut self, message: &str) {
        self.push(message, NotificationKind::Error);
    }

    fn push(&mut self, message: &str, kind: NotificationKind) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// The active notification, dropping it once it has expired
    pub fn current(&mut self) -> Option<&Notification> {
        self.expire(Instant::now());
        self.current.as_ref()
    }

    fn expire(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::types::DEFAULT_NOTIFICATION_MS))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
