use std::collections::VecDeque;
use std::time::Instant;

use hn_core::Notification;

/// Visible notifications, oldest first, each with its own expiry.
#[derive(Debug, Default)]
pub struct ToastQueue {
    entries: VecDeque<(Notification, Instant)>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration;
        self.entries.push_back((notification, expires_at));
    }

    /// Drops expired toasts. Returns whether anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(_, expires_at)| *expires_at > now);
        self.entries.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|(notification, _)| notification)
    }
}
