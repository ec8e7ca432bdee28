use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A status line that disappears on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant, ttl: Duration) -> Self {
        Notification {
            message: message.into(),
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_expires() {
        let now = Instant::now();
        let note = Notification::new("Game Start!", NotificationKind::Info, now, Duration::from_secs(3));
        assert!(!note.is_expired(now));
        assert!(!note.is_expired(now + Duration::from_millis(2999)));
        assert!(note.is_expired(now + Duration::from_secs(3)));
    }
}
