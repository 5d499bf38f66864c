use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};

/// Notices disappear on their own after this long, like the original
/// client's 3-second toasts.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient status-line message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    raised_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTICE_TTL
    }

    pub fn style(&self) -> Style {
        match self.kind {
            NoticeKind::Success => Style::default().fg(Color::Green),
            NoticeKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let notice = Notice::success("saved");
        assert!(!notice.expired(Instant::now()));
        assert!(notice.expired(Instant::now() + NOTICE_TTL));
    }

    #[test]
    fn kinds_carry_through_constructors() {
        assert_eq!(Notice::success("ok").kind, NoticeKind::Success);
        assert_eq!(Notice::error("bad").kind, NoticeKind::Error);
    }
}
