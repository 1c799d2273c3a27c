//! User-visible notifications

/// Shown once per load cycle when either fetch fails
pub const LOAD_FAILED: &str = "Failed to load dashboard data";

/// Shown after the user signs out
pub const LOGGED_OUT: &str = "Logged out successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Fire-and-forget sink (toasts in the browser, log lines in the CLI)
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => self.success(&notice.message),
            NoticeLevel::Error => self.error(&notice.message),
        }
    }
}
