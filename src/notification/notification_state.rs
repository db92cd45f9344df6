use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notification type, determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived confirmation such as "Plotted 3 vessels"
    #[default]
    Info,
    /// Empty input, invalid config
    Warning,
    /// Rejected vessel table; stays until replaced
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: theme::notification::INFO_FG,
                bg: theme::notification::INFO_BG,
                border: theme::notification::INFO_BORDER,
            },
            NotificationType::Warning => NotificationStyle {
                fg: theme::notification::WARNING_FG,
                bg: theme::notification::WARNING_BG,
                border: theme::notification::WARNING_BORDER,
            },
            NotificationType::Error => NotificationStyle {
                fg: theme::notification::ERROR_FG,
                bg: theme::notification::ERROR_BG,
                border: theme::notification::ERROR_BORDER,
            },
        }
    }

    /// Border title, if the type has one
    pub fn title(self) -> Option<&'static str> {
        match self {
            NotificationType::Info => None,
            NotificationType::Warning => Some(" Warning "),
            NotificationType::Error => Some(" Error "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    /// `None` never expires
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self::with_type(message, NotificationType::Info)
    }

    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

/// Holds at most one notification; a new one replaces the current one
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        log::debug!("Notification ({:?}): {}", notification_type, message);
        self.current = Some(Notification::with_type(message, notification_type));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
