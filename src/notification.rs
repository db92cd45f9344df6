//! Transient messages shown over the UI
//!
//! Used for draw results, validation errors and config warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
