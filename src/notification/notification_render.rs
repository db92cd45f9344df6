use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Render the current notification in the top-right corner
///
/// Call after the rest of the UI so the overlay is drawn on top. Expired
/// notifications are dropped first.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };
    let style = &notif.style;

    // Message plus one space each side plus borders
    let width = notif.message.chars().count() as u16 + 4;
    let height = 3;

    let frame_area = frame.area();
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN,
        width: width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: height.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let mut block = Block::bordered()
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));
    if let Some(title) = notif.notification_type.title() {
        block = block.title(title);
    }

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
