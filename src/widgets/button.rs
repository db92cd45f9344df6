use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};

use super::popup;
use crate::theme;

/// Render a bordered push button centered in `area`
///
/// Returns the button's own area for click hit-testing.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, hovered: bool) -> Rect {
    // Label plus two spaces each side plus borders
    let width = label.chars().count() as u16 + 6;
    let button_area = popup::centered_in(area, width, 3);

    let (border, background) = if hovered {
        (
            theme::button::BORDER_HOVERED,
            theme::button::BACKGROUND_HOVERED,
        )
    } else {
        (theme::button::BORDER, theme::chart::BACKGROUND)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background));

    let button = Paragraph::new(Line::styled(label, theme::button::TEXT))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(button, button_area);
    button_area
}
