use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_in(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Blank out `area` before drawing a floating widget over it
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
