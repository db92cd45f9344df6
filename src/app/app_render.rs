use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::chart::chart_render;
use crate::help::help_line_render;
use crate::notification::render_notification;
use crate::widgets::button;

pub const DRAW_BUTTON_LABEL: &str = "Draw Port Layout";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let (chart_rect, viewport) =
            chart_render::render_pane(&self.scene, &self.view, frame, layout[0]);
        self.layout_regions.chart_pane = Some(chart_rect);
        self.viewport = Some(viewport);

        let button_rect =
            button::render_button(frame, layout[1], DRAW_BUTTON_LABEL, self.button_hovered);
        self.layout_regions.draw_button = Some(button_rect);

        help_line_render::render_line(self, frame, layout[2]);
        self.layout_regions.help_line = Some(layout[2]);

        render_notification(frame, &mut self.notification);
    }
}
