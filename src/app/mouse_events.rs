//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::chart::ChartView;
use crate::layout::{Region, region_at};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            mouse_hover::handle_hover(app, region, mouse);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            mouse_click::handle_click(app, region);
        }
        MouseEventKind::ScrollUp if region == Some(Region::ChartPane) => {
            app.change_view(ChartView::zoom_in);
        }
        MouseEventKind::ScrollDown if region == Some(Region::ChartPane) => {
            app.change_view(ChartView::zoom_out);
        }
        _ => {}
    }
}
