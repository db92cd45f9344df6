//! Mouse hover handling
//!
//! Tracks the draw button highlight and feeds pointer positions over the
//! chart to the hover probe.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::chart::{HoverProbe, TooltipSink};
use crate::layout::Region;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    hover_draw_button(app, region == Some(Region::DrawButton));
    hover_chart(app, region, mouse);
}

fn hover_draw_button(app: &mut App, hovered: bool) {
    if app.button_hovered != hovered {
        app.button_hovered = hovered;
        app.mark_dirty();
    }
}

fn hover_chart(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    let viewport = match (region, app.viewport) {
        (Some(Region::ChartPane), Some(viewport)) => Some(viewport),
        _ => None,
    };
    let anchor = viewport.and_then(|viewport| viewport.cell_to_data(mouse.column, mouse.row));

    let outcome = HoverProbe::on_pointer_over(
        &mut app.chart,
        anchor.unwrap_or_default(),
        anchor.is_some(),
        |shape| {
            viewport.is_some_and(|viewport| viewport.cell_shows(shape, mouse.column, mouse.row))
        },
    );

    if outcome.redraw {
        app.scene.update_annotation(&outcome.state);
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
