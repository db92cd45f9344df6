//! Mouse click handling

use super::app_state::App;
use crate::layout::Region;

/// Handle a left click in the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    if region == Some(Region::DrawButton) {
        app.draw_layout();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
