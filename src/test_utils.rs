//! Shared test utilities for berthplot
//!
//! Common fixtures and helper functions used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::vessel::VesselRecord;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    pub fn vessel(index: usize, length: f64, berth_time: f64, departure_time: f64) -> VesselRecord {
        VesselRecord::new(index, length, berth_time, departure_time)
    }

    /// Three valid vessels with overlapping berth times
    pub fn sample_records() -> Vec<VesselRecord> {
        vec![
            vessel(0, 100.0, 0.0, 60.0),
            vessel(1, 80.0, 30.0, 90.0),
            vessel(2, 120.0, 70.0, 150.0),
        ]
    }

    /// Helper to create App with default config for tests
    pub fn test_app(records: Vec<VesselRecord>) -> App {
        App::new(records, &Config::default())
    }

    /// Render the app once so layout regions and the viewport are populated
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Moved, column, row)
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }
}
