use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::chart::ChartView;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('d') => self.draw_layout(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_view(ChartView::zoom_in),
            KeyCode::Char('-') => self.change_view(ChartView::zoom_out),
            KeyCode::Left => self.change_view(|view| view.pan(-1, 0)),
            KeyCode::Right => self.change_view(|view| view.pan(1, 0)),
            KeyCode::Up => self.change_view(|view| view.pan(0, 1)),
            KeyCode::Down => self.change_view(|view| view.pan(0, -1)),
            KeyCode::Char('0') | KeyCode::Home => self.change_view(ChartView::reset),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
