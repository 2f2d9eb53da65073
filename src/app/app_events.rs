use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::form::FormEvent;

impl App {
    /// Handle a terminal event. Returns true if a redraw is needed.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
                true
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        let event = self.form.handle_key(key, now);
        if event == FormEvent::Ignored && key.code == KeyCode::Esc {
            self.notification.dismiss();
            return;
        }
        self.apply_form_event(event, now);
    }

    /// Keys that work regardless of focus. Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            // Ctrl+C: Exit without submitting
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            // Ctrl+S: Submit from any field
            KeyCode::Char('s') => {
                let event = self.form.submit();
                self.apply_form_event(event, now);
                true
            }
            _ => false,
        }
    }

    fn apply_form_event(&mut self, event: FormEvent, now: Instant) {
        match event {
            FormEvent::Submitted(request) => self.finish(*request),
            FormEvent::Rejected(e) => self.notification.show(e.to_string(), now),
            FormEvent::Handled | FormEvent::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
