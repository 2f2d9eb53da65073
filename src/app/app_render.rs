use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::form::form_render::render_form;
use crate::notification::render_notification;

const HELP_TEXT: &str =
    " Tab/↑↓: Move | Space: Toggle | ←/→: Change | Enter: Pick/Next | Esc: Close | Ctrl+S: Submit | Ctrl+C: Quit";

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        render_form(&self.form, frame, layout[0]);

        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, layout[1]);

        render_notification(&self.notification, frame, layout[2]);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
