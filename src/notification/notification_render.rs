use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::notification_state::NotificationState;

/// Render the current notification into a one-line area, if any
pub fn render_notification(state: &NotificationState, frame: &mut Frame, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            " ⚠ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
