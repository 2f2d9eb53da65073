//! Location field and suggestion popup rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::lookup_state::LocationLookup;
use crate::widgets::popup;

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const KIND_LABEL_SPACING: usize = 2;

/// Render the location input box
pub fn render_field(lookup: &LocationLookup, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title_spans = vec![Span::raw(format!(" {} ", title))];
    if lookup.is_loading() {
        title_spans.push(Span::styled(
            "searching… ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut textarea = lookup.textarea().clone();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );
    if !focused {
        // Hide the cursor block on unfocused fields
        textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&textarea, area);
}

/// Render the suggestion list under the field
///
/// Draws nothing when there are no suggestions.
pub fn render_popup(lookup: &LocationLookup, frame: &mut Frame, field_area: Rect) {
    let suggestions = lookup.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let kinds: Vec<String> = suggestions
        .iter()
        .map(|s| s.place_kind().unwrap_or_default())
        .collect();

    let text_width = suggestions
        .iter()
        .zip(&kinds)
        .map(|(s, kind)| s.display_name().width() + kind.width() + KIND_LABEL_SPACING)
        .max()
        .unwrap_or(20);

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
    let popup_width = (text_width as u16)
        .saturating_add(POPUP_PADDING)
        .min(field_area.width);

    let popup_area = popup::popup_below_anchor(field_area, frame.area(), popup_width, popup_height);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .zip(&kinds)
        .map(|(suggestion, kind)| {
            let mut spans = vec![Span::raw(suggestion.display_name().to_string())];
            if !kind.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", kind),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} places ", suggestions.len()))
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default().with_selected(Some(lookup.selected_index()));
    frame.render_stateful_widget(list, popup_area, &mut state);
}

#[cfg(test)]
#[path = "lookup_render_tests.rs"]
mod lookup_render_tests;
