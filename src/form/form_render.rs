//! Trip form rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::form_state::{FormField, TripForm};
use super::trip_request::{Choice, Interest, TransportMode, VacationType};
use crate::location::lookup_render;

const FOCUS_MARKER: &str = "› ";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Render the whole form into `area`
///
/// Suggestion popups are drawn last so they sit on top of the fields below
/// their input.
pub fn render_form(form: &TripForm, frame: &mut Frame, area: Rect) {
    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Plan Your Trip",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    lookup_render::render_field(
        &form.departure,
        frame,
        layout[1],
        FormField::Departure.label(),
        form.focus == FormField::Departure,
    );
    lookup_render::render_field(
        &form.destination,
        frame,
        layout[2],
        FormField::Destination.label(),
        form.focus == FormField::Destination,
    );

    let lines: Vec<Line> = FormField::ORDER
        .iter()
        .filter(|f| !matches!(f, FormField::Departure | FormField::Destination))
        .map(|f| field_line(form, *f))
        .collect();
    frame.render_widget(Paragraph::new(lines), layout[3]);

    lookup_render::render_popup(&form.departure, frame, layout[1]);
    lookup_render::render_popup(&form.destination, frame, layout[2]);
}

fn field_line(form: &TripForm, field: FormField) -> Line<'static> {
    let focused = form.focus == field;
    let request = &form.request;

    let mut spans = vec![marker(focused)];
    if field == FormField::Submit {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[ {} ]", field.label()), style));
        return Line::from(spans);
    }

    spans.push(label(field, focused));
    match field {
        FormField::ConsiderNearby => spans.push(checkbox(request.consider_nearby)),
        FormField::TentativeDates => spans.push(checkbox(request.tentative_dates)),
        FormField::RoadTrip => spans.push(checkbox(request.road_trip)),
        FormField::CountryScope => spans.push(selector(request.country_scope.label(), focused)),
        FormField::Accommodation => spans.push(selector(request.accommodation.label(), focused)),
        FormField::VacationType => spans.push(selector(
            request
                .vacation_type
                .as_ref()
                .map(VacationType::label)
                .unwrap_or("Select type"),
            focused,
        )),
        FormField::StartDate => spans.push(date_value(&form.start_date_input)),
        FormField::EndDate => spans.push(date_value(&form.end_date_input)),
        FormField::Travelers => spans.push(selector(&form.travelers_input, focused)),
        FormField::BudgetMin => spans.push(Span::raw(format!("${}", request.budget.min()))),
        FormField::BudgetMax => spans.push(Span::raw(format!("${}", request.budget.max()))),
        FormField::Interests => spans.extend(checkbox_group(
            Interest::ALL,
            &request.interests,
            focused.then_some(form.interest_cursor),
        )),
        FormField::Transport => spans.extend(checkbox_group(
            TransportMode::ALL,
            &request.transport,
            focused.then_some(form.transport_cursor),
        )),
        FormField::Departure | FormField::Destination | FormField::Submit => {}
    }

    Line::from(spans)
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(FOCUS_MARKER, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(" ".repeat(FOCUS_MARKER.chars().count()))
    }
}

fn label(field: FormField, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("{}: ", field.label()), style)
}

fn checkbox(checked: bool) -> Span<'static> {
    Span::raw(if checked { "[x]" } else { "[ ]" })
}

fn selector(value: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!("◀ {} ▶", value), Style::default().fg(Color::Yellow))
    } else {
        Span::raw(value.to_string())
    }
}

fn date_value(input: &str) -> Span<'static> {
    if input.is_empty() {
        Span::styled(DATE_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(input.to_string())
    }
}

/// One `[x] Label` span per option, the cursor option underlined
fn checkbox_group<T: Choice>(options: &[T], chosen: &[T], cursor: Option<usize>) -> Vec<Span<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if chosen.contains(option) { "[x]" } else { "[ ]" };
            let style = if cursor == Some(i) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Span::styled(format!("{} {}  ", mark, option.label()), style)
        })
        .collect()
}

#[cfg(test)]
#[path = "form_render_tests.rs"]
mod form_render_tests;
