//! Trip form key handling

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::form_state::{FormField, TripForm};
use super::trip_request::{Choice, FormError, Interest, TransportMode, TripRequest, VacationType};

const TRAVELERS_DIGITS: usize = 3;

/// What a key press did to the form, as far as the app is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Ignored,
    Handled,
    Rejected(FormError),
    Submitted(Box<TripRequest>),
}

impl TripForm {
    /// Handle a key press aimed at the form
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> FormEvent {
        // The focused location field gets first refusal (typing, list navigation)
        let consumed = self
            .focused_lookup_mut()
            .is_some_and(|lookup| lookup.handle_key(key, now));
        if consumed {
            self.apply_picks();
            return FormEvent::Handled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => return focus_result(self.focus_next()),
            KeyCode::BackTab | KeyCode::Up => return focus_result(self.focus_previous()),
            _ => {}
        }

        match self.focus {
            FormField::Departure | FormField::Destination => match key.code {
                KeyCode::Enter => focus_result(self.focus_next()),
                _ => FormEvent::Ignored,
            },
            FormField::StartDate => self.edit_date(key, true),
            FormField::EndDate => self.edit_date(key, false),
            FormField::ConsiderNearby => toggle_on_space(key, &mut self.request.consider_nearby),
            FormField::TentativeDates => toggle_on_space(key, &mut self.request.tentative_dates),
            FormField::RoadTrip => toggle_on_space(key, &mut self.request.road_trip),
            FormField::CountryScope => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.request.country_scope = self.request.country_scope.next();
                    FormEvent::Handled
                }
                KeyCode::Left => {
                    self.request.country_scope = self.request.country_scope.previous();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::Accommodation => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.request.accommodation = self.request.accommodation.next();
                    FormEvent::Handled
                }
                KeyCode::Left => {
                    self.request.accommodation = self.request.accommodation.previous();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::VacationType => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.request.vacation_type = cycle_optional(self.request.vacation_type, true);
                    FormEvent::Handled
                }
                KeyCode::Left => {
                    self.request.vacation_type = cycle_optional(self.request.vacation_type, false);
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::Travelers => self.edit_travelers(key),
            FormField::BudgetMin => match key.code {
                KeyCode::Right | KeyCode::Char('+') => {
                    self.request.budget.raise_min();
                    FormEvent::Handled
                }
                KeyCode::Left | KeyCode::Char('-') => {
                    self.request.budget.lower_min();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::BudgetMax => match key.code {
                KeyCode::Right | KeyCode::Char('+') => {
                    self.request.budget.raise_max();
                    FormEvent::Handled
                }
                KeyCode::Left | KeyCode::Char('-') => {
                    self.request.budget.lower_max();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::Interests => match key.code {
                KeyCode::Right => {
                    self.interest_cursor = (self.interest_cursor + 1) % Interest::ALL.len();
                    FormEvent::Handled
                }
                KeyCode::Left => {
                    self.interest_cursor =
                        (self.interest_cursor + Interest::ALL.len() - 1) % Interest::ALL.len();
                    FormEvent::Handled
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggle_interest();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::Transport => match key.code {
                KeyCode::Right => {
                    self.transport_cursor = (self.transport_cursor + 1) % TransportMode::ALL.len();
                    FormEvent::Handled
                }
                KeyCode::Left => {
                    self.transport_cursor = (self.transport_cursor + TransportMode::ALL.len() - 1)
                        % TransportMode::ALL.len();
                    FormEvent::Handled
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggle_transport();
                    FormEvent::Handled
                }
                _ => FormEvent::Ignored,
            },
            FormField::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                _ => FormEvent::Ignored,
            },
        }
    }

    /// Validate and package the form
    pub fn submit(&mut self) -> FormEvent {
        match self.build_request() {
            Ok(request) => {
                log::debug!("Trip request submitted");
                FormEvent::Submitted(Box::new(request))
            }
            Err(e) => FormEvent::Rejected(e),
        }
    }

    fn edit_date(&mut self, key: KeyEvent, start: bool) -> FormEvent {
        let input = if start {
            &mut self.start_date_input
        } else {
            &mut self.end_date_input
        };

        match key.code {
            KeyCode::Char(c)
                if (c.is_ascii_digit() || c == '-')
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && input.len() < 10 =>
            {
                input.push(c);
                FormEvent::Handled
            }
            KeyCode::Backspace => {
                input.pop();
                FormEvent::Handled
            }
            KeyCode::Enter => focus_result(self.focus_next()),
            _ => FormEvent::Ignored,
        }
    }

    fn edit_travelers(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Right | KeyCode::Char('+') => {
                self.commit_travelers();
                self.set_travelers(self.request.travelers.saturating_add(1));
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.commit_travelers();
                self.set_travelers(self.request.travelers.saturating_sub(1));
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Typing over a lone "0" replaces it
                if self.travelers_input == "0" {
                    self.travelers_input.clear();
                }
                if self.travelers_input.len() < TRAVELERS_DIGITS {
                    self.travelers_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.travelers_input.pop();
            }
            KeyCode::Enter => return focus_result(self.focus_next()),
            _ => return FormEvent::Ignored,
        }
        FormEvent::Handled
    }
}

fn focus_result(result: Result<(), FormError>) -> FormEvent {
    match result {
        Ok(()) => FormEvent::Handled,
        Err(e) => FormEvent::Rejected(e),
    }
}

fn toggle_on_space(key: KeyEvent, flag: &mut bool) -> FormEvent {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            *flag = !*flag;
            FormEvent::Handled
        }
        _ => FormEvent::Ignored,
    }
}

/// Cycle through "not chosen" followed by every vacation type
fn cycle_optional(current: Option<VacationType>, forward: bool) -> Option<VacationType> {
    let first = VacationType::ALL[0];
    let last = VacationType::ALL[VacationType::ALL.len() - 1];
    match (current, forward) {
        (None, true) => Some(first),
        (None, false) => Some(last),
        (Some(v), true) if v == last => None,
        (Some(v), false) if v == first => None,
        (Some(v), true) => Some(v.next()),
        (Some(v), false) => Some(v.previous()),
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
