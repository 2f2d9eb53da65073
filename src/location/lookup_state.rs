//! Location lookup widget state
//!
//! Owns the text buffer, the suggestion list and the bookkeeping that keeps
//! lookups rate-limited and race-free:
//!
//! - every text change bumps `generation`, clears the list, cancels the
//!   in-flight search and restarts the debounce deadline
//! - when the deadline passes, one search goes to the worker tagged with the
//!   current generation (or the list is cleared if the text is too short)
//! - a reply is applied only if its generation is still current
//!
//! Dropping the widget cancels everything it started; late replies land on a
//! closed channel and are ignored by the worker.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tui_textarea::{CursorMove, TextArea};

use super::debouncer::Debouncer;
use super::suggestion::Suggestion;
use super::worker::{LookupRequest, LookupResponse};

/// Timing knobs for a lookup widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSettings {
    pub debounce: Duration,
    /// Shortest text, in characters, that is worth a lookup
    pub min_query_chars: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            min_query_chars: 3,
        }
    }
}

/// Search that has been handed to the worker and not answered yet
#[derive(Debug)]
struct InFlight {
    generation: u64,
    cancel_token: CancellationToken,
}

type SelectCallback = Box<dyn FnMut(Suggestion)>;

/// Debounced location autocomplete field
pub struct LocationLookup {
    textarea: TextArea<'static>,
    suggestions: Vec<Suggestion>,
    selected: usize,
    settings: LookupSettings,
    debouncer: Debouncer,
    /// Bumped on every text change; replies for older values are stale
    generation: u64,
    in_flight: Option<InFlight>,
    request_tx: UnboundedSender<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    response_rx: Receiver<LookupResponse>,
    on_select: SelectCallback,
}

impl LocationLookup {
    /// Create a widget
    ///
    /// # Arguments
    /// * `placeholder` - Hint shown while the field is empty
    /// * `request_tx` - Lookup worker request channel
    /// * `on_select` - Receives the picked suggestion, once per pick
    pub fn new(
        placeholder: &str,
        request_tx: UnboundedSender<LookupRequest>,
        on_select: impl FnMut(Suggestion) + 'static,
    ) -> Self {
        let settings = LookupSettings::default();
        let (response_tx, response_rx) = mpsc::channel();

        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            suggestions: Vec::new(),
            selected: 0,
            settings,
            debouncer: Debouncer::new(settings.debounce),
            generation: 0,
            in_flight: None,
            request_tx,
            response_tx,
            response_rx,
            on_select: Box::new(on_select),
        }
    }

    pub fn with_settings(mut self, settings: LookupSettings) -> Self {
        self.settings = settings;
        self.debouncer = Debouncer::new(settings.debounce);
        self
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Current query text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The popup is shown exactly when there is something to pick
    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time until the pending lookup fires, for bounding the event loop's wait
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Replace the query text, as a keystroke would
    ///
    /// Line breaks are dropped; the field holds a single line.
    pub fn set_text(&mut self, text: &str, now: Instant) {
        let text = single_line(text);
        if self.text() == text {
            return;
        }
        self.replace_buffer(&text);
        self.on_text_changed(now);
    }

    /// Handle a key aimed at this field
    ///
    /// Up/Down move through suggestions, Enter picks, Esc dismisses. Anything
    /// else is an edit. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.select_next();
                    return true;
                }
                KeyCode::Up => {
                    self.select_previous();
                    return true;
                }
                KeyCode::Enter => return self.select(self.selected),
                KeyCode::Esc => {
                    self.dismiss();
                    return true;
                }
                _ => {}
            }
        }

        match key.code {
            // Single-line field; focus keys belong to the host
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => false,
            KeyCode::Esc => false,
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char('\n' | '\r') => false,
            _ => {
                let before = self.text().to_string();
                self.textarea.input(key);
                if self.text() != before {
                    self.on_text_changed(now);
                }
                true
            }
        }
    }

    /// Advance timers and apply worker replies
    ///
    /// Returns true if the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_responses();
        if self.debouncer.fire(now) {
            changed |= self.fire_lookup();
        }
        changed
    }

    /// Drain replies from the worker, applying only current ones
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.response_rx.try_recv() {
            changed |= self.apply_response(response);
        }
        changed
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.suggestions.len();
    }

    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.suggestions.len() - 1);
    }

    /// Pick the suggestion at `index`
    ///
    /// Hands the suggestion to the host callback, shows its label in the field
    /// and clears the list. The label is not looked up again. Returns false if
    /// there is no such suggestion.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.suggestions.len() {
            return false;
        }

        let suggestion = std::mem::take(&mut self.suggestions).swap_remove(index);
        self.selected = 0;

        // The field text is about to change under any pending search
        self.generation = self.generation.wrapping_add(1);
        self.cancel_in_flight();
        self.debouncer.cancel();
        self.replace_buffer(&single_line(suggestion.display_name()));

        log::debug!("Selected location {} ({})", suggestion.id(), suggestion.display_name());
        (self.on_select)(suggestion);
        true
    }

    /// Hide the list without touching the text
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.selected = 0;
    }

    fn on_text_changed(&mut self, now: Instant) {
        self.generation = self.generation.wrapping_add(1);
        self.cancel_in_flight();
        self.dismiss();
        self.debouncer.schedule(now);
    }

    fn replace_buffer(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Debounce deadline passed: clear or issue a search
    fn fire_lookup(&mut self) -> bool {
        let query = self.text().to_string();
        if query.chars().count() < self.settings.min_query_chars {
            let had_suggestions = self.is_visible();
            self.dismiss();
            return had_suggestions;
        }

        let cancel_token = CancellationToken::new();
        let request = LookupRequest::Search {
            query,
            generation: self.generation,
            cancel_token: cancel_token.clone(),
            reply: self.response_tx.clone(),
        };

        if self.request_tx.send(request).is_err() {
            log::warn!("Location lookup worker is not running");
            return false;
        }

        self.in_flight = Some(InFlight {
            generation: self.generation,
            cancel_token,
        });
        true
    }

    fn apply_response(&mut self, response: LookupResponse) -> bool {
        let generation = response.generation();
        if generation != self.generation {
            log::debug!(
                "Discarding stale lookup reply for generation {} (current {})",
                generation,
                self.generation
            );
            return false;
        }

        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.generation == generation)
        {
            self.in_flight = None;
        }

        match response {
            LookupResponse::Results { suggestions, .. } => {
                self.suggestions = suggestions;
                self.selected = 0;
                true
            }
            LookupResponse::Failed { error, .. } => {
                log::warn!("Location lookup for {:?} failed: {}", self.text(), error);
                self.dismiss();
                true
            }
            LookupResponse::Cancelled { .. } => false,
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Cancelling lookup {}", in_flight.generation);
            in_flight.cancel_token.cancel();
        }
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

impl Drop for LocationLookup {
    fn drop(&mut self) {
        self.debouncer.cancel();
        self.cancel_in_flight();
    }
}

#[cfg(test)]
#[path = "lookup_state_tests.rs"]
mod lookup_state_tests;
