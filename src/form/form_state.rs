//! Trip form state
//!
//! Owns the two location lookups, the date inputs, the focus position and the
//! trip request being filled in. Location picks arrive through the lookups'
//! selection callbacks, which forward them over a channel drained here.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::trip_request::{
    Choice, DATE_FORMAT, FormError, Interest, TransportMode, TripRequest, check_date_order,
    parse_date, toggle_member,
};
use crate::location::{LocationLookup, LookupRequest, LookupSettings, Suggestion};

pub const MAX_TRAVELERS: u32 = 999;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Departure,
    Destination,
    ConsiderNearby,
    CountryScope,
    StartDate,
    EndDate,
    TentativeDates,
    Travelers,
    BudgetMin,
    BudgetMax,
    VacationType,
    RoadTrip,
    Interests,
    Accommodation,
    Transport,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 16] = [
        FormField::Departure,
        FormField::Destination,
        FormField::ConsiderNearby,
        FormField::CountryScope,
        FormField::StartDate,
        FormField::EndDate,
        FormField::TentativeDates,
        FormField::Travelers,
        FormField::BudgetMin,
        FormField::BudgetMax,
        FormField::VacationType,
        FormField::RoadTrip,
        FormField::Interests,
        FormField::Accommodation,
        FormField::Transport,
        FormField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Departure => "Where are you traveling from?",
            FormField::Destination => "Where do you want to go?",
            FormField::ConsiderNearby => "Consider Nearby Destinations?",
            FormField::CountryScope => "How many countries?",
            FormField::StartDate => "Start Date",
            FormField::EndDate => "End Date",
            FormField::TentativeDates => "Tentative Dates?",
            FormField::Travelers => "Number of Travelers",
            FormField::BudgetMin => "Budget from ($ USD)",
            FormField::BudgetMax => "Budget up to ($ USD)",
            FormField::VacationType => "Type of Vacation",
            FormField::RoadTrip => "Road trip? (a route will be suggested)",
            FormField::Interests => "What are your interests?",
            FormField::Accommodation => "Accommodation Preference",
            FormField::Transport => "Preferred Transport",
            FormField::Submit => "Generate Itinerary",
        }
    }
}

/// Which location input a pick came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocationSlot {
    Departure,
    Destination,
}

#[derive(Debug)]
struct LocationPick {
    slot: LocationSlot,
    suggestion: Suggestion,
}

/// Trip form state
pub struct TripForm {
    pub departure: LocationLookup,
    pub destination: LocationLookup,
    pub request: TripRequest,
    pub start_date_input: String,
    pub end_date_input: String,
    pub travelers_input: String,
    pub focus: FormField,
    pub interest_cursor: usize,
    pub transport_cursor: usize,
    picks_rx: Receiver<LocationPick>,
}

impl TripForm {
    pub fn new(request_tx: UnboundedSender<LookupRequest>, settings: LookupSettings) -> Self {
        let (picks_tx, picks_rx) = mpsc::channel();

        let departure_tx = picks_tx.clone();
        let departure = LocationLookup::new("Enter departure city", request_tx.clone(), move |s| {
            let _ = departure_tx.send(LocationPick {
                slot: LocationSlot::Departure,
                suggestion: s,
            });
        })
        .with_settings(settings);

        let destination = LocationLookup::new("Enter destination", request_tx, move |s| {
            let _ = picks_tx.send(LocationPick {
                slot: LocationSlot::Destination,
                suggestion: s,
            });
        })
        .with_settings(settings);

        Self {
            departure,
            destination,
            request: TripRequest::default(),
            start_date_input: String::new(),
            end_date_input: String::new(),
            travelers_input: "1".to_string(),
            focus: FormField::Departure,
            interest_cursor: 0,
            transport_cursor: 0,
            picks_rx,
        }
    }

    pub fn focused_lookup_mut(&mut self) -> Option<&mut LocationLookup> {
        match self.focus {
            FormField::Departure => Some(&mut self.departure),
            FormField::Destination => Some(&mut self.destination),
            _ => None,
        }
    }

    /// Advance both lookups and collect picks. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.departure.tick(now);
        changed |= self.destination.tick(now);
        changed |= self.apply_picks();
        changed
    }

    /// Store location picks reported by the lookups
    pub fn apply_picks(&mut self) -> bool {
        let mut changed = false;
        while let Ok(pick) = self.picks_rx.try_recv() {
            log::debug!("{:?} set to {}", pick.slot, pick.suggestion.display_name());
            match pick.slot {
                LocationSlot::Departure => self.request.departure = Some(pick.suggestion),
                LocationSlot::Destination => self.request.destination = Some(pick.suggestion),
            }
            changed = true;
        }
        changed
    }

    /// Soonest pending lookup deadline across both fields
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        [self.departure.next_deadline(now), self.destination.next_deadline(now)]
            .into_iter()
            .flatten()
            .min()
    }

    /// Move focus, committing the field being left
    ///
    /// A date that fails to commit keeps the focus where it is.
    pub fn focus_next(&mut self) -> Result<(), FormError> {
        self.leave_field()?;
        self.focus = self.focus.next();
        Ok(())
    }

    pub fn focus_previous(&mut self) -> Result<(), FormError> {
        self.leave_field()?;
        self.focus = self.focus.previous();
        Ok(())
    }

    fn leave_field(&mut self) -> Result<(), FormError> {
        match self.focus {
            // Moving away dismisses the suggestion list
            FormField::Departure => self.departure.dismiss(),
            FormField::Destination => self.destination.dismiss(),
            FormField::StartDate => self.commit_start_date()?,
            FormField::EndDate => self.commit_end_date()?,
            FormField::Travelers => self.commit_travelers(),
            _ => {}
        }
        Ok(())
    }

    /// Parse the start date input into the request
    pub fn commit_start_date(&mut self) -> Result<(), FormError> {
        self.request.start_date = parse_date(&self.start_date_input)?;
        Ok(())
    }

    /// Parse the end date input into the request
    ///
    /// An end date before the start date is refused and the previous end date
    /// is put back into the input.
    pub fn commit_end_date(&mut self) -> Result<(), FormError> {
        let end = parse_date(&self.end_date_input)?;
        if let Err(e) = check_date_order(self.request.start_date, end) {
            self.end_date_input = self
                .request
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default();
            return Err(e);
        }
        self.request.end_date = end;
        Ok(())
    }

    /// Parse the travelers input into the request
    ///
    /// Blank or zero becomes one; the input is rewritten to the stored count.
    pub fn commit_travelers(&mut self) {
        let count = self.travelers_input.trim().parse::<u32>().unwrap_or(0);
        self.set_travelers(count);
    }

    /// Store a traveler count, clamped to `1..=MAX_TRAVELERS`
    pub fn set_travelers(&mut self, count: u32) {
        self.request.travelers = count.clamp(1, MAX_TRAVELERS);
        self.travelers_input = self.request.travelers.to_string();
    }

    pub fn toggle_interest(&mut self) {
        let interest = Interest::ALL[self.interest_cursor];
        toggle_member(&mut self.request.interests, interest);
    }

    pub fn toggle_transport(&mut self) {
        let mode = TransportMode::ALL[self.transport_cursor];
        toggle_member(&mut self.request.transport, mode);
    }

    /// Commit pending inputs and produce the request to submit
    pub fn build_request(&mut self) -> Result<TripRequest, FormError> {
        self.apply_picks();
        self.commit_travelers();
        self.commit_start_date()?;
        self.commit_end_date()?;
        self.request.validate()?;
        Ok(self.request.clone())
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
