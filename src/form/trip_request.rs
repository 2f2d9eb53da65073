//! Trip request model
//!
//! The structured preferences the form collects, serialized as JSON on submit.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::error::WayfinderError;
use crate::location::Suggestion;

pub const BUDGET_FLOOR: u32 = 500;
pub const BUDGET_CEILING: u32 = 15_000;
pub const BUDGET_STEP: u32 = 500;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("End date cannot be before the start date.")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date {input:?}, expected YYYY-MM-DD.")]
    InvalidDate { input: String },
}

/// A fixed set of options shown as a cycling selector or checkbox group
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountryScope {
    #[default]
    One,
    Two,
    Multi,
}

impl Choice for CountryScope {
    const ALL: &'static [Self] = &[CountryScope::One, CountryScope::Two, CountryScope::Multi];

    fn label(&self) -> &'static str {
        match self {
            CountryScope::One => "One Country Only",
            CountryScope::Two => "Two Countries Max",
            CountryScope::Multi => "Multi-Country",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VacationType {
    Solo,
    Honeymoon,
    Family,
    Business,
    Backpacking,
    Luxury,
}

impl Choice for VacationType {
    const ALL: &'static [Self] = &[
        VacationType::Solo,
        VacationType::Honeymoon,
        VacationType::Family,
        VacationType::Business,
        VacationType::Backpacking,
        VacationType::Luxury,
    ];

    fn label(&self) -> &'static str {
        match self {
            VacationType::Solo => "Solo",
            VacationType::Honeymoon => "Honeymoon",
            VacationType::Family => "Family",
            VacationType::Business => "Business",
            VacationType::Backpacking => "Backpacking",
            VacationType::Luxury => "Luxury",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accommodation {
    Luxury,
    #[default]
    MidRange,
    Budget,
}

impl Choice for Accommodation {
    const ALL: &'static [Self] = &[
        Accommodation::Luxury,
        Accommodation::MidRange,
        Accommodation::Budget,
    ];

    fn label(&self) -> &'static str {
        match self {
            Accommodation::Luxury => "Luxury ($$$)",
            Accommodation::MidRange => "Mid-Range ($$)",
            Accommodation::Budget => "Budget ($)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    Adventure,
    Food,
    Culture,
    Nature,
    Nightlife,
    Shopping,
    Relaxation,
    Festivals,
    HistoricalSites,
    Hiking,
    Beaches,
}

impl Choice for Interest {
    const ALL: &'static [Self] = &[
        Interest::Adventure,
        Interest::Food,
        Interest::Culture,
        Interest::Nature,
        Interest::Nightlife,
        Interest::Shopping,
        Interest::Relaxation,
        Interest::Festivals,
        Interest::HistoricalSites,
        Interest::Hiking,
        Interest::Beaches,
    ];

    fn label(&self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Food => "Food",
            Interest::Culture => "Culture",
            Interest::Nature => "Nature",
            Interest::Nightlife => "Nightlife",
            Interest::Shopping => "Shopping",
            Interest::Relaxation => "Relaxation",
            Interest::Festivals => "Festivals",
            Interest::HistoricalSites => "Historical Sites",
            Interest::Hiking => "Hiking",
            Interest::Beaches => "Beaches",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Flights,
    Trains,
    Buses,
    RentalCar,
    PublicTransport,
}

impl Choice for TransportMode {
    const ALL: &'static [Self] = &[
        TransportMode::Flights,
        TransportMode::Trains,
        TransportMode::Buses,
        TransportMode::RentalCar,
        TransportMode::PublicTransport,
    ];

    fn label(&self) -> &'static str {
        match self {
            TransportMode::Flights => "Flights",
            TransportMode::Trains => "Trains",
            TransportMode::Buses => "Buses",
            TransportMode::RentalCar => "Rental Car",
            TransportMode::PublicTransport => "Public Transport",
        }
    }
}

/// Add `item` if absent, remove it if present. Insertion order is kept.
pub fn toggle_member<T: PartialEq>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|i| *i == item) {
        Some(index) => {
            items.remove(index);
        }
        None => items.push(item),
    }
}

/// Budget in whole USD, always within the floor/ceiling and `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self {
            min: 2_000,
            max: 5_000,
        }
    }
}

impl BudgetRange {
    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn raise_min(&mut self) {
        self.min = (self.min + BUDGET_STEP).min(self.max);
    }

    pub fn lower_min(&mut self) {
        self.min = self.min.saturating_sub(BUDGET_STEP).max(BUDGET_FLOOR);
    }

    pub fn raise_max(&mut self) {
        self.max = (self.max + BUDGET_STEP).min(BUDGET_CEILING);
    }

    pub fn lower_max(&mut self) {
        self.max = self.max.saturating_sub(BUDGET_STEP).max(self.min);
    }
}

/// Everything the form collects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub departure: Option<Suggestion>,
    pub destination: Option<Suggestion>,
    pub consider_nearby: bool,
    pub country_scope: CountryScope,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tentative_dates: bool,
    pub travelers: u32,
    pub budget: BudgetRange,
    pub vacation_type: Option<VacationType>,
    pub road_trip: bool,
    pub interests: Vec<Interest>,
    pub accommodation: Accommodation,
    pub transport: Vec<TransportMode>,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            departure: None,
            destination: None,
            consider_nearby: false,
            country_scope: CountryScope::default(),
            start_date: None,
            end_date: None,
            tentative_dates: false,
            travelers: 1,
            budget: BudgetRange::default(),
            vacation_type: None,
            road_trip: false,
            interests: Vec::new(),
            accommodation: Accommodation::default(),
            transport: Vec::new(),
        }
    }
}

impl TripRequest {
    /// Check the date pair: the trip cannot end before it starts
    pub fn validate(&self) -> Result<(), FormError> {
        check_date_order(self.start_date, self.end_date)
    }

    /// Encode for stdout, pretty-printed unless `compact`
    pub fn to_json(&self, compact: bool) -> Result<String, WayfinderError> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}

pub fn check_date_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), FormError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(FormError::EndBeforeStart { start, end }),
        _ => Ok(()),
    }
}

/// Parse a `YYYY-MM-DD` field; blank means no date
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FormError::InvalidDate {
            input: trimmed.to_string(),
        })
}

#[cfg(test)]
#[path = "trip_request_tests.rs"]
mod trip_request_tests;
