//! Trip request intake form
//!
//! Hosts two location lookups (departure and destination) next to the rest of
//! the trip preferences and turns them into a [`TripRequest`] on submit.

mod form_events;
pub mod form_render;
mod form_state;
mod trip_request;

pub use form_events::FormEvent;
pub use form_state::{FormField, TripForm};
pub use trip_request::{
    Accommodation, BudgetRange, Choice, CountryScope, FormError, Interest, TransportMode,
    TripRequest, VacationType,
};
