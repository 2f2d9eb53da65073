//! Location autocomplete
//!
//! A reusable text field that looks up places while the user types. Keystrokes
//! reschedule a debounce deadline; when it passes, one search is handed to the
//! lookup worker tagged with the widget's generation. Results for an older
//! generation are dropped on arrival.

mod debouncer;
pub mod lookup_render;
mod lookup_state;
pub mod provider;
mod suggestion;
pub mod worker;

pub use debouncer::Debouncer;
pub use lookup_state::{LocationLookup, LookupSettings};
pub use provider::{LookupError, LookupProvider, NominatimClient};
pub use suggestion::{Suggestion, parse_suggestions};
pub use worker::{LookupRequest, LookupResponse, spawn_worker};
