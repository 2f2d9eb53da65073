//! Location lookup provider abstraction
//!
//! Defines the LookupProvider trait the worker drives, the LookupError
//! taxonomy, and the Nominatim binding used by the application.

use futures::future::BoxFuture;
use thiserror::Error;

use super::suggestion::Suggestion;

mod nominatim;

pub use nominatim::NominatimClient;

/// Errors that can occur while looking up locations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Provider unreachable, timed out, or answered with a non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a payload we could not parse
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A geocoding backend
///
/// Given free text, returns candidate places in relevance order. Implementors
/// must be shareable with the worker thread.
pub trait LookupProvider: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>>;
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
