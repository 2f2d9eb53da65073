//! Terminal trip-planning intake form
//!
//! The interesting part is [`location::LocationLookup`], a debounced place
//! autocomplete field backed by a background lookup worker. The rest of the
//! crate is the form hosting two of them and the terminal app around it.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod location;
pub mod logging;
pub mod notification;
pub mod widgets;
