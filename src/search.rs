//! Character search
//!
//! The HTTP side of the autocomplete: the suggestion item wire type, the
//! client for the search endpoint, and the background worker that runs
//! requests off the UI thread.

mod client;
mod types;
mod worker;

pub use client::{endpoint_url, SearchClient, SuggestionSource};
pub use types::{parse_suggestions, SearchError, SuggestionItem};
pub use worker::spawn_worker;
