//! charsearch: character-name autocomplete fields in the terminal
//!
//! A page of forms is described in TOML and built into a small document tree.
//! The binder wires every marked input to its suggestion panel and talks to
//! the search endpoint through a background worker; the terminal host draws
//! the document and turns keys and clicks into the events a browser would
//! deliver.

pub mod app;
pub mod binder;
pub mod config;
pub mod dom;
pub mod error;
pub mod input;
pub mod layout;
pub mod notification;
pub mod search;
pub mod widgets;

#[cfg(test)]
mod test_utils;
