//! Document model for bound pages
//!
//! A small arena-backed element tree with just enough of the DOM to host the
//! autocomplete binder: classes, attributes, a value per input, a display flag,
//! simple selectors and form submission. Pages are described in TOML.

mod document;
mod page;
mod selector;

pub use document::{Document, Element, FormSubmission, NodeId};
pub use page::{ElementSpec, Page};
pub use selector::Selector;
