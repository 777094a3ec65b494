//! Notification module for charsearch
//!
//! Transient messages shown in the bottom-right corner, e.g. when a search
//! request fails or a form is submitted.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
