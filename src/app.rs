mod events;
mod mouse_click;
mod render;
mod state;

// Re-export public types
pub use state::App;

#[cfg(test)]
#[path = "app/app_state_tests.rs"]
mod app_state_tests;
