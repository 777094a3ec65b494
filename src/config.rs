//! Configuration module for charsearch
//!
//! Reads `~/.config/charsearch/config.toml`. Every key is optional and falls
//! back to the defaults in [`types`].

mod loader;
pub mod types;

pub use loader::{config_path, load_config, load_config_from_path, ConfigResult};
pub use types::{BinderConfig, Config, SearchConfig, UiConfig};
