// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_ENDPOINT: &str = "/search_characters";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

pub const DEFAULT_FIELD_SELECTOR: &str = ".char-input";
pub const DEFAULT_PANEL_SELECTOR: &str = ".search-suggestions";
pub const DEFAULT_MODE_ATTRIBUTE: &str = "data-mode";
pub const DEFAULT_MODE: &str = "classic";

pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 8;
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Search endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// How fields and their panels are discovered in a page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub field_selector: String,
    pub panel_selector: String,
    pub mode_attribute: String,
    pub default_mode: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        BinderConfig {
            field_selector: DEFAULT_FIELD_SELECTOR.to_string(),
            panel_selector: DEFAULT_PANEL_SELECTOR.to_string(),
            mode_attribute: DEFAULT_MODE_ATTRIBUTE.to_string(),
            default_mode: DEFAULT_MODE.to_string(),
        }
    }
}

/// Terminal UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub max_visible_rows: usize,
    pub notification_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub binder: BinderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search.endpoint, "/search_characters");
        assert_eq!(config.binder.default_mode, "classic");
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[search]
base_url = "https://hsr.example.com"
endpoint = "/api/search"
timeout_ms = 1500

[binder]
field_selector = ".guess"
panel_selector = ".dropdown"
mode_attribute = "data-variant"
default_mode = "emoji"

[ui]
max_visible_rows = 4
notification_ms = 800
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.search.base_url, "https://hsr.example.com");
        assert_eq!(config.search.endpoint, "/api/search");
        assert_eq!(config.search.timeout_ms, 1500);
        assert_eq!(config.binder.field_selector, ".guess");
        assert_eq!(config.binder.panel_selector, ".dropdown");
        assert_eq!(config.binder.mode_attribute, "data-variant");
        assert_eq!(config.binder.default_mode, "emoji");
        assert_eq!(config.ui.max_visible_rows, 4);
        assert_eq!(config.ui.notification_ms, 800);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[search]\ntimeout_ms = \"fast\"\n");
        assert!(result.is_err());
    }

    // For any subset of [search] keys present, the remaining keys keep their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_search_keys_use_defaults(
            include_base_url in prop::bool::ANY,
            include_endpoint in prop::bool::ANY,
            include_timeout in prop::bool::ANY,
        ) {
            let mut toml_content = String::from("[search]\n");
            if include_base_url {
                toml_content.push_str("base_url = \"http://localhost:9000\"\n");
            }
            if include_endpoint {
                toml_content.push_str("endpoint = \"/find\"\n");
            }
            if include_timeout {
                toml_content.push_str("timeout_ms = 42\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config: {}", toml_content);
            let config = config.unwrap();

            let expected_base = if include_base_url { "http://localhost:9000" } else { DEFAULT_BASE_URL };
            let expected_endpoint = if include_endpoint { "/find" } else { DEFAULT_ENDPOINT };
            let expected_timeout = if include_timeout { 42 } else { DEFAULT_TIMEOUT_MS };

            prop_assert_eq!(config.search.base_url.as_str(), expected_base);
            prop_assert_eq!(config.search.endpoint.as_str(), expected_endpoint);
            prop_assert_eq!(config.search.timeout_ms, expected_timeout);
            prop_assert_eq!(config.binder, BinderConfig::default());
        }
    }

    // Any mode tag made of word characters survives parsing unchanged.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_default_mode_round_trips(mode in "[a-z][a-z0-9_]{0,15}") {
            let toml_content = format!("[binder]\ndefault_mode = \"{}\"\n", mode);
            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.binder.default_mode, mode);
        }
    }
}
