// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::location::LookupSettings;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = concat!("wayfinder/", env!("CARGO_PKG_VERSION"));

/// Location lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Quiet period after the last keystroke before a lookup is sent
    pub debounce_ms: u64,
    /// Shortest query (in characters) that triggers a lookup
    pub min_query_chars: usize,
    pub endpoint: String,
    /// Sent as User-Agent; Nominatim rejects anonymous clients
    pub user_agent: String,
    pub timeout_secs: u64,
    pub result_limit: u8,
    /// Preferred result language, forwarded as `accept-language`
    pub language: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            debounce_ms: 500,
            min_query_chars: 3,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            result_limit: 10,
            language: None,
        }
    }
}

impl LookupConfig {
    /// Widget timing derived from this section
    pub fn settings(&self) -> LookupSettings {
        LookupSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            // A zero threshold would fire on an empty field
            min_query_chars: self.min_query_chars.max(1),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lookup.debounce_ms, 500);
        assert_eq!(config.lookup.min_query_chars, 3);
        assert_eq!(config.lookup.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_full_lookup_section() {
        let toml_content = r#"
[lookup]
debounce_ms = 250
min_query_chars = 4
endpoint = "http://localhost:8080/search"
user_agent = "trip-desk/2.0 (ops@example.com)"
timeout_secs = 3
result_limit = 5
language = "de"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.lookup.debounce_ms, 250);
        assert_eq!(config.lookup.min_query_chars, 4);
        assert_eq!(config.lookup.endpoint, "http://localhost:8080/search");
        assert_eq!(config.lookup.user_agent, "trip-desk/2.0 (ops@example.com)");
        assert_eq!(config.lookup.timeout_secs, 3);
        assert_eq!(config.lookup.result_limit, 5);
        assert_eq!(config.lookup.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[lookup]\ndebounce_ms = \"fast\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_from_config() {
        let config = LookupConfig {
            debounce_ms: 750,
            min_query_chars: 2,
            ..LookupConfig::default()
        };
        let settings = config.settings();

        assert_eq!(settings.debounce, Duration::from_millis(750));
        assert_eq!(settings.min_query_chars, 2);
    }

    #[test]
    fn test_zero_min_query_chars_is_raised() {
        let config = LookupConfig {
            min_query_chars: 0,
            ..LookupConfig::default()
        };
        assert_eq!(config.settings().min_query_chars, 1);
    }

    // Any subset of [lookup] keys parses, and absent keys keep their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            debounce_ms in prop::option::of(0u64..5_000),
            min_query_chars in prop::option::of(1usize..10),
            include_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[lookup]\n");
                if let Some(ms) = debounce_ms {
                    toml_content.push_str(&format!("debounce_ms = {}\n", ms));
                }
                if let Some(chars) = min_query_chars {
                    toml_content.push_str(&format!("min_query_chars = {}\n", chars));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();
            let defaults = LookupConfig::default();

            let expected_ms = if include_section { debounce_ms.unwrap_or(defaults.debounce_ms) } else { defaults.debounce_ms };
            let expected_chars = if include_section { min_query_chars.unwrap_or(defaults.min_query_chars) } else { defaults.min_query_chars };

            prop_assert_eq!(config.lookup.debounce_ms, expected_ms);
            prop_assert_eq!(config.lookup.min_query_chars, expected_chars);
            prop_assert_eq!(config.lookup.endpoint, defaults.endpoint);
        }
    }
}
