//! Configuration with layered overrides
//!
//! Built-in defaults, then build-time environment overrides
//! (`FEEDBACK_API_URL`, `FEEDBACK_STALE_SECS`, `FEEDBACK_LOG_CAPACITY`).

use chrono::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/feedbacks";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base path of the feedback REST API
    pub api_base_url: String,
    /// Seconds a cached read stays fresh
    pub stale_secs: i64,
    /// Records kept by the in-memory log ring
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            stale_secs: 5,
            log_capacity: 500,
        }
    }
}

/// One override layer; unset fields leave the lower layer alone
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
    pub api_base_url: Option<String>,
    pub stale_secs: Option<i64>,
    pub log_capacity: Option<usize>,
}

impl ConfigLayer {
    /// Layer read from variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_pairs([
            ("FEEDBACK_API_URL", option_env!("FEEDBACK_API_URL")),
            ("FEEDBACK_STALE_SECS", option_env!("FEEDBACK_STALE_SECS")),
            ("FEEDBACK_LOG_CAPACITY", option_env!("FEEDBACK_LOG_CAPACITY")),
        ])
    }

    /// Build a layer from `(variable, value)` pairs; unparsable numbers are ignored
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let mut layer = Self::default();
        for (key, value) in pairs {
            let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            match key {
                "FEEDBACK_API_URL" => layer.api_base_url = Some(value.to_string()),
                "FEEDBACK_STALE_SECS" => layer.stale_secs = value.parse().ok(),
                "FEEDBACK_LOG_CAPACITY" => layer.log_capacity = value.parse().ok(),
                _ => {}
            }
        }
        layer
    }
}

impl Config {
    /// Defaults merged with the build environment
    pub fn load() -> Self {
        let mut config = Config::default();
        config.merge(ConfigLayer::from_build_env());
        config
    }

    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(url) = layer.api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = layer.stale_secs {
            self.stale_secs = secs.max(0);
        }
        if let Some(capacity) = layer.log_capacity {
            self.log_capacity = capacity.max(1);
        }
    }

    pub fn stale_after(&self) -> Duration {
        Duration::seconds(self.stale_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api/feedbacks");
        assert_eq!(config.stale_after(), Duration::seconds(5));
    }

    #[test]
    fn test_layer_overrides_only_set_fields() {
        let mut config = Config::default();
        config.merge(ConfigLayer::from_pairs([
            ("FEEDBACK_API_URL", Some("https://feedback.example.com/api/feedbacks")),
            ("FEEDBACK_STALE_SECS", Some("not a number")),
            ("FEEDBACK_LOG_CAPACITY", None),
        ]));

        assert_eq!(config.api_base_url, "https://feedback.example.com/api/feedbacks");
        assert_eq!(config.stale_secs, 5);
        assert_eq!(config.log_capacity, 500);
    }

    #[test]
    fn test_numeric_overrides_are_clamped() {
        let mut config = Config::default();
        config.merge(ConfigLayer { stale_secs: Some(-3), log_capacity: Some(0), ..Default::default() });
        assert_eq!(config.stale_secs, 0);
        assert_eq!(config.log_capacity, 1);
    }
}
