//! Configuration (layered: code > env > defaults).

use std::time::Duration;

use crate::error::{Result, StudioError};

pub const DEFAULT_BASE_URL: &str = "https://sentiment-studio-api.loca.lt";
pub const DEFAULT_BYPASS_VALUE: &str = "some-value";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_CROP_SIZE: u32 = 1000;

/// Client configuration shared by both screens.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Root URL of the inference service, without the endpoint path.
    pub base_url: String,
    /// Value for the `bypass-tunnel-reminder` header required by the tunnel proxy.
    pub bypass_value: String,
    /// Quiet period after the last keystroke before a prediction is sent.
    pub debounce: Duration,
    pub request_timeout: Duration,
    /// Side length of the square center crop applied to annotated frames.
    pub crop_size: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bypass_value: DEFAULT_BYPASS_VALUE.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_TIMEOUT,
            crop_size: DEFAULT_CROP_SIZE,
        }
    }
}

impl StudioConfig {
    /// Load from environment variables on top of the defaults.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("SENTIMENT_STUDIO_BASE_URL") {
            config.base_url = url;
        }
        if let Some(value) = lookup("SENTIMENT_STUDIO_BYPASS_VALUE") {
            config.bypass_value = value;
        }
        if let Some(ms) = lookup("SENTIMENT_STUDIO_DEBOUNCE_MS") {
            config.debounce = Duration::from_millis(parse_number("SENTIMENT_STUDIO_DEBOUNCE_MS", &ms)?);
        }
        if let Some(secs) = lookup("SENTIMENT_STUDIO_TIMEOUT_SECS") {
            config.request_timeout =
                Duration::from_secs(parse_number("SENTIMENT_STUDIO_TIMEOUT_SECS", &secs)?);
        }
        if let Some(size) = lookup("SENTIMENT_STUDIO_CROP_SIZE") {
            let size = parse_number("SENTIMENT_STUDIO_CROP_SIZE", &size)?;
            config.crop_size = u32::try_from(size).map_err(|_| {
                StudioError::Configuration(format!("SENTIMENT_STUDIO_CROP_SIZE out of range: {size}"))
            })?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_bypass_value(mut self, value: impl Into<String>) -> Self {
        self.bypass_value = value.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_crop_size(mut self, size: u32) -> Self {
        self.crop_size = size;
        self
    }

    /// Full URL for an endpoint path such as `/lstmPredict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| StudioError::Configuration(format!("{key} must be a non-negative integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_hosted_service() {
        let config = StudioConfig::default();
        assert_eq!(config.base_url, "https://sentiment-studio-api.loca.lt");
        assert_eq!(config.bypass_value, "some-value");
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.crop_size, 1000);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = StudioConfig::from_lookup(lookup_from(&[
            ("SENTIMENT_STUDIO_BASE_URL", "http://localhost:5000"),
            ("SENTIMENT_STUDIO_DEBOUNCE_MS", "50"),
            ("SENTIMENT_STUDIO_CROP_SIZE", "256"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.crop_size, 256);
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn unparseable_number_is_a_configuration_error() {
        let err = StudioConfig::from_lookup(lookup_from(&[("SENTIMENT_STUDIO_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, StudioError::Configuration(msg) if msg.contains("SENTIMENT_STUDIO_TIMEOUT_SECS")));
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = StudioConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.endpoint("/lstmPredict"), "http://127.0.0.1:8080/lstmPredict");
        assert_eq!(config.endpoint("video_feed"), "http://127.0.0.1:8080/video_feed");
    }
}
