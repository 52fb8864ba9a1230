//! Central configuration constants and client endpoints.

use std::time::Duration;

/// Backend base URL used when `BLOODBANK_API_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Generative-text endpoint base used when `BLOODBANK_GENAI_URL` is unset.
pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when `BLOODBANK_GENAI_MODEL` is unset.
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// How long a notification stays on screen.
pub const NOTIFICATION_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Capacity of the controller's event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Connect timeout for the backend HTTP client. Requests themselves are not
/// time-limited.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_API_URL: &str = "BLOODBANK_API_URL";
pub const ENV_GENAI_URL: &str = "BLOODBANK_GENAI_URL";
pub const ENV_GENAI_MODEL: &str = "BLOODBANK_GENAI_MODEL";
pub const ENV_GENAI_API_KEY: &str = "GEMINI_API_KEY";

/// Where the two external services live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub genai_base_url: String,
    pub genai_model: String,
    /// Sent as-is, empty when unset.
    pub genai_api_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            genai_base_url: DEFAULT_GENAI_BASE_URL.to_owned(),
            genai_model: DEFAULT_GENAI_MODEL.to_owned(),
            genai_api_key: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_base_url: get(ENV_API_URL)
                .map(|v| trim_base_url(&v))
                .unwrap_or(defaults.api_base_url),
            genai_base_url: get(ENV_GENAI_URL)
                .map(|v| trim_base_url(&v))
                .unwrap_or(defaults.genai_base_url),
            genai_model: get(ENV_GENAI_MODEL).unwrap_or(defaults.genai_model),
            genai_api_key: lookup(ENV_GENAI_API_KEY).unwrap_or_default(),
        }
    }
}

/// Strips whitespace and trailing slashes so paths can be appended with `/`.
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = ClientConfig::from_lookup(|_| None);
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.api_base_url, "http://localhost:8080/api");
        assert!(cfg.genai_api_key.is_empty());
    }

    #[test]
    fn overrides_are_trimmed() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, " http://donors.internal:9000/api/ "),
            (ENV_GENAI_MODEL, "gemini-pro"),
            (ENV_GENAI_API_KEY, "k-123"),
            (ENV_GENAI_URL, ""),
        ]
        .into_iter()
        .collect();

        let cfg = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_base_url, "http://donors.internal:9000/api");
        assert_eq!(cfg.genai_model, "gemini-pro");
        assert_eq!(cfg.genai_api_key, "k-123");
        assert_eq!(cfg.genai_base_url, DEFAULT_GENAI_BASE_URL);
    }
}
