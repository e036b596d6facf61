//! Client Configuration
//!
//! Build-time settings for the API endpoint, auth token lookup and UI timing.

/// Fallback API base when `TASKBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// localStorage key holding the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "AUTH_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL without trailing slash
    pub api_base_url: String,
    pub token_storage_key: String,
    /// How long a toast stays visible
    pub toast_ttl_ms: u32,
    /// Number of log records kept in memory
    pub log_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Read build-time overrides
    pub fn from_env() -> Self {
        let mut config = Self::with_base_url(option_env!("TASKBOARD_API_URL").unwrap_or(DEFAULT_API_URL));
        if let Some(key) = option_env!("TASKBOARD_TOKEN_KEY") {
            config.token_storage_key = key.to_string();
        }
        config
    }

    pub fn with_base_url(base: &str) -> Self {
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            toast_ttl_ms: 4_000,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }

    /// Absolute URL for an API path (`/projects/...`)
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("https://api.example.com/api/");
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.url_for("/projects"), "https://api.example.com/api/projects");
        assert_eq!(config.url_for("projects/p1"), "https://api.example.com/api/projects/p1");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.token_storage_key, "AUTH_TOKEN");
    }
}
