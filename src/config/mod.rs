//! Configuration module for the portal client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Default API root, matching the development backend.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1/";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the portal REST API, normalized to end with a slash
    pub api_url: String,
    /// Log level for diagnostics (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut api_url = env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        // The terminal doubles as the UI, so diagnostics stay quiet by default
        let log_level = env::var("PORTAL_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Self { api_url, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the process environment so the cases cannot race
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORTAL_API_URL");
        env::remove_var("PORTAL_LOG_LEVEL");

        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, "warn");

        env::set_var("PORTAL_API_URL", "http://example.org/api/v1");
        let config = Config::from_env();
        assert_eq!(config.api_url, "http://example.org/api/v1/");
        env::remove_var("PORTAL_API_URL");
    }
}
