//! Client configuration loaded from environment variables.

use std::env;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the API; `None` runs against the in-memory API.
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MENTORLY_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            api_token: env::var("MENTORLY_API_TOKEN").ok(),
            timeout_secs: env::var("MENTORLY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
