/// Connection settings for the Mentorly API.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL, e.g. `https://api.example.com`. A trailing slash is ignored.
    pub base_url: String,
    /// Bearer token sent with every request, if the user is signed in.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("mentorly-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            token: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
