//! Client configuration.

/// Base URL of the public API. Endpoint paths are appended to it.
pub const DEFAULT_API_BASE: &str = "https://botdesignerdiscord.com/public/api/";

/// HTML status page listing the hosting nodes.
pub const DEFAULT_STATUS_URL: &str = "https://botdesignerdiscord.com/status";

pub const DEFAULT_USER_AGENT: &str = concat!("bdfd-api/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Always ends with `/`.
    pub api_base: String,
    pub status_url: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            status_url: DEFAULT_STATUS_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.api_base = base;
        self
    }

    pub fn with_status_url(mut self, url: impl Into<String>) -> Self {
        self.status_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Absolute URL for a path relative to the API base.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
