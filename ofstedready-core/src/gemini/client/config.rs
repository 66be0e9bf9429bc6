use crate::config::constants::http;
use std::time::Duration;

/// Configuration for the outbound HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of idle connections per host
    pub pool_max_idle_per_host: usize,
    /// How long to keep idle connections alive
    pub pool_idle_timeout: Duration,
    /// Whole-request timeout; the only cancellation a caller gets
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Redirects followed before giving up
    pub max_redirects: usize,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 2,
            pool_idle_timeout: Duration::from_secs(90),
            request_timeout: Duration::from_secs(http::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(http::CONNECT_TIMEOUT_SECS),
            max_redirects: http::MAX_REDIRECTS,
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
