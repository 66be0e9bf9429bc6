use crate::config::constants::rate_limit;
use serde::{Deserialize, Serialize};

/// Per-user admission control for generation requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: usize,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_true() -> bool {
    true
}
fn default_requests_per_window() -> usize {
    rate_limit::DEFAULT_REQUESTS_PER_WINDOW
}
fn default_window_secs() -> u64 {
    rate_limit::DEFAULT_WINDOW_SECS
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            requests_per_window: default_requests_per_window(),
            window_secs: default_window_secs(),
        }
    }
}
