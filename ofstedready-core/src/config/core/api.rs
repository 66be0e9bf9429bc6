use crate::config::constants::{defaults, http, urls};
use serde::{Deserialize, Serialize};

/// Gemini endpoint and credentials
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Key stored in the config file. Environment variables take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable consulted first for the key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_api_key_env() -> String {
    defaults::DEFAULT_API_KEY_ENV.to_string()
}
fn default_model() -> String {
    defaults::DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    urls::GEMINI_API_BASE.to_string()
}
fn default_request_timeout() -> u64 {
    http::REQUEST_TIMEOUT_SECS
}
fn default_connect_timeout() -> u64 {
    http::CONNECT_TIMEOUT_SECS
}
fn default_max_redirects() -> usize {
    http::MAX_REDIRECTS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_redirects: default_max_redirects(),
        }
    }
}
