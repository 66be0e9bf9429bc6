//! API key retrieval from environment variables, `.env` files and the
//! configuration file.
//!
//! Environment variables always win over the file so a key never has to be
//! committed alongside `ofstedready.toml`.

use crate::config::constants::defaults;
use std::env;
use tracing::{debug, warn};

/// Where to look for the Gemini API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name
    pub env_var: String,
    /// Secondary environment variable name
    pub fallback_env_var: String,
    /// Key from the configuration file
    pub config_value: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            env_var: defaults::DEFAULT_API_KEY_ENV.to_string(),
            fallback_env_var: defaults::FALLBACK_API_KEY_ENV.to_string(),
            config_value: None,
        }
    }
}

impl ApiKeySources {
    pub fn new(env_var: impl Into<String>, config_value: Option<String>) -> Self {
        Self {
            env_var: env_var.into(),
            config_value,
            ..Default::default()
        }
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded environment variables"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to load .env file: {e}"),
    }
}

/// Resolve the API key from the process environment, then the config file.
///
/// Blank values are treated as absent; `None` means nothing is configured.
pub fn resolve_api_key(sources: &ApiKeySources) -> Option<String> {
    resolve_api_key_with(sources, |name| env::var(name).ok())
}

/// Same as [`resolve_api_key`] with an injectable environment lookup
pub fn resolve_api_key_with<F>(sources: &ApiKeySources, lookup_env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |value: String| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    lookup_env(&sources.env_var)
        .and_then(non_blank)
        .or_else(|| lookup_env(&sources.fallback_env_var).and_then(non_blank))
        .or_else(|| sources.config_value.clone().and_then(non_blank))
}

/// Mask a key for display, keeping the last four characters
pub fn mask_api_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}
