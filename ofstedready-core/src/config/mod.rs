//! OfstedReady configuration
//!
//! Loads `ofstedready.toml` and resolves the Gemini API key. Every section has
//! defaults, so an empty or partial file is valid.

pub mod api_keys;
pub mod constants;
pub mod core;
pub mod loader;

pub use api_keys::{ApiKeySources, load_dotenv, mask_api_key, resolve_api_key};
pub use core::{ApiConfig, GenerationSettings, RateLimitConfig};
pub use loader::{ConfigManager, OfstedReadyConfig};
