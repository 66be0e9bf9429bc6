pub mod api;
pub mod generation;
pub mod rate_limit;

pub use api::ApiConfig;
pub use generation::GenerationSettings;
pub use rate_limit::RateLimitConfig;
