/// Model ID constants
pub mod models {
    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "gemini-1.5-flash",
            "gemini-1.5-pro",
            "gemini-2.0-flash",
            "gemini-2.5-flash",
            "gemini-2.5-pro",
        ];
    }
}

/// URL constants for API endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Output token budgets per detail level
pub mod tokens {
    pub const BASIC_MAX_OUTPUT_TOKENS: u32 = 1_000;
    pub const STANDARD_MAX_OUTPUT_TOKENS: u32 = 2_000;
    pub const COMPREHENSIVE_MAX_OUTPUT_TOKENS: u32 = 3_000;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = STANDARD_MAX_OUTPUT_TOKENS;
}

/// Sampling defaults sent in `generationConfig`
pub mod sampling {
    pub const DEFAULT_TEMPERATURE: f64 = 0.3;
    pub const DEFAULT_TOP_P: f64 = 0.9;
}

/// HTTP transport defaults
pub mod http {
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const MAX_REDIRECTS: usize = 5;
    pub const USER_AGENT: &str = concat!("ofstedready/", env!("CARGO_PKG_VERSION"));
    /// Longest slice of a raw response body carried inside an error
    pub const RESPONSE_EXCERPT_CHARS: usize = 500;
}

/// Admission control defaults (requests per user per window)
pub mod rate_limit {
    pub const DEFAULT_REQUESTS_PER_WINDOW: usize = 15;
    pub const DEFAULT_WINDOW_SECS: u64 = 60;
}

/// Default configuration values
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::google::DEFAULT_MODEL;
    pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const CONFIG_FILE_NAME: &str = "ofstedready.toml";
    pub const CONFIG_DIR_NAME: &str = ".ofstedready";
    /// Per-user request windows carried between CLI runs, inside `CONFIG_DIR_NAME`
    pub const RATE_LIMIT_STATE_FILE: &str = "rate_limit.json";

    pub const SCHOOL_NAME: &str = "[School Name]";
    pub const HEADTEACHER_NAME: &str = "[Headteacher Name]";
    pub const AGE_RANGE: &str = "4-11";
}
