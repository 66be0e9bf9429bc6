use thiserror::Error;

/// Why a generation attempt produced no text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No API key configured; the request was never sent
    #[error(
        "Google Gemini API key not configured. Set the variable named by api.api_key_env, GOOGLE_API_KEY, or api.api_key in ofstedready.toml"
    )]
    MissingApiKey,

    /// Network, DNS or TLS failure before any response arrived
    #[error("API request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 200 response without `candidates[0].content.parts[0].text`
    #[error("Invalid API response format. Response: {0}")]
    InvalidResponse(String),
}

/// Flat classification of [`GenerationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    MissingApiKey,
    Transport,
    Api,
    InvalidResponse,
}

impl GenerationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::Transport => "transport",
            Self::Api => "api",
            Self::InvalidResponse => "invalid_response",
        }
    }
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            Self::MissingApiKey => GenerationErrorKind::MissingApiKey,
            Self::Transport(_) => GenerationErrorKind::Transport,
            Self::Api { .. } => GenerationErrorKind::Api,
            Self::InvalidResponse(_) => GenerationErrorKind::InvalidResponse,
        }
    }

    /// Human-facing detail without the category prefix
    pub fn message(&self) -> String {
        match self {
            Self::MissingApiKey => self.to_string(),
            Self::Transport(message) | Self::InvalidResponse(message) => message.clone(),
            Self::Api { message, .. } => message.clone(),
        }
    }

    /// Hint for callers that layer their own retry policy on top.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::MissingApiKey | Self::InvalidResponse(_) => false,
        }
    }
}

/// Failure of the underlying HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // the request URL carries the API key as a query parameter
        Self::new(error.without_url().to_string())
    }
}

impl From<TransportError> for GenerationError {
    fn from(error: TransportError) -> Self {
        Self::Transport(error.message)
    }
}
