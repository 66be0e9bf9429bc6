pub mod config;

pub use config::ClientConfig;

use super::error::{GenerationError, TransportError};
use super::models::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use super::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::config::GenerationSettings;
use crate::config::constants::{http, urls};
use crate::types::DetailLevel;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// One-shot client for the Gemini `generateContent` endpoint.
///
/// Each call is a single request with no retries; callers that want retry
/// semantics wrap [`GeminiClient::generate`] themselves and can consult
/// [`GenerationError::is_retryable`].
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    settings: GenerationSettings,
    transport: Arc<dyn HttpTransport>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, TransportError> {
        Self::with_config(api_key, model, ClientConfig::default())
    }

    /// Create a client backed by `reqwest` with custom HTTP configuration
    pub fn with_config(
        api_key: String,
        model: String,
        config: ClientConfig,
    ) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(api_key, model, Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(
        api_key: String,
        model: String,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            api_key,
            model,
            base_url: urls::GEMINI_API_BASE.to_string(),
            settings: GenerationSettings::default(),
            transport,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Request body for `prompt` at the given detail level
    pub fn build_request(&self, prompt: &str, detail_level: DetailLevel) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: GenerationConfig {
                max_output_tokens: detail_level.max_output_tokens(),
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
                stop_sequences: self.settings.stop_sequences.clone(),
            },
            safety_settings: self.settings.safety_settings(),
        }
    }

    /// Send `prompt` and return the generated text
    pub async fn generate(
        &self,
        prompt: &str,
        detail_level: DetailLevel,
    ) -> Result<String, GenerationError> {
        if !self.has_api_key() {
            return Err(GenerationError::MissingApiKey);
        }

        let request = self.build_request(prompt, detail_level);
        debug!(
            model = %self.model,
            max_output_tokens = request.generation_config.max_output_tokens,
            prompt_chars = prompt.len(),
            "Sending generateContent request"
        );

        let start_time = Instant::now();
        let response = self
            .transport
            .post_json(&self.endpoint_url(), &request)
            .await?;
        let text = interpret_response(response)?;

        debug!(
            model = %self.model,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            output_chars = text.len(),
            "Generation completed"
        );
        Ok(text)
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Classify a completed exchange
pub(crate) fn interpret_response(response: HttpResponse) -> Result<String, GenerationError> {
    let HttpResponse { status, body } = response;

    if status != 200 {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|error_body| error_body.message())
            .unwrap_or_else(|| format!("status {status}"));
        return Err(GenerationError::Api { status, message });
    }

    serde_json::from_str::<GenerateContentResponse>(&body)
        .ok()
        .and_then(|parsed| parsed.first_text().map(str::to_string))
        .ok_or_else(|| GenerationError::InvalidResponse(excerpt(&body)))
}

/// First [`http::RESPONSE_EXCERPT_CHARS`] characters of a body
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(http::RESPONSE_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
