//! Entry point tying the catalog, prompt builder and Gemini client together

use crate::config::OfstedReadyConfig;
use crate::gemini::{ClientConfig, GeminiClient, GenerationError};
use crate::prompts::PromptBuilder;
use crate::types::{GenerationRequest, SchoolProfile};
use anyhow::{Context, Result};
use std::time::Duration;

/// Generated text or the reason none was produced
pub type GenerationResult = std::result::Result<String, GenerationError>;

/// Builds prompts for school content and sends them to Gemini
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    client: GeminiClient,
    prompts: PromptBuilder,
}

impl ContentGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            prompts: PromptBuilder::new(),
        }
    }

    /// Build a generator from loaded configuration.
    ///
    /// A missing API key is not an error here; [`ContentGenerator::generate`]
    /// reports it as [`GenerationError::MissingApiKey`].
    pub fn from_config(config: &OfstedReadyConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().unwrap_or_default();
        let client_config = ClientConfig::default()
            .with_request_timeout(Duration::from_secs(config.api.request_timeout_secs))
            .with_connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
            .with_max_redirects(config.api.max_redirects);

        let client = GeminiClient::with_config(api_key, config.api.model.clone(), client_config)
            .context("Failed to initialize Gemini client")?
            .with_base_url(config.api.base_url.clone())
            .with_settings(config.generation.clone());

        Ok(Self::new(client))
    }

    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    /// Prompt that [`ContentGenerator::generate`] would send
    pub fn prompt_for(&self, request: &GenerationRequest, profile: &SchoolProfile) -> String {
        self.prompts.build(request, profile)
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
        profile: &SchoolProfile,
    ) -> GenerationResult {
        if !self.client.has_api_key() {
            return Err(GenerationError::MissingApiKey);
        }

        let prompt = self.prompt_for(request, profile);
        self.client.generate(&prompt, request.detail_level).await
    }
}
