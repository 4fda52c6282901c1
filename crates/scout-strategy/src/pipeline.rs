//! Collect, assemble, generate.

use scout_core::{AppConfig, CollectedData, Credentials, StrategyRequest};
use scout_sources::{build_http_client, Collector};

use crate::error::GenerationError;
use crate::gemini::GeminiClient;
use crate::prompt::assemble;

/// The full strategy flow for one request.
///
/// Build once per process: the collector inside owns the forum token cache.
pub struct StrategyPipeline {
    collector: Collector,
    generator: GeminiClient,
}

impl StrategyPipeline {
    #[must_use]
    pub fn new(collector: Collector, generator: GeminiClient) -> Self {
        Self {
            collector,
            generator,
        }
    }

    /// Wires the collector and generator from config and credentials.
    ///
    /// The generator gets its own HTTP client with the longer generator
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Setup`] or
    /// [`GenerationError::InvalidBaseUrl`] if a client cannot be built.
    pub fn from_config(
        config: &AppConfig,
        credentials: &Credentials,
    ) -> Result<Self, GenerationError> {
        let collector = Collector::from_config(config, credentials)?;
        let client = build_http_client(config.generator_timeout_secs, &config.user_agent)?;
        let generator = GeminiClient::new(
            client,
            &credentials.gemini_api_key,
            &config.endpoints.gemini_base_url,
            &config.gemini_model,
        )?;
        Ok(Self::new(collector, generator))
    }

    /// Collects data and renders the prompt without calling the generator.
    pub async fn preview(&self, request: &StrategyRequest) -> (CollectedData, String) {
        let collected = self.collector.collect(request).await;
        let prompt = assemble(request, &collected);
        (collected, prompt)
    }

    /// Produces the generator's raw strategy document for `request`.
    ///
    /// Source failures only thin out the prompt; the generator is called
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the generative call fails.
    pub async fn run(&self, request: &StrategyRequest) -> Result<String, GenerationError> {
        let (_, prompt) = self.preview(request).await;
        tracing::info!(prompt_chars = prompt.chars().count(), "prompt assembled");
        self.generator.generate(&prompt).await.inspect_err(|e| {
            tracing::error!(error = %e, "strategy generation failed");
        })
    }
}
