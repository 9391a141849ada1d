//! Text-generation provider trait and request/response types.
//!
//! Defines the interface every backend implements, plus the factory that
//! creates the right provider from CLI flags and config.

use crate::config::LlmConfig;
use crate::error::LlmError;
use async_trait::async_trait;
use std::time::Duration;

/// Provider identifiers accepted by [`LlmProviderFactory::create`].
pub const KNOWN_PROVIDERS: [&str; 2] = ["huggingface", "openai"];

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Instruction text for the model
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// The response from a generation call.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Generated text, already trimmed
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all text-generation backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn TextGenerationProvider>` for dynamic dispatch).
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Provider name for logging (e.g., "huggingface", "openai").
    fn name(&self) -> &str;

    /// Check whether the provider is configured.
    async fn is_available(&self) -> bool;

    /// Generate text for the given request.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError>;

    /// Per-request timeout, if one is configured.
    fn timeout(&self) -> Option<Duration>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Apply an optional timeout to an outgoing request.
pub(crate) fn with_timeout(
    builder: reqwest::RequestBuilder,
    timeout: Option<Duration>,
) -> reqwest::RequestBuilder {
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

/// Factory that creates the appropriate provider from CLI flags and config.
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a provider based on provider name, config, and optional model override.
    ///
    /// # Arguments
    /// * `provider` - Provider identifier ("huggingface" or "openai")
    /// * `config` - The full LLM config section
    /// * `model_override` - Optional model name that overrides the config default
    pub fn create(
        provider: &str,
        config: &LlmConfig,
        model_override: Option<&str>,
    ) -> Result<Box<dyn TextGenerationProvider>, LlmError> {
        let timeout = config.timeout_secs.map(Duration::from_secs);

        match provider {
            "huggingface" => {
                let cfg = config.huggingface.clone().unwrap_or_default();
                let api_key = resolve_env_var(&cfg.api_key).ok_or_else(|| {
                    LlmError::new("Hugging Face token not set. Set HF_TOKEN env var.")
                })?;
                let model = model_override
                    .map(String::from)
                    .unwrap_or(cfg.model.clone());
                Ok(Box::new(
                    super::huggingface::HuggingFaceProvider::new(&cfg.endpoint, &api_key, &model)
                        .with_timeout(timeout),
                ))
            }
            "openai" => {
                let cfg = config.openai.clone().unwrap_or_default();
                let api_key = resolve_env_var(&cfg.api_key).ok_or_else(|| {
                    LlmError::new("OpenAI API key not set. Set OPENAI_API_KEY env var.")
                })?;
                let model = model_override
                    .map(String::from)
                    .unwrap_or(cfg.model.clone());
                Ok(Box::new(
                    super::openai::OpenAiProvider::new(&cfg.endpoint, &api_key, &model)
                        .with_timeout(timeout),
                ))
            }
            other => Err(LlmError::new(format!("Unknown LLM provider: {other}"))),
        }
    }
}
