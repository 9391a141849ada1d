//! Report generation: validate, build the prompt, make one provider call.
//!
//! A single best-effort call per request. Nothing is retried; failures are
//! returned to the caller, who retries by submitting again.

use crate::config::{Config, ReportConfig};
use crate::error::ReportError;
use crate::llm::{GenerationRequest, LlmProviderFactory, TextGenerationProvider};
use crate::prompt::build_prompt;
use crate::types::ReportRequest;

/// Prefix of the text shown in place of a report when the provider fails.
pub const REPORT_ERROR_PREFIX: &str = "Error generating report:";

/// Turns report requests into report text using one provider.
///
/// Constructed once at startup and shared; holds no per-request state.
pub struct ReportGenerator {
    provider: Box<dyn TextGenerationProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl ReportGenerator {
    pub fn new(provider: Box<dyn TextGenerationProvider>, config: &ReportConfig) -> Self {
        Self {
            provider,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Build a generator from config, optionally overriding provider and model.
    pub fn from_config(
        config: &Config,
        provider: Option<&str>,
        model: Option<&str>,
    ) -> crate::error::Result<Self> {
        let provider_name = provider.unwrap_or(&config.llm.provider);
        let provider = LlmProviderFactory::create(provider_name, &config.llm, model)?;
        tracing::debug!("Using LLM provider: {}", provider.name());
        Ok(Self::new(provider, &config.report))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the underlying provider is configured.
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }

    /// Generate a report, rendering every failure as display text.
    ///
    /// Invalid requests yield the validation message without calling the
    /// provider. Provider failures yield a string starting with
    /// [`REPORT_ERROR_PREFIX`].
    pub async fn generate(&self, request: &ReportRequest) -> String {
        match self.try_generate(request).await {
            Ok(text) => text,
            Err(ReportError::Validation(message)) => message,
            Err(ReportError::Llm(e)) => format!("{REPORT_ERROR_PREFIX} {e}"),
        }
    }

    /// Generate a report with typed errors.
    pub async fn try_generate(&self, request: &ReportRequest) -> Result<String, ReportError> {
        request.validate().map_err(ReportError::Validation)?;

        let generation = GenerationRequest {
            prompt: build_prompt(request),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::info!(
            provider = self.provider.name(),
            report_type = ?request.report_type,
            has_images = request.has_images,
            "Generating report"
        );

        match self.provider.generate(&generation).await {
            Ok(response) => {
                tracing::info!(
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    tokens = ?response.tokens_used,
                    "Report generated"
                );
                Ok(response.text.trim().to_string())
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), "Report generation failed: {e}");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::GenerationResponse;
    use crate::types::{ReportType, VALIDATION_MESSAGE};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every request and answers from a canned result.
    struct MockProvider {
        calls: Mutex<Vec<GenerationRequest>>,
        result: Result<String, LlmError>,
    }

    impl MockProvider {
        fn replying(text: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Err(LlmError::with_status(message, 503)),
            }
        }
    }

    #[async_trait]
    impl TextGenerationProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            self.calls.lock().unwrap().push(request.clone());
            self.result.clone().map(|text| GenerationResponse {
                text,
                model: "mock-model".to_string(),
                tokens_used: None,
                latency_ms: 1,
            })
        }

        fn timeout(&self) -> Option<Duration> {
            None
        }
    }

    /// Wraps a shared mock so tests can inspect calls after handing it over.
    struct Shared(std::sync::Arc<MockProvider>);

    #[async_trait]
    impl TextGenerationProvider for Shared {
        fn name(&self) -> &str {
            self.0.name()
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            self.0.generate(request).await
        }

        fn timeout(&self) -> Option<Duration> {
            None
        }
    }

    fn generator(mock: MockProvider) -> (ReportGenerator, std::sync::Arc<MockProvider>) {
        let mock = std::sync::Arc::new(mock);
        let generator =
            ReportGenerator::new(Box::new(Shared(mock.clone())), &ReportConfig::default());
        (generator, mock)
    }

    fn acme_request() -> ReportRequest {
        ReportRequest {
            client_name: "Acme".into(),
            location: "123 Main St".into(),
            inspection_date: "2025-05-16".into(),
            report_type: Some(ReportType::CausationReport),
            notes: "Visible cracking on north wall".into(),
            has_images: false,
        }
    }

    #[tokio::test]
    async fn test_generate_calls_provider_once_with_prompt() {
        let (generator, mock) = generator(MockProvider::replying("  Summary: cracking.  "));
        let report = generator.generate(&acme_request()).await;
        assert_eq!(report, "Summary: cracking.");

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let prompt = &calls[0].prompt;
        for value in ["Acme", "123 Main St", "2025-05-16", "Visible cracking on north wall"] {
            assert!(prompt.contains(value), "prompt missing {value}");
        }
        assert!(prompt.contains("Damage Assessment, Reference to Building Codes"));
        assert_eq!(calls[0].max_tokens, 1024);
        assert!((calls[0].temperature - 0.4).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_invalid_request_skips_provider() {
        let mut missing = vec![acme_request(); 4];
        missing[0].client_name.clear();
        missing[1].location.clear();
        missing[2].inspection_date.clear();
        missing[3].report_type = None;

        let (generator, mock) = generator(MockProvider::replying("unused"));
        for request in &missing {
            assert_eq!(generator.generate(request).await, VALIDATION_MESSAGE);
        }
        assert!(mock.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_error_text() {
        let (generator, mock) = generator(MockProvider::failing("HTTP 503: overloaded"));
        let report = generator.generate(&acme_request()).await;
        assert!(report.starts_with(REPORT_ERROR_PREFIX));
        assert!(report.contains("overloaded"));
        // no retry
        assert_eq!(mock.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_try_generate_returns_typed_errors() {
        let (generator, _mock) = generator(MockProvider::failing("boom"));

        let err = generator
            .try_generate(&ReportRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::Validation(_)));

        let err = generator.try_generate(&acme_request()).await.unwrap_err();
        match err {
            ReportError::Llm(e) => assert_eq!(e.status_code, Some(503)),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_config_honours_provider_override() {
        let mut config = Config::default();
        config.llm.openai = Some(crate::config::OpenAiConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        });
        let generator = ReportGenerator::from_config(&config, Some("openai"), None).unwrap();
        assert_eq!(generator.provider_name(), "openai");

        let err = ReportGenerator::from_config(&config, Some("gemini"), None)
            .err()
            .unwrap();
        assert!(matches!(err, crate::error::ForensicError::Llm(_)));
    }

    #[test]
    fn test_provider_name_is_exposed() {
        let (generator, _mock) = generator(MockProvider::replying("x"));
        assert_eq!(generator.provider_name(), "mock");
    }
}
