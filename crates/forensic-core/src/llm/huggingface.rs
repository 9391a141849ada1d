//! Hugging Face Inference API provider for hosted text-generation models.
//!
//! Wraps the prompt in the Mistral/Mixtral instruct template and posts it
//! to `{endpoint}/models/{model}`.

use super::provider::{
    with_timeout, GenerationRequest, GenerationResponse, TextGenerationProvider,
};
use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Hugging Face Inference API provider.
pub struct HuggingFaceProvider {
    url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HuggingFaceProvider {
    pub fn new(endpoint: &str, api_key: &str, model: &str) -> Self {
        Self {
            url: format!("{}/models/{}", endpoint.trim_end_matches('/'), model),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Wrap a plain instruction in the Mixtral instruct template.
pub(crate) fn instruct_prompt(prompt: &str) -> String {
    format!("<s>[INST] {prompt} [/INST]")
}

// --- Request types ---

#[derive(Serialize)]
struct TextGenerationRequest {
    inputs: String,
    parameters: TextGenerationParameters,
}

#[derive(Serialize)]
struct TextGenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

// --- Response types ---

/// The serverless API returns a list; dedicated endpoints return one object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Many(Vec<GeneratedText>),
    One(GeneratedText),
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[async_trait]
impl TextGenerationProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let start = Instant::now();

        let body = TextGenerationRequest {
            inputs: instruct_prompt(&request.prompt),
            parameters: TextGenerationParameters {
                max_new_tokens: request.max_tokens,
                temperature: request.temperature,
                return_full_text: false,
            },
        };

        let builder = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let resp = with_timeout(builder, self.timeout())
            .send()
            .await
            .map_err(|e| LlmError::new(format!("Hugging Face request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::with_status(
                format!("Hugging Face HTTP {status}: {text}"),
                status.as_u16(),
            ));
        }

        let parsed: TextGenerationResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::new(format!("Failed to parse Hugging Face response: {e}")))?;

        let generated = match parsed {
            TextGenerationResponse::Many(items) => items.into_iter().next(),
            TextGenerationResponse::One(item) => Some(item),
        };

        let text = generated
            .map(|g| g.generated_text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                LlmError::new("Hugging Face returned empty response, no text generated")
            })?;

        Ok(GenerationResponse {
            text,
            model: self.model.clone(),
            tokens_used: None, // the serverless API does not report usage
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
