//! LLM integration for report text generation.
//!
//! Provides a provider abstraction over the supported hosted backends
//! (Hugging Face Inference API, OpenAI-compatible Chat Completions).

pub(crate) mod huggingface;
pub(crate) mod openai;
pub(crate) mod provider;

pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;
pub use provider::{
    resolve_env_var, GenerationRequest, GenerationResponse, LlmProviderFactory,
    TextGenerationProvider, KNOWN_PROVIDERS,
};
