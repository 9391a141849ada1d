//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// HTTP server settings for the form UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7860,
        }
    }
}

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Sampling temperature
    pub temperature: f32,

    /// Output token cap
    pub max_tokens: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_tokens: 1024,
        }
    }
}

/// PDF export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported PDFs. Empty means the system temp directory.
    pub output_dir: String,

    /// Font size in points (Courier)
    pub font_size: f32,

    /// Height of one text row in millimetres
    pub line_height_mm: f32,

    /// Page margin on every side in millimetres
    pub margin_mm: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: String::new(),
            font_size: 12.0,
            line_height_mm: 10.0,
            margin_mm: 10.0,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// LLM provider configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Active provider: "huggingface" or "openai"
    pub provider: String,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    pub timeout_secs: Option<u64>,

    /// Hugging Face Inference API configuration
    pub huggingface: Option<HuggingFaceConfig>,

    /// OpenAI (or compatible) configuration
    pub openai: Option<OpenAiConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "huggingface".to_string(),
            timeout_secs: None,
            huggingface: None,
            openai: None,
        }
    }
}

/// Hugging Face Inference API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    /// API base URL; the model id is appended as `/models/{model}`
    pub endpoint: String,

    /// API token (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model id
    pub model: String,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co".to_string(),
            api_key: "${HF_TOKEN}".to_string(),
            model: "mistralai/Mixtral-8x7B-Instruct-v0.1".to_string(),
        }
    }
}

/// OpenAI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API base URL; `/chat/completions` is appended
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}
