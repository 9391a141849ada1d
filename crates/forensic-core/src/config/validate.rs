//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::llm::KNOWN_PROVIDERS;

use super::Config;

/// A4 width in millimetres; margins must leave room for text on it.
const PAGE_WIDTH_MM: f32 = 210.0;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.report.temperature) {
            return Err(ConfigError::ValidationError(
                "report.temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.report.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "report.max_tokens must be > 0".into(),
            ));
        }
        if self.export.font_size <= 0.0 {
            return Err(ConfigError::ValidationError(
                "export.font_size must be > 0".into(),
            ));
        }
        if self.export.line_height_mm <= 0.0 {
            return Err(ConfigError::ValidationError(
                "export.line_height_mm must be > 0".into(),
            ));
        }
        if self.export.margin_mm < 0.0 || self.export.margin_mm * 2.0 >= PAGE_WIDTH_MM {
            return Err(ConfigError::ValidationError(
                "export.margin_mm must leave a printable area".into(),
            ));
        }
        if self.llm.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "llm.timeout_secs must be > 0 when set".into(),
            ));
        }
        if !KNOWN_PROVIDERS.contains(&self.llm.provider.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "llm.provider must be one of: {}",
                KNOWN_PROVIDERS.join(", ")
            )));
        }
        Ok(())
    }
}
