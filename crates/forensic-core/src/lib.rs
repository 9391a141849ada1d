//! Forensic Core - inspection report generation library.
//!
//! Turns inspection metadata into a prose report using a hosted LLM and
//! exports the result as a PDF. Every step is stateless:
//!
//! ```text
//! ReportRequest → build_prompt → TextGenerationProvider → report text → PdfExporter → file
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use forensic_core::{Config, LlmProviderFactory, PdfExporter, ReportGenerator, ReportRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let provider = LlmProviderFactory::create(&config.llm.provider, &config.llm, None)?;
//!     let generator = ReportGenerator::new(provider, &config.report);
//!
//!     let text = generator.generate(&request).await;
//!     let pdf = PdfExporter::new(config.output_dir(), &config.export).export(&text)?;
//!     println!("{}", pdf.path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod prompt;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ExportError, ForensicError, LlmError, ReportError, Result};
pub use export::{download_file_name, ExportedReport, PdfExporter, RenderedPdf};
pub use llm::{LlmProviderFactory, TextGenerationProvider};
pub use prompt::build_prompt;
pub use report::{ReportGenerator, REPORT_ERROR_PREFIX};
pub use types::{ReportRequest, ReportType, VALIDATION_MESSAGE};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
