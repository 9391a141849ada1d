//! Command implementations.

pub mod config;
pub mod export;
pub mod generate;
pub mod serve;

use clap::Args;
use forensic_core::{Config, ReportGenerator};

/// Provider selection flags shared by commands that call the LLM.
#[derive(Args, Debug, Clone, Default)]
pub struct ProviderArgs {
    /// LLM provider to use (huggingface, openai); defaults to config
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name override
    #[arg(long)]
    pub model: Option<String>,
}

/// Build the report generator once, from config plus command-line overrides.
pub fn build_generator(config: &Config, args: &ProviderArgs) -> anyhow::Result<ReportGenerator> {
    Ok(ReportGenerator::from_config(
        config,
        args.provider.as_deref(),
        args.model.as_deref(),
    )?)
}
