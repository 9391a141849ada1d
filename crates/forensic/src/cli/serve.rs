//! The `forensic serve` command.

use super::{build_generator, ProviderArgs};
use crate::server;
use clap::Args;
use forensic_core::{Config, PdfExporter};

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (defaults to config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to config)
    #[arg(short, long)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let generator = build_generator(&config, &args.provider)?;
    if !generator.is_available().await {
        tracing::warn!(
            "LLM provider '{}' is not configured; reports will fail",
            generator.provider_name()
        );
    }
    let exporter = PdfExporter::new(config.output_dir(), &config.export);
    tracing::debug!(
        columns = exporter.columns(),
        rows_per_page = exporter.rows_per_page(),
        "PDF downloads are rendered in memory"
    );

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let state = server::AppState::new(generator, exporter);
    server::serve(state, &host, port).await
}
