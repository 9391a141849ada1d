//! Forensic CLI - inspection report generation with a hosted LLM.
//!
//! Serves a web form that turns inspection metadata into a prose report and
//! exports it as a PDF. The same flow is available from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Start the web form on http://127.0.0.1:7860
//! forensic serve
//!
//! # Generate a report from the command line and export it
//! forensic generate --client Acme --location "123 Main St" \
//!     --date 2025-05-16 --report-type causation --pdf
//!
//! # Export existing report text
//! forensic export report.txt
//!
//! # View configuration
//! forensic config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;
mod server;

/// Forensic - inspection report generation with a hosted LLM.
#[derive(Parser, Debug)]
#[command(name = "forensic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the report form over HTTP
    Serve(cli::serve::ServeArgs),

    /// Generate a single report from command-line fields
    Generate(cli::generate::GenerateArgs),

    /// Export report text to a PDF
    Export(cli::export::ExportArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match forensic_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `forensic config path`."
            );
            forensic_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Forensic v{}", forensic_core::VERSION);

    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Generate(args) => cli::generate::execute(args, config).await,
        Commands::Export(args) => cli::export::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
