//! The `forensic generate` command for one-off reports.

use super::{build_generator, ProviderArgs};
use clap::Args;
use forensic_core::{
    Config, PdfExporter, ReportError, ReportRequest, ReportType, REPORT_ERROR_PREFIX,
};
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Client name
    #[arg(long)]
    pub client: Option<String>,

    /// Property location
    #[arg(long)]
    pub location: Option<String>,

    /// Inspection date (free-form, e.g. 2025-05-16)
    #[arg(long)]
    pub date: Option<String>,

    /// Report type: "statement-of-work" or "causation-report"
    #[arg(long)]
    pub report_type: Option<ReportType>,

    /// Additional on-site observations
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Damage image (repeatable). Only its presence is noted in the prompt.
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,

    /// Write the report text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the report as a PDF
    #[arg(long)]
    pub pdf: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Whether any of the given image paths points at an existing file.
fn any_image_present(images: &[PathBuf]) -> bool {
    let mut present = false;
    for path in images {
        if path.is_file() {
            present = true;
        } else {
            tracing::warn!("Image not found, ignoring: {}", path.display());
        }
    }
    present
}

impl GenerateArgs {
    fn to_request(&self) -> ReportRequest {
        ReportRequest {
            client_name: self.client.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            inspection_date: self.date.clone().unwrap_or_default(),
            report_type: self.report_type,
            notes: self.notes.clone(),
            has_images: any_image_present(&self.images),
        }
    }
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: Config) -> anyhow::Result<()> {
    let request = args.to_request();
    if let Err(message) = request.validate() {
        anyhow::bail!(message);
    }

    let generator = build_generator(&config, &args.provider)?;
    let text = match generator.try_generate(&request).await {
        Ok(text) => text,
        Err(ReportError::Validation(message)) => anyhow::bail!(message),
        Err(ReportError::Llm(e)) => anyhow::bail!("{REPORT_ERROR_PREFIX} {e}"),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{text}"),
    }

    if args.pdf {
        let exporter = PdfExporter::new(config.output_dir(), &config.export);
        let exported = exporter.export(&text)?;
        eprintln!(
            "PDF exported to: {} ({} page(s))",
            exported.path.display(),
            exported.pages
        );
    }

    Ok(())
}
