//! The `forensic export` command for turning report text into a PDF.

use clap::Args;
use forensic_core::{Config, PdfExporter};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Text file to export, or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Directory for the PDF (defaults to config, then the system temp dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Execute the export command.
pub async fn execute(args: ExportArgs, config: Config) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir());
    let exporter = PdfExporter::new(output_dir, &config.export);

    let exported = exporter.export(&text)?;
    println!("{}", exported.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_file_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.txt");
        std::fs::write(&input, "Summary\nAll walls plumb.\n").unwrap();
        let out = dir.path().join("pdfs");

        let args = ExportArgs {
            input,
            output_dir: Some(out.clone()),
        };
        execute(args, Config::default()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_input_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            input: dir.path().join("nope.txt"),
            output_dir: Some(dir.path().to_path_buf()),
        };
        assert!(execute(args, Config::default()).await.is_err());
    }
}
