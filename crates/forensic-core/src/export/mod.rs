//! PDF export of report text.
//!
//! Text is normalized to ASCII, laid out in fixed-width rows, and drawn in
//! built-in Courier on A4 pages, one row per fixed-height cell. A new page
//! starts whenever the next row would cross the bottom margin.

mod layout;
mod normalize;

pub use layout::layout_lines;
pub use normalize::normalize_to_ascii;

use crate::config::ExportConfig;
use crate::error::ExportError;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;

/// Courier advance width as a fraction of the font size.
const COURIER_ADVANCE: f64 = 0.6;

const PT_TO_MM: f64 = 25.4 / 72.0;

const FILE_PREFIX: &str = "forensic_report_";

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// File name offered for a PDF that is streamed rather than written to disk.
pub fn download_file_name() -> String {
    format!("{FILE_PREFIX}{}.pdf", timestamp())
}

/// A PDF rendered in memory.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    /// Rows drawn, after wrapping
    pub lines: usize,
    pub pages: usize,
}

/// A PDF written to disk.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub path: PathBuf,
    /// Rows drawn, after wrapping
    pub lines: usize,
    pub pages: usize,
}

/// Renders report text into paginated PDF files.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
    font_size: f64,
    line_height_mm: f64,
    margin_mm: f64,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>, config: &ExportConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            font_size: f64::from(config.font_size),
            line_height_mm: f64::from(config.line_height_mm),
            margin_mm: f64::from(config.margin_mm),
        }
    }

    /// Characters that fit on one row.
    pub fn columns(&self) -> usize {
        let char_width_mm = self.font_size * COURIER_ADVANCE * PT_TO_MM;
        let usable = PAGE_WIDTH_MM - 2.0 * self.margin_mm;
        ((usable / char_width_mm).floor() as usize).max(1)
    }

    /// Rows that fit on one page.
    pub fn rows_per_page(&self) -> usize {
        let usable = PAGE_HEIGHT_MM - 2.0 * self.margin_mm;
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }

    /// Render text to PDF bytes without touching the filesystem.
    pub fn render(&self, text: &str) -> Result<RenderedPdf, ExportError> {
        let normalized = normalize_to_ascii(text);
        let rows = layout_lines(&normalized, self.columns());
        let rows_per_page = self.rows_per_page();

        let (doc, first_page, first_layer) = PdfDocument::new(
            "Forensic Report",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Report",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| ExportError::Render(e.to_string()))?;

        // Baseline sits roughly centred in its cell.
        let font_height_mm = self.font_size * PT_TO_MM;
        let baseline_offset = (self.line_height_mm + 0.7 * font_height_mm) / 2.0;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut pages = 1;

        for (i, row) in rows.iter().enumerate() {
            let slot = i % rows_per_page;
            if i > 0 && slot == 0 {
                let (page, page_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Report");
                layer = doc.get_page(page).get_layer(page_layer);
                pages += 1;
            }
            if row.is_empty() {
                continue;
            }

            let from_top = self.margin_mm + slot as f64 * self.line_height_mm + baseline_offset;
            layer.use_text(
                row.as_str(),
                self.font_size,
                Mm(self.margin_mm),
                Mm(PAGE_HEIGHT_MM - from_top),
                &font,
            );
        }

        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;

        Ok(RenderedPdf {
            bytes,
            lines: rows.len(),
            pages,
        })
    }

    /// Render text and write it to a uniquely named file in the output directory.
    ///
    /// File names look like `forensic_report_20250516_142301_a1B2c3.pdf`.
    pub fn export(&self, text: &str) -> Result<ExportedReport, ExportError> {
        let rendered = self.render(text)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let prefix = format!("{FILE_PREFIX}{}_", timestamp());
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".pdf")
            .rand_bytes(6)
            .tempfile_in(&self.output_dir)?;
        let (mut file, path) = file.keep().map_err(std::io::Error::from)?;
        file.write_all(&rendered.bytes)?;
        file.sync_all()?;

        tracing::info!(
            path = %path.display(),
            pages = rendered.pages,
            lines = rendered.lines,
            "Exported report PDF"
        );

        Ok(ExportedReport {
            path,
            lines: rendered.lines,
            pages: rendered.pages,
        })
    }
}
