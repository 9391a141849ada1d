//! Web server for the report form.
//!
//! Each request is handled independently: the only shared state is the
//! report generator and the PDF exporter, both built once at startup.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use forensic_core::{PdfExporter, ReportGenerator};
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ReportGenerator>,
    pub exporter: Arc<PdfExporter>,
}

impl AppState {
    pub fn new(generator: ReportGenerator, exporter: PdfExporter) -> Self {
        Self {
            generator: Arc::new(generator),
            exporter: Arc::new(exporter),
        }
    }
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let provider = state.generator.provider_name().to_string();
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{} (provider: {})", addr, provider);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
