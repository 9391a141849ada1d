//! HTTP request handlers for the web server.

use axum::{
    extract::{rejection::JsonRejection, Form, Json, Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use forensic_core::{download_file_name, ReportError, ReportRequest};
use serde::Deserialize;
use serde_json::json;

use super::templates;
use super::AppState;

/// Form page.
pub async fn index() -> Html<String> {
    Html(templates::form_page(&ReportRequest::default(), None))
}

pub async fn health() -> &'static str {
    "ok"
}

/// Collect the multipart form into a report request.
///
/// File parts only count as images when the browser sent a file name;
/// their bytes are skipped, never read.
async fn read_report_form(multipart: &mut Multipart) -> Result<ReportRequest, String> {
    let mut request = ReportRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "images" {
            if field.file_name().is_some_and(|f| !f.is_empty()) {
                request.has_images = true;
            }
            continue;
        }

        let value = field.text().await.map_err(|e| e.to_string())?;
        match name.as_str() {
            "client_name" => request.client_name = value,
            "location" => request.location = value,
            "inspection_date" => request.inspection_date = value,
            // Unknown or unselected types fall through to validation.
            "report_type" => request.report_type = value.parse().ok(),
            "notes" => request.notes = value,
            other => tracing::debug!("Ignoring unknown form field: {other}"),
        }
    }

    Ok(request)
}

/// Generate a report from the form and re-render the page with it.
pub async fn generate_form(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let request = match read_report_form(&mut multipart).await {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Malformed form submission: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Html(templates::error_page(&format!("Could not read form: {e}"))),
            )
                .into_response();
        }
    };

    let report = state.generator.generate(&request).await;
    Html(templates::form_page(&request, Some(&report))).into_response()
}

#[derive(Deserialize)]
pub struct ExportForm {
    #[serde(default)]
    report: String,
}

/// Export the displayed report text as a PDF download.
pub async fn export_form(State(state): State<AppState>, Form(form): Form<ExportForm>) -> Response {
    pdf_download(state, form.report).await
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as other failures.
fn json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected JSON body: {rejection}");
    (
        rejection.status(),
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

/// JSON: generate a report.
pub async fn api_report(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    match state.generator.try_generate(&request).await {
        Ok(report) => Json(json!({ "report": report })).into_response(),
        Err(ReportError::Validation(message)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": message })),
        )
            .into_response(),
        Err(ReportError::Llm(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": e.message, "status_code": e.status_code })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct ExportRequest {
    text: String,
}

/// JSON: export text as a PDF download.
pub async fn api_export(
    State(state): State<AppState>,
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(request)) => pdf_download(state, request.text).await,
        Err(rejection) => json_rejection(rejection),
    }
}

/// Render `text` in memory and send it back as an attachment.
///
/// Downloads never touch the output directory; only the CLI writes files.
async fn pdf_download(state: AppState, text: String) -> Response {
    let exporter = state.exporter.clone();
    let rendered = match tokio::task::spawn_blocking(move || exporter.render(&text)).await {
        Ok(Ok(rendered)) => rendered,
        Ok(Err(e)) => {
            tracing::error!("PDF export failed: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
        Err(e) => {
            tracing::error!("PDF export task panicked: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PDF export failed".to_string(),
            )
                .into_response();
        }
    };

    let filename = download_file_name();
    tracing::info!(
        file = %filename,
        pages = rendered.pages,
        lines = rendered.lines,
        "Serving report PDF"
    );

    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        rendered.bytes,
    )
        .into_response()
}
