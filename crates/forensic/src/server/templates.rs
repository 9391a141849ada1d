//! HTML templates for the report form.

use forensic_core::{ReportRequest, ReportType};

/// Escape text for safe inclusion in HTML bodies and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
    h1 { font-size: 1.6rem; }
    .row { display: flex; gap: 1rem; flex-wrap: wrap; }
    .row label { flex: 1; min-width: 200px; }
    label { display: block; margin-bottom: 1rem; font-weight: 600; }
    input, select, textarea { display: block; width: 100%; margin-top: .3rem; padding: .4rem; font: inherit; box-sizing: border-box; }
    textarea.report { font-family: ui-monospace, monospace; }
    button { padding: .5rem 1.2rem; font: inherit; cursor: pointer; }
    .error { color: #a40000; }
"#;

fn report_type_options(selected: Option<ReportType>) -> String {
    let mut options = String::from(r#"<option value="">Select a report type</option>"#);
    for report_type in ReportType::ALL {
        let name = report_type.display_name();
        let selected_attr = if Some(report_type) == selected {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{name}"{selected_attr}>{name}</option>"#
        ));
    }
    options
}

/// Render the form page, prefilled with `request` and showing `report` if present.
pub fn form_page(request: &ReportRequest, report: Option<&str>) -> String {
    let report_section = match report {
        Some(text) => format!(
            r#"
    <h2>Generated Report</h2>
    <form method="post" action="/export">
        <textarea class="report" name="report" rows="20">{report}</textarea>
        <button type="submit">Export as PDF</button>
    </form>"#,
            report = html_escape(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Forensic Report Generator</title>
    <style>{style}</style>
</head>
<body>
    <h1>Forensic Report Generator</h1>
    <form method="post" action="/generate" enctype="multipart/form-data">
        <div class="row">
            <label>Upload Damage Images
                <input type="file" name="images" accept="image/*" multiple>
            </label>
            <label>Report Type
                <select name="report_type">{options}</select>
            </label>
        </div>
        <div class="row">
            <label>Client Name
                <input type="text" name="client_name" value="{client}">
            </label>
            <label>Location
                <input type="text" name="location" value="{location}">
            </label>
            <label>Inspection Date (e.g., 2025-05-16)
                <input type="text" name="inspection_date" value="{date}">
            </label>
        </div>
        <label>Additional Observations
            <textarea name="notes" rows="4" placeholder="Describe what was observed on-site...">{notes}</textarea>
        </label>
        <button type="submit">Generate Report</button>
    </form>
    {report_section}
</body>
</html>"#,
        style = STYLE,
        options = report_type_options(request.report_type),
        client = html_escape(&request.client_name),
        location = html_escape(&request.location),
        date = html_escape(&request.inspection_date),
        notes = html_escape(&request.notes),
    )
}

/// Minimal page for errors that prevent rendering the form.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Error - Forensic Report Generator</title><style>{STYLE}</style></head>
<body>
    <h1>Something went wrong</h1>
    <p class="error">{message}</p>
    <p><a href="/">Back to the form</a></p>
</body>
</html>"#,
        message = html_escape(message)
    )
}
