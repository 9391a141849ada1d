//! Prompt construction for report generation.
//!
//! Field values are embedded verbatim. The builder never fails: validation
//! happens before a prompt is built, so any input yields a usable string.

use crate::types::{ReportRequest, ReportType};

const CAUSATION_OUTLINE: &str = "Summary, Observations, Damage Assessment, \
     Reference to Building Codes and Recommendations";

const STATEMENT_OF_WORK_OUTLINE: &str = "Summary, Scope of Work, Repair Procedures, \
     Materials and Quantities, Reference to Building Codes and Recommendations";

/// Section headings requested for a report type.
pub fn section_outline(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::StatementOfWork => STATEMENT_OF_WORK_OUTLINE,
        ReportType::CausationReport => CAUSATION_OUTLINE,
    }
}

/// Build the instruction sent to the model for a report request.
pub fn build_prompt(request: &ReportRequest) -> String {
    let image_note = if request.has_images {
        "Images of damage were uploaded."
    } else {
        "No images provided."
    };

    let (kind, outline) = match request.report_type {
        Some(report_type) => (report_type.display_name(), section_outline(report_type)),
        None => ("report", CAUSATION_OUTLINE),
    };

    format!(
        "You are a structural forensic engineer.\n\n\
         Generate a detailed {kind} based on the following:\n\
         - Client Name: {client}\n\
         - Location: {location}\n\
         - Inspection Date: {date}\n\
         - Observations: {notes}\n\
         - {image_note}\n\n\
         Write in a professional tone suitable for insurance claims and contractors.\n\
         Organize into sections: {outline}.",
        client = request.client_name,
        location = request.location,
        date = request.inspection_date,
        notes = request.notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_request() -> ReportRequest {
        ReportRequest {
            client_name: "Acme".into(),
            location: "123 Main St".into(),
            inspection_date: "2025-05-16".into(),
            report_type: Some(ReportType::CausationReport),
            notes: "Visible cracking on north wall".into(),
            has_images: false,
        }
    }

    #[test]
    fn test_prompt_contains_all_field_values() {
        let prompt = build_prompt(&acme_request());
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("123 Main St"));
        assert!(prompt.contains("2025-05-16"));
        assert!(prompt.contains("Visible cracking on north wall"));
        assert!(prompt.contains("Generate a detailed Causation Report"));
        assert!(prompt.contains(CAUSATION_OUTLINE));
    }

    #[test]
    fn test_statement_of_work_uses_its_own_outline() {
        let mut request = acme_request();
        request.report_type = Some(ReportType::StatementOfWork);
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Generate a detailed Statement of Work"));
        assert!(prompt.contains(STATEMENT_OF_WORK_OUTLINE));
        assert!(!prompt.contains("Damage Assessment"));
    }

    #[test]
    fn test_image_note_follows_flag() {
        let mut request = acme_request();
        assert!(build_prompt(&request).contains("No images provided."));
        request.has_images = true;
        assert!(build_prompt(&request).contains("Images of damage were uploaded."));
    }

    #[test]
    fn test_values_are_embedded_verbatim() {
        let request = ReportRequest {
            client_name: "Café Ünïcode — \"Ltd\"".into(),
            location: "{location}\n<b>".into(),
            inspection_date: "sometime in May".into(),
            report_type: Some(ReportType::StatementOfWork),
            notes: "東京 ${HOME} %s".into(),
            has_images: true,
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains(&request.client_name));
        assert!(prompt.contains(&request.location));
        assert!(prompt.contains(&request.inspection_date));
        assert!(prompt.contains(&request.notes));
    }

    #[test]
    fn test_empty_request_still_builds() {
        let prompt = build_prompt(&ReportRequest::default());
        assert!(prompt.contains("- Client Name: \n"));
        assert!(prompt.contains("Generate a detailed report"));
    }
}
