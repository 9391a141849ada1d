//! Core data types for report requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message returned when a required form field is missing.
pub const VALIDATION_MESSAGE: &str = "Please fill out all fields.";

/// The kind of report to request, which selects the section outline.
///
/// Serializes as the display name; deserializes through [`FromStr`], so JSON
/// accepts the same spellings as the form and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ReportType {
    #[serde(rename = "Statement of Work")]
    StatementOfWork,
    #[serde(rename = "Causation Report")]
    CausationReport,
}

impl ReportType {
    /// All report types, in the order the form lists them.
    pub const ALL: [ReportType; 2] = [ReportType::StatementOfWork, ReportType::CausationReport];

    /// Human-readable name, as shown in the form and embedded in prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::StatementOfWork => "Statement of Work",
            ReportType::CausationReport => "Causation Report",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "statement of work" | "sow" => Ok(ReportType::StatementOfWork),
            "causation report" | "causation" => Ok(ReportType::CausationReport),
            _ => Err(format!(
                "Unknown report type '{s}' (expected \"Statement of Work\" or \"Causation Report\")"
            )),
        }
    }
}

impl TryFrom<String> for ReportType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Inspection metadata collected from the form.
///
/// Nothing here is persisted. `inspection_date` is free-form text and is
/// passed to the model as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub client_name: String,
    pub location: String,
    pub inspection_date: String,
    pub report_type: Option<ReportType>,
    pub notes: String,
    /// Whether any damage images were uploaded. Image content is never read.
    pub has_images: bool,
}

impl ReportRequest {
    /// Check that every required field is filled in.
    ///
    /// Notes and images are optional. Whitespace-only values count as missing.
    pub fn validate(&self) -> Result<(), String> {
        let filled = [&self.client_name, &self.location, &self.inspection_date]
            .iter()
            .all(|field| !field.trim().is_empty());

        if filled && self.report_type.is_some() {
            Ok(())
        } else {
            Err(VALIDATION_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> ReportRequest {
        ReportRequest {
            client_name: "Acme".into(),
            location: "123 Main St".into(),
            inspection_date: "2025-05-16".into(),
            report_type: Some(ReportType::CausationReport),
            notes: String::new(),
            has_images: false,
        }
    }

    #[test]
    fn test_report_type_parses_display_names() {
        assert_eq!(
            "Statement of Work".parse::<ReportType>().unwrap(),
            ReportType::StatementOfWork
        );
        assert_eq!(
            "causation report".parse::<ReportType>().unwrap(),
            ReportType::CausationReport
        );
    }

    #[test]
    fn test_report_type_parses_cli_forms() {
        assert_eq!(
            "statement-of-work".parse::<ReportType>().unwrap(),
            ReportType::StatementOfWork
        );
        assert_eq!(
            "causation_report".parse::<ReportType>().unwrap(),
            ReportType::CausationReport
        );
        assert_eq!("sow".parse::<ReportType>().unwrap(), ReportType::StatementOfWork);
    }

    #[test]
    fn test_report_type_rejects_unknown() {
        let err = "inspection".parse::<ReportType>().unwrap_err();
        assert!(err.contains("inspection"));
    }

    #[test]
    fn test_report_type_serde_uses_display_name() {
        let json = serde_json::to_string(&ReportType::StatementOfWork).unwrap();
        assert_eq!(json, "\"Statement of Work\"");
        let parsed: ReportType = serde_json::from_str("\"causation\"").unwrap();
        assert_eq!(parsed, ReportType::CausationReport);
    }

    #[test]
    fn test_report_type_serde_accepts_every_parsed_spelling() {
        for spelling in [
            "causation_report",
            "CAUSATION REPORT",
            "causation-report",
            "statement_of_work",
            "Statement Of Work",
        ] {
            let json = format!("\"{spelling}\"");
            let parsed: ReportType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, spelling.parse::<ReportType>().unwrap());
        }
    }

    #[test]
    fn test_report_type_serde_rejects_unknown() {
        let err = serde_json::from_str::<ReportType>("\"inspection\"").unwrap_err();
        assert!(err.to_string().contains("Unknown report type"));
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_notes_and_images_are_optional() {
        let request = complete_request();
        assert!(request.notes.is_empty());
        assert!(!request.has_images);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        let mut no_client = complete_request();
        no_client.client_name.clear();
        let mut no_location = complete_request();
        no_location.location = "   ".into();
        let mut no_date = complete_request();
        no_date.inspection_date.clear();
        let mut no_type = complete_request();
        no_type.report_type = None;

        for request in [no_client, no_location, no_date, no_type] {
            assert_eq!(request.validate().unwrap_err(), VALIDATION_MESSAGE);
        }
    }

    #[test]
    fn test_request_deserializes_with_missing_optional_fields() {
        let request: ReportRequest = serde_json::from_str(
            r#"{"client_name":"Acme","location":"Here","inspection_date":"today","report_type":"Causation Report"}"#,
        )
        .unwrap();
        assert_eq!(request.report_type, Some(ReportType::CausationReport));
        assert!(request.notes.is_empty());
        assert!(!request.has_images);
    }
}
