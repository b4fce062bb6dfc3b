use super::*;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::InputSource;
use crate::shared::error::ReportError;
use std::cell::RefCell;
use std::path::PathBuf;

// Mock implementations for testing
struct MockReportReader {
    content: Vec<u8>,
}

impl MockReportReader {
    fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, _source: &InputSource) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}

struct FailingReportReader;

impl ReportReader for FailingReportReader {
    fn read_report(&self, source: &InputSource) -> Result<Vec<u8>> {
        Err(ReportError::FileReadError {
            path: PathBuf::from(source.to_string()),
            details: "permission denied".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("ERROR: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(format!("DONE: {}", message));
    }
}

const NONCOMPLIANT_REPORT: &[u8] = br#"{
    "tool": "grant",
    "version": "0.6.2",
    "run": { "targets": [ {
        "source": { "type": "file", "ref": "sbom.json" },
        "evaluation": {
            "status": "noncompliant",
            "summary": {
                "packages": { "total": 3, "allowed": 1, "denied": 1, "ignored": 0, "unlicensed": 1 },
                "licenses": { "unique": 2, "allowed": 1, "denied": 1, "nonSPDX": 0 }
            },
            "findings": { "packages": [
                { "name": "copyleft", "type": "npm", "version": "1.0.0", "decision": "deny",
                  "licenses": [ { "id": "GPL-3.0-only", "riskCategory": "Strong Copyleft" } ] },
                { "name": "permissive", "type": "npm", "version": "2.0.0", "decision": "allow",
                  "licenses": [ { "id": "MIT", "riskCategory": "Permissive" } ] },
                { "name": "mystery", "type": "go-module", "version": "0.1.0", "decision": "allow",
                  "licenses": [] }
            ] }
        }
    } ] }
}"#;

fn request(format: OutputFormat) -> ConvertRequest {
    ConvertRequest::new(InputSource::File(PathBuf::from("grant.json")), format)
}

#[test]
fn test_execute_markdown() {
    let use_case = ConvertReportUseCase::new(
        MockReportReader::new(NONCOMPLIANT_REPORT),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(OutputFormat::Markdown)).unwrap();

    assert!(response.content.starts_with("# Grant License Report\n"));
    assert!(response.content.contains("- **Status:** noncompliant"));
    assert_eq!(response.compliance.status, "noncompliant");
    assert_eq!(response.compliance.denied_count, 1);
    assert_eq!(response.compliance.unlicensed_count, 1);
    assert!(response.compliance.has_denied());
    assert!(response.compliance.has_unlicensed());
}

#[test]
fn test_execute_json() {
    let use_case = ConvertReportUseCase::new(
        MockReportReader::new(NONCOMPLIANT_REPORT),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&response.content).unwrap();

    assert_eq!(value["metadata"]["status"], "noncompliant");
    assert_eq!(value["licenses"]["count"], 2);
    assert_eq!(value["unlicensed_packages"]["items"][0]["name"], "mystery");
}

#[test]
fn test_execute_reports_progress() {
    let reporter = MockProgressReporter::default();
    let use_case = ConvertReportUseCase::new(MockReportReader::new(NONCOMPLIANT_REPORT), reporter);

    use_case.execute(request(OutputFormat::Markdown)).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages[0].contains("grant.json"));
    assert!(messages
        .iter()
        .any(|m| m.contains("1 denied, 1 unlicensed")));
    assert!(messages
        .iter()
        .any(|m| m == "📝 Rendering Markdown license report..."));
}

#[test]
fn test_execute_parse_error_names_input() {
    let use_case = ConvertReportUseCase::new(
        MockReportReader::new(b"[1, 2, 3]"),
        MockProgressReporter::default(),
    );

    let error = use_case
        .execute(request(OutputFormat::Markdown))
        .unwrap_err();

    assert!(error.to_string().contains("grant.json"));
    assert!(error
        .chain()
        .any(|e| e.to_string().starts_with("parse grant report json")));
}

#[test]
fn test_execute_empty_targets() {
    let use_case = ConvertReportUseCase::new(
        MockReportReader::new(br#"{"tool":"grant","version":"0.6.2","run":{"targets":[]}}"#),
        MockProgressReporter::default(),
    );

    let error = use_case
        .execute(request(OutputFormat::Markdown))
        .unwrap_err();

    assert!(error
        .chain()
        .any(|e| e.to_string() == "grant report has no targets"));
}

#[test]
fn test_execute_propagates_reader_error() {
    let use_case = ConvertReportUseCase::new(FailingReportReader, MockProgressReporter::default());

    let error = use_case
        .execute(ConvertRequest::new(InputSource::Stdin, OutputFormat::Markdown))
        .unwrap_err();

    assert!(error.to_string().contains("permission denied"));
}

#[test]
fn test_execute_compliant_report() {
    let use_case = ConvertReportUseCase::new(
        MockReportReader::new(
            br#"{"tool":"grant","version":"0.6.2","run":{"targets":[{"evaluation":{"status":"compliant"}}]}}"#,
        ),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(OutputFormat::Markdown)).unwrap();

    assert_eq!(response.compliance.status, "compliant");
    assert!(!response.compliance.has_denied());
    assert!(!response.compliance.has_unlicensed());
}
