//! Library entry point for turning Grant JSON into a rendered report
//!
//! `convert` is the whole pipeline in one call: decode, select the first
//! target, aggregate findings and render Markdown. `ReportConverter` exposes
//! the same pipeline with a pluggable formatter.

use crate::adapters::outbound::formatters::MarkdownFormatter;
use crate::application::dto::OutputFormat;
use crate::application::factories::FormatterFactory;
use crate::application::read_models::{LicenseReportView, LicenseReportViewBuilder};
use crate::license_report::domain::GrantReport;
use crate::ports::inbound::ReportConversionPort;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ConvertError;

/// Converts Grant JSON bytes into a Markdown license report.
///
/// # Errors
/// - `ConvertError::Parse` when the input is not a JSON object of the expected shape
/// - `ConvertError::EmptyTargets` when the report has no targets
///
/// # Examples
/// ```
/// let raw = br#"{"tool":"grant","version":"0.6.2","run":{"targets":[{}]}}"#;
/// let markdown = grant_report::convert(raw).unwrap();
/// assert!(markdown.starts_with("# Grant License Report"));
/// ```
pub fn convert(raw: &[u8]) -> Result<String, ConvertError> {
    ReportConverter::default().convert(raw)
}

/// Converts Grant reports with a pluggable output formatter.
pub struct ReportConverter {
    formatter: Box<dyn ReportFormatter>,
}

impl ReportConverter {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_formatter(FormatterFactory::create(format))
    }

    pub fn with_formatter(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    /// Decodes `raw` and builds the aggregated view of its first target.
    pub fn analyze(&self, raw: &[u8]) -> Result<LicenseReportView, ConvertError> {
        let report = GrantReport::from_slice(raw)?;
        LicenseReportViewBuilder::build(&report)
    }

    pub fn render(&self, view: &LicenseReportView) -> Result<String, ConvertError> {
        self.formatter.format(view)
    }
}

impl Default for ReportConverter {
    fn default() -> Self {
        Self::with_formatter(Box::new(MarkdownFormatter::new()))
    }
}

impl ReportConversionPort for ReportConverter {
    fn convert(&self, raw: &[u8]) -> Result<String, ConvertError> {
        let view = self.analyze(raw)?;
        self.render(&view)
    }
}
