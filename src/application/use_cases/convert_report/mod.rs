use crate::application::dto::{ComplianceSummary, ConvertRequest, ConvertResponse};
use crate::application::factories::FormatterFactory;
use crate::converter::ReportConverter;
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;
use anyhow::Context;

/// ConvertReportUseCase - Core use case for rendering a Grant report
///
/// Reads the raw report through the injected reader, aggregates the first
/// target and renders it in the requested format. Writing the result is
/// left to the caller's presenter.
///
/// # Type Parameters
/// * `R` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertReportUseCase<R, PR> {
    report_reader: R,
    progress_reporter: PR,
}

impl<R, PR> ConvertReportUseCase<R, PR>
where
    R: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new ConvertReportUseCase with injected dependencies
    pub fn new(report_reader: R, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// # Returns
    /// ConvertResponse with the rendered document and the compliance facts
    /// needed for policy exit codes
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        // Step 1: Read the raw report
        self.progress_reporter
            .report(&format!("📖 Reading Grant report from: {}", request.input));
        let raw = self.report_reader.read_report(&request.input)?;

        // Step 2: Decode and aggregate
        let converter = ReportConverter::new(request.format);
        let view = converter
            .analyze(&raw)
            .with_context(|| format!("Failed to convert Grant report: {}", request.input))?;

        self.progress_reporter.report(&format!(
            "✅ Target {} ({}): {} license(s), {} denied, {} unlicensed",
            view.metadata.target_ref,
            view.metadata.status,
            view.license_summary_count(),
            view.denied_count(),
            view.unlicensed_count()
        ));

        // Step 3: Render
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));
        let content = converter.render(&view)?;

        Ok(ConvertResponse::new(
            content,
            ComplianceSummary::from_view(&view),
        ))
    }
}

#[cfg(test)]
mod tests;
