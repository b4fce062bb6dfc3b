use crate::application::read_models::LicenseReportView;
use crate::shared::error::ConvertError;

/// ReportFormatter port for rendering a license report
///
/// This port abstracts the output document format (Markdown, JSON, ...).
/// Implementations receive fully sorted data and only lay it out.
pub trait ReportFormatter {
    /// Renders the read model
    ///
    /// # Arguments
    /// * `view` - Aggregated report for one Grant target
    ///
    /// # Returns
    /// The rendered document
    ///
    /// # Errors
    /// Returns `ConvertError::Render` if the document cannot be produced
    fn format(&self, view: &LicenseReportView) -> Result<String, ConvertError>;
}
