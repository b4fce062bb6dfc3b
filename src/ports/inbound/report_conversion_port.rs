use crate::shared::error::ConvertError;

/// ReportConversionPort - Inbound port for the report conversion core
///
/// Takes the raw bytes of a Grant JSON report and returns the rendered
/// document. Implementations are pure: no I/O and no state shared between
/// calls, so identical input always yields identical output.
pub trait ReportConversionPort {
    /// Converts a raw Grant report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The bytes are not a well-formed report (`ConvertError::Parse`)
    /// - The report lists no targets (`ConvertError::EmptyTargets`)
    /// - Rendering fails (`ConvertError::Render`)
    fn convert(&self, raw: &[u8]) -> Result<String, ConvertError>;
}
