use super::OutputFormat;
use crate::ports::outbound::InputSource;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// ConvertRequest - Request DTO for the report conversion use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Where the Grant JSON report is read from
    pub input: InputSource,
    /// Format of the rendered report
    pub format: OutputFormat,
}

impl ConvertRequest {
    pub fn new(input: InputSource, format: OutputFormat) -> Self {
        Self { input, format }
    }

    pub fn builder() -> ConvertRequestBuilder {
        ConvertRequestBuilder::default()
    }
}

/// Builder for ConvertRequest; the input source is mandatory
#[derive(Debug, Default)]
pub struct ConvertRequestBuilder {
    input: Option<InputSource>,
    format: OutputFormat,
}

impl ConvertRequestBuilder {
    pub fn input(mut self, input: InputSource) -> Self {
        self.input = Some(input);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> Result<ConvertRequest> {
        let input = self.input.ok_or_else(|| ReportError::Validation {
            message: "an input source is required".to_string(),
        })?;
        Ok(ConvertRequest::new(input, self.format))
    }
}
