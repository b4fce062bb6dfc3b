/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod convert_request;
mod convert_response;
mod output_format;

pub use convert_request::{ConvertRequest, ConvertRequestBuilder};
pub use convert_response::{ComplianceSummary, ConvertResponse};
pub use output_format::OutputFormat;
